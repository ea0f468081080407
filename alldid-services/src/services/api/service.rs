//! `NamingService` trait implementation

use async_trait::async_trait;

use alldid_core::{ErrorContext, NamingService, RecordItem, RecordItemAddr, Result};

use super::types::{
    ApiRequest, DwebData, DwebsData, IsAvailableData, IsRegisteredData, IsSupportedData,
    ManagerData, OwnerData, RegistryAddressData, ReverseData, TokenIdData,
};
use super::{ApiService, SERVICE_NAME};

#[async_trait]
impl NamingService for ApiService {
    fn service_name(&self) -> &'static str {
        SERVICE_NAME
    }

    /// Asks the backend. Transport and backend failures count as "not supported".
    async fn is_supported(&self, name: &str) -> bool {
        let result = self
            .call::<IsSupportedData>(
                "is_supported",
                ApiRequest::name(name),
                ErrorContext::for_name("is_supported", name),
            )
            .await;

        match result {
            Ok(data) => data.is_some_and(|d| d.is_supported),
            Err(e) => {
                log::warn!("[{SERVICE_NAME}] is_supported({name}) probe failed: {e}");
                false
            }
        }
    }

    async fn is_registered(&self, name: &str) -> Result<bool> {
        let data: IsRegisteredData = self
            .call_required(
                "is_registered",
                ApiRequest::name(name),
                ErrorContext::for_name("is_registered", name),
            )
            .await?;
        Ok(data.is_registered)
    }

    async fn is_available(&self, name: &str) -> Result<bool> {
        let data: IsAvailableData = self
            .call_required(
                "is_available",
                ApiRequest::name(name),
                ErrorContext::for_name("is_available", name),
            )
            .await?;
        Ok(data.is_available)
    }

    async fn owner(&self, name: &str) -> Result<String> {
        let data: OwnerData = self
            .call_required(
                "owner",
                ApiRequest::name(name),
                ErrorContext::for_name("owner", name),
            )
            .await?;
        Ok(data.owner)
    }

    async fn manager(&self, name: &str) -> Result<String> {
        let data: ManagerData = self
            .call_required(
                "manager",
                ApiRequest::name(name),
                ErrorContext::for_name("manager", name),
            )
            .await?;
        Ok(data.manager)
    }

    async fn token_id(&self, name: &str) -> Result<String> {
        let data: TokenIdData = self
            .call_required(
                "token_id",
                ApiRequest::name(name),
                ErrorContext::for_name("token_id", name),
            )
            .await?;
        Ok(data.token_id)
    }

    async fn record(&self, name: &str, key: &str) -> Result<Option<RecordItem>> {
        let request = ApiRequest {
            key: Some(key),
            ..ApiRequest::name(name)
        };
        let record: Option<RecordItem> = self
            .call(
                "record",
                request,
                ErrorContext::for_name("record", name).with_key(key),
            )
            .await?;
        Ok(record.filter(|r| !r.is_empty()))
    }

    async fn records(&self, name: &str, keys: Option<&[String]>) -> Result<Vec<RecordItem>> {
        let request = ApiRequest {
            keys,
            ..ApiRequest::name(name)
        };
        let records: Option<Vec<RecordItem>> = self
            .call("records", request, ErrorContext::for_name("records", name))
            .await?;
        Ok(records
            .unwrap_or_default()
            .into_iter()
            .filter(|r| !r.is_empty())
            .collect())
    }

    async fn addr(&self, name: &str, ticker: &str) -> Result<Option<RecordItemAddr>> {
        let request = ApiRequest {
            ticker: Some(ticker),
            ..ApiRequest::name(name)
        };
        let addr: Option<RecordItemAddr> = self
            .call("addr", request, ErrorContext::for_name("addr", name))
            .await?;
        Ok(addr.filter(|a| !a.is_empty()))
    }

    async fn addrs(&self, name: &str, tickers: Option<&[String]>) -> Result<Vec<RecordItemAddr>> {
        let request = ApiRequest {
            keys: tickers,
            ..ApiRequest::name(name)
        };
        let addrs: Option<Vec<RecordItemAddr>> = self
            .call("addrs", request, ErrorContext::for_name("addrs", name))
            .await?;
        Ok(addrs
            .unwrap_or_default()
            .into_iter()
            .filter(|a| !a.is_empty())
            .collect())
    }

    async fn dweb(&self, name: &str) -> Result<Option<String>> {
        let data: Option<DwebData> = self
            .call("dweb", ApiRequest::name(name), ErrorContext::for_name("dweb", name))
            .await?;
        Ok(data.and_then(|d| d.dweb).filter(|v| !v.is_empty()))
    }

    async fn dwebs(&self, name: &str, protocol: Option<&str>) -> Result<Vec<String>> {
        let request = ApiRequest {
            protocol,
            ..ApiRequest::name(name)
        };
        let data: Option<DwebsData> = self
            .call("dwebs", request, ErrorContext::for_name("dwebs", name))
            .await?;
        Ok(data.map(|d| d.dwebs).unwrap_or_default())
    }

    async fn reverse(&self, address: &str, ticker: Option<&str>) -> Result<Option<String>> {
        let request = ApiRequest {
            address: Some(address),
            ticker,
            ..ApiRequest::default()
        };
        let context = ErrorContext {
            method: Some("reverse".to_string()),
            ..ErrorContext::default()
        };
        let data: Option<ReverseData> = self.call("reverse", request, context).await?;
        Ok(data.and_then(|d| d.name).filter(|n| !n.is_empty()))
    }

    async fn registry_address(&self, name: &str) -> Result<String> {
        let data: RegistryAddressData = self
            .call_required(
                "registry_address",
                ApiRequest::name(name),
                ErrorContext::for_name("registry_address", name),
            )
            .await?;
        Ok(data.registry_address)
    }
}
