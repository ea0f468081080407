//! `NamingService` trait implementation

use async_trait::async_trait;

use alldid_core::{AllDidError, ErrorContext, NamingService, RecordItem, RecordItemAddr, Result};

use crate::services::common::{filter_records, select_addrs, select_dwebs};

use super::DotbitService;
use super::http::registered_from;
use super::types::{KeyInfo, ReverseParams, ReverseRecordData, coin_type};

/// Ticker used when `reverse` is called without one.
const DEFAULT_REVERSE_TICKER: &str = "ETH";

impl DotbitService {
    async fn record_items(&self, name: &str, method: &str) -> Result<Vec<RecordItem>> {
        Ok(self
            .account_records(name, method)
            .await?
            .into_iter()
            .map(RecordItem::from)
            .collect())
    }
}

#[async_trait]
impl NamingService for DotbitService {
    fn service_name(&self) -> &'static str {
        self.service_name
    }

    async fn is_supported(&self, name: &str) -> bool {
        self.account_of(name).is_some()
    }

    async fn is_registered(&self, name: &str) -> Result<bool> {
        registered_from(self.account_info(name, "is_registered").await)
    }

    async fn owner(&self, name: &str) -> Result<String> {
        Ok(self.account_info(name, "owner").await?.owner_key)
    }

    async fn manager(&self, name: &str) -> Result<String> {
        Ok(self.account_info(name, "manager").await?.manager_key)
    }

    async fn token_id(&self, name: &str) -> Result<String> {
        Ok(self.account_info(name, "token_id").await?.account_id_hex)
    }

    async fn record(&self, name: &str, key: &str) -> Result<Option<RecordItem>> {
        let key = key.to_lowercase();
        Ok(self
            .record_items(name, "record")
            .await?
            .into_iter()
            .find(|r| r.key == key && !r.is_empty()))
    }

    async fn records(&self, name: &str, keys: Option<&[String]>) -> Result<Vec<RecordItem>> {
        let records = self.record_items(name, "records").await?;
        Ok(filter_records(records, keys))
    }

    async fn addr(&self, name: &str, ticker: &str) -> Result<Option<RecordItemAddr>> {
        let tickers = [ticker.to_string()];
        Ok(self
            .addrs(name, Some(tickers.as_slice()))
            .await?
            .into_iter()
            .next())
    }

    async fn addrs(&self, name: &str, tickers: Option<&[String]>) -> Result<Vec<RecordItemAddr>> {
        let records = self.record_items(name, "addrs").await?;
        Ok(select_addrs(records, tickers))
    }

    async fn dweb(&self, name: &str) -> Result<Option<String>> {
        let records = self.record_items(name, "dweb").await?;
        Ok(select_dwebs(&records, None).into_iter().next())
    }

    async fn dwebs(&self, name: &str, protocol: Option<&str>) -> Result<Vec<String>> {
        let records = self.record_items(name, "dwebs").await?;
        Ok(select_dwebs(&records, protocol))
    }

    async fn reverse(&self, address: &str, ticker: Option<&str>) -> Result<Option<String>> {
        let ticker = ticker.unwrap_or(DEFAULT_REVERSE_TICKER);
        let Some(coin) = coin_type(ticker) else {
            log::debug!("[{}] No coin type for ticker {ticker}", self.service_name);
            return Ok(None);
        };

        let params = ReverseParams {
            kind: "blockchain",
            key_info: KeyInfo {
                coin_type: coin,
                chain_id: "",
                key: address,
            },
        };
        let context = ErrorContext {
            method: Some("reverse".to_string()),
            ..ErrorContext::default()
        };

        let data: Option<ReverseRecordData> =
            match self.rpc("das_reverseRecord", params, context).await {
                Ok(data) => data,
                Err(AllDidError::UnregisteredName { .. }) => None,
                Err(e) => return Err(e),
            };

        Ok(data
            .map(|d| d.account)
            .filter(|account| !account.is_empty())
            .and_then(|account| self.transfer.from_account(&account)))
    }
}
