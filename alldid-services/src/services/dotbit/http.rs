//! .bit indexer JSON-RPC 请求方法

use serde::Serialize;
use serde::de::DeserializeOwned;

use alldid_core::{AllDidError, ErrorContext, RawServiceError, Result, ServiceErrorMapper};

use crate::http_client::HttpUtils;
use crate::utils::truncate_for_log;

use super::DotbitService;
use super::types::{
    AccountInfo, AccountInfoData, AccountParams, AccountRecordsData, IndexerRecord, RpcRequest,
    RpcResponse,
};

impl DotbitService {
    /// Calls one indexer method, returning the envelope's `data`.
    pub(crate) async fn rpc<P, T>(
        &self,
        method: &str,
        params: P,
        context: ErrorContext,
    ) -> Result<Option<T>>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        log::debug!("POST {} {method}", self.indexer_uri);

        let request = RpcRequest::new(method, params);
        let (status, response_text) = HttpUtils::execute_request_with_retry(
            self.client.post(&self.indexer_uri).json(&request),
            self.service_name,
            method,
            self.max_retries,
        )
        .await?;

        self.decode_response(status, &response_text, context)
    }

    pub(crate) fn decode_response<T: DeserializeOwned>(
        &self,
        status: u16,
        response_text: &str,
        context: ErrorContext,
    ) -> Result<Option<T>> {
        let response: RpcResponse<T> = HttpUtils::parse_json(response_text, self.service_name)
            .map_err(|e| {
                if status >= 400 {
                    self.unknown_error(RawServiceError::with_code(
                        format!("HTTP_{status}"),
                        truncate_for_log(response_text),
                    ))
                } else {
                    e
                }
            })?;

        if let Some(error) = response.error {
            log::debug!("[{}] JSON-RPC 错误 {}: {}", self.service_name, error.code, error.message);
            return Err(self.map_error(
                RawServiceError::with_code(error.code.to_string(), error.message),
                context,
            ));
        }

        let result = response
            .result
            .ok_or_else(|| self.parse_error("响应中缺少 result 字段"))?;

        if result.errno != 0 {
            log::debug!("[{}] Indexer 错误 {}: {}", self.service_name, result.errno, result.errmsg);
            return Err(self.map_error(
                RawServiceError::with_code(result.errno.to_string(), result.errmsg),
                context,
            ));
        }

        Ok(result.data)
    }

    /// `das_accountInfo`
    pub(crate) async fn account_info(&self, name: &str, method: &str) -> Result<AccountInfo> {
        let account = self.require_account(name)?;
        let data: AccountInfoData = self
            .rpc(
                "das_accountInfo",
                AccountParams { account: &account },
                ErrorContext::for_name(method, name),
            )
            .await?
            .ok_or_else(|| self.unregistered_error(&ErrorContext::for_name(method, name)))?;
        Ok(data.account_info)
    }

    /// `das_accountRecords`
    pub(crate) async fn account_records(
        &self,
        name: &str,
        method: &str,
    ) -> Result<Vec<IndexerRecord>> {
        let account = self.require_account(name)?;
        let data: Option<AccountRecordsData> = self
            .rpc(
                "das_accountRecords",
                AccountParams { account: &account },
                ErrorContext::for_name(method, name),
            )
            .await?;
        Ok(data.map(|d| d.records).unwrap_or_default())
    }
}

/// `UnregisteredName` → `Ok(false)`, anything else passes through.
pub(crate) fn registered_from<T>(result: Result<T>) -> Result<bool> {
    match result {
        Ok(_) => Ok(true),
        Err(AllDidError::UnregisteredName { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::dotbit::types::ReverseRecordData;
    use crate::types::DotbitServiceOptions;
    use alldid_core::ErrorCode;

    // Mainnet indexer response shape
    const ACCOUNT_INFO: &str = r#"{
        "jsonrpc": "2.0",
        "id": 1,
        "result": {
            "errno": 0,
            "errmsg": "",
            "data": {
                "out_point": {
                    "tx_hash": "0x5f7e6e1ec8b0a7a3fb0b5e9e3f2f2b3b8b0f8e2b1a6a5c5a3c5b0f8f3f3d4a1a",
                    "index": 0
                },
                "account_info": {
                    "account": "leonx.bit",
                    "account_alias": "leonx.bit",
                    "account_id_hex": "0x2a0e7fdb4cd1a8b7c9f4a7c8f2d3e4f5a6b7c8d9",
                    "next_account_id_hex": "0x2a0e8f0c6c6d8b0b7a6c5d4e3f2a1b0c9d8e7f6a",
                    "create_at_unix": 1631635200,
                    "expired_at_unix": 1947254400,
                    "status": 0,
                    "das_lock_arg_hex": "0x05c72b6f66017246d6a7f159f5c2bf358188ad9eca05c72b6f66017246d6a7f159f5c2bf358188ad9eca",
                    "owner_algorithm_id": 5,
                    "owner_key": "0xc72b6f66017246d6a7f159f5c2bf358188ad9eca",
                    "manager_algorithm_id": 5,
                    "manager_key": "0xc72b6f66017246d6a7f159f5c2bf358188ad9eca"
                }
            }
        }
    }"#;

    const ACCOUNT_NOT_EXIST: &str =
        r#"{"jsonrpc":"2.0","id":1,"result":{"errno":20007,"errmsg":"account not exist","data":null}}"#;

    fn service() -> DotbitService {
        DotbitService::new(&DotbitServiceOptions::default()).unwrap()
    }

    #[test]
    fn decode_account_info() {
        let data: Option<AccountInfoData> = service()
            .decode_response(200, ACCOUNT_INFO, ErrorContext::for_name("owner", "leonx.bit"))
            .unwrap();
        let info = data.map(|d| d.account_info).unwrap();
        assert_eq!(info.owner_key, "0xc72b6f66017246d6a7f159f5c2bf358188ad9eca");
        assert_eq!(info.manager_key, "0xc72b6f66017246d6a7f159f5c2bf358188ad9eca");
        assert_eq!(info.account_id_hex, "0x2a0e7fdb4cd1a8b7c9f4a7c8f2d3e4f5a6b7c8d9");
    }

    #[test]
    fn decode_account_not_exist() {
        let err = service()
            .decode_response::<AccountInfoData>(
                200,
                ACCOUNT_NOT_EXIST,
                ErrorContext::for_name("owner", "nobody.bit"),
            )
            .unwrap_err();
        assert_eq!(err, AllDidError::unregistered("dotbit", "nobody.bit"));
        assert_eq!(registered_from::<()>(Err(err)), Ok(false));
    }

    #[test]
    fn decode_records() {
        let body = r#"{"jsonrpc":"2.0","id":1,"result":{"errno":0,"errmsg":"","data":{
            "account":"leonx.bit",
            "records":[
                {"key":"address.bsc","label":"","value":"0xc72b6f66017246d6a7f159f5c2bf358188ad9eca","ttl":"300"},
                {"key":"dweb.ipfs","label":"","value":"QmcGV8fimB7aeBxnDqr7bSSLUWLeyFKUukGqDhWnvriQ3T","ttl":"300"}
            ]
        }}}"#;
        let data: Option<AccountRecordsData> = service()
            .decode_response(200, body, ErrorContext::default())
            .unwrap();
        let records = data.map(|d| d.records).unwrap_or_default();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].key, "dweb.ipfs");
        assert_eq!(records[1].ttl, 300);
    }

    #[test]
    fn decode_empty_reverse() {
        let body = r#"{"jsonrpc":"2.0","id":1,"result":{"errno":0,"errmsg":"","data":{"account":"","account_alias":""}}}"#;
        let data: Option<ReverseRecordData> = service()
            .decode_response(200, body, ErrorContext::default())
            .unwrap();
        assert_eq!(data.map(|d| d.account).as_deref(), Some(""));
    }

    #[test]
    fn decode_rpc_error() {
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"the method das_nope does not exist"}}"#;
        let context = ErrorContext {
            method: Some("das_nope".to_string()),
            ..ErrorContext::default()
        };
        let err = service()
            .decode_response::<AccountInfoData>(200, body, context)
            .unwrap_err();
        assert_eq!(err, AllDidError::unsupported_method("dotbit", "das_nope"));
    }

    #[test]
    fn decode_gateway_page() {
        let err = service()
            .decode_response::<AccountInfoData>(404, "404 page not found", ErrorContext::default())
            .unwrap_err();
        assert!(matches!(
            err,
            AllDidError::Unknown { ref raw_code, .. } if raw_code.as_deref() == Some("HTTP_404")
        ));
    }

    #[test]
    fn decode_missing_result() {
        let err = service()
            .decode_response::<AccountInfoData>(200, r#"{"jsonrpc":"2.0","id":1}"#, ErrorContext::default())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Unknown);
    }

    #[test]
    fn registered_from_passes_other_errors() {
        let err = AllDidError::unsupported_method("dotbit", "owner");
        assert_eq!(registered_from::<()>(Err(err.clone())), Err(err));
        assert_eq!(registered_from(Ok(())), Ok(true));
    }
}
