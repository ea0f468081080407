//! .bit indexer error mapping

use alldid_core::{AllDidError, ErrorContext, RawServiceError, ServiceErrorMapper};

use super::DotbitService;

/// Indexer errno mapping, plus JSON-RPC protocol errors
impl ServiceErrorMapper for DotbitService {
    fn service_id(&self) -> &'static str {
        self.service_name
    }

    fn map_error(&self, raw: RawServiceError, context: ErrorContext) -> AllDidError {
        match raw.code.as_deref() {
            // 10000: params invalid
            // -32602: JSON-RPC invalid params
            Some("10000" | "-32602") => AllDidError::InvalidParameter {
                service: self.service_id().to_string(),
                param: "params".to_string(),
                detail: raw.message,
            },
            // 10001: method not exist
            // -32601: JSON-RPC method not found
            Some("10001" | "-32601") => AllDidError::unsupported_method(
                self.service_id(),
                context.method.as_deref().unwrap_or("<unknown>"),
            ),
            // 20006: account format invalid
            Some("20006") => AllDidError::InvalidParameter {
                service: self.service_id().to_string(),
                param: "name".to_string(),
                detail: raw.message,
            },
            // 20007: account not exist
            Some("20007") => self.unregistered_error(&context),
            _ => self.unknown_error(raw),
        }
    }
}
