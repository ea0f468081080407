//! AllDID API error mapping

use alldid_core::{AllDidError, ErrorContext, RawServiceError, ServiceErrorMapper};

use super::{ApiService, SERVICE_NAME};

/// API envelope code mapping
impl ServiceErrorMapper for ApiService {
    fn service_id(&self) -> &'static str {
        SERVICE_NAME
    }

    fn map_error(&self, raw: RawServiceError, context: ErrorContext) -> AllDidError {
        match raw.code.as_deref() {
            Some("4000") => AllDidError::InvalidParameter {
                service: self.service_id().to_string(),
                param: if context.key.is_some() { "key" } else { "name" }.to_string(),
                detail: raw.message,
            },
            Some("4001") => self.unregistered_error(&context),
            Some("4002") => AllDidError::RecordNotFound {
                service: self.service_id().to_string(),
                name: context.name.unwrap_or_else(|| "<unknown>".to_string()),
                key: context.key.unwrap_or_else(|| "<unknown>".to_string()),
            },
            Some("4003") => AllDidError::DidIsNotSupported {
                service: self.service_id().to_string(),
                name: context.name.unwrap_or_else(|| "<unknown>".to_string()),
            },
            Some("4004") => AllDidError::unsupported_method(
                self.service_id(),
                context.method.as_deref().unwrap_or("<unknown>"),
            ),
            // 500 / 5000: backend failure
            _ => self.unknown_error(raw),
        }
    }
}
