//! AllDID API HTTP 请求方法

use serde::de::DeserializeOwned;

use alldid_core::{ErrorContext, RawServiceError, Result, ServiceErrorMapper};

use crate::http_client::HttpUtils;
use crate::utils::truncate_for_log;

use super::types::{ApiRequest, ApiResponse};
use super::{ApiService, SERVICE_NAME};

impl ApiService {
    /// `POST {base_uri}/{method}`, returning the envelope's `data`.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        request: ApiRequest<'_>,
        context: ErrorContext,
    ) -> Result<Option<T>> {
        let request = ApiRequest {
            network: (!self.network.is_empty()).then_some(self.network.as_str()),
            ..request
        };

        let url = format!("{}/{method}", self.base_uri);
        log::debug!("POST {url}");

        let (status, response_text) = HttpUtils::execute_request_with_retry(
            self.client.post(&url).json(&request),
            SERVICE_NAME,
            method,
            self.max_retries,
        )
        .await?;

        self.decode_response(status, &response_text, context)
    }

    /// Like [`call`](Self::call), but a missing `data` is a malformed response.
    pub(crate) async fn call_required<T: DeserializeOwned>(
        &self,
        method: &str,
        request: ApiRequest<'_>,
        context: ErrorContext,
    ) -> Result<T> {
        self.call(method, request, context)
            .await?
            .ok_or_else(|| self.parse_error(format!("响应中缺少 data 字段 ({method})")))
    }

    pub(crate) fn decode_response<T: DeserializeOwned>(
        &self,
        status: u16,
        response_text: &str,
        context: ErrorContext,
    ) -> Result<Option<T>> {
        let response: ApiResponse<T> =
            HttpUtils::parse_json(response_text, SERVICE_NAME).map_err(|e| {
                // 非 envelope 的 HTTP 错误页
                if status >= 400 {
                    self.unknown_error(RawServiceError::with_code(
                        format!("HTTP_{status}"),
                        truncate_for_log(response_text),
                    ))
                } else {
                    e
                }
            })?;

        if response.code != 0 {
            log::debug!("API 错误 {}: {}", response.code, response.msg);
            return Err(self.map_error(
                RawServiceError::with_code(response.code.to_string(), response.msg),
                context,
            ));
        }

        Ok(response.data)
    }
}
