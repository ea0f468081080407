//! Generic HTTP client tools
//!
//! Shared request flow for every HTTP-backed naming service: sending,
//! logging, transport-failure classification and retry. Each service still
//! builds its own `RequestBuilder` and parses its own envelope.

use std::time::Duration;

use alldid_core::AllDidError;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::utils::truncate_for_log;

/// Failure below the service protocol: the backend never produced an answer
/// we could interpret. All of these are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TransportError {
    Timeout(String),
    Network(String),
    RateLimited {
        retry_after: Option<u64>,
        body: String,
    },
    Server {
        status: u16,
        body: String,
    },
}

impl TransportError {
    fn into_error(self, service: &str) -> AllDidError {
        let (code, message) = match self {
            Self::Timeout(detail) => ("TIMEOUT".to_string(), detail),
            Self::Network(detail) => ("NETWORK_ERROR".to_string(), detail),
            Self::RateLimited { retry_after, body } => (
                "RATE_LIMITED".to_string(),
                match retry_after {
                    Some(secs) => format!("rate limited (retry after {secs}s): {body}"),
                    None => format!("rate limited: {body}"),
                },
            ),
            Self::Server { status, body } => (format!("HTTP_{status}"), body),
        };
        AllDidError::Unknown {
            service: service.to_string(),
            raw_code: Some(code),
            raw_message: message,
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout(detail) => write!(f, "timeout: {detail}"),
            Self::Network(detail) => write!(f, "network error: {detail}"),
            Self::RateLimited { .. } => write!(f, "rate limited"),
            Self::Server { status, .. } => write!(f, "server error (HTTP {status})"),
        }
    }
}

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Sends one request and returns `(status_code, response_text)`.
    async fn execute_request(
        request_builder: RequestBuilder,
        service: &str,
        method_name: &str,
    ) -> Result<(u16, String), TransportError> {
        log::debug!("[{service}] {method_name}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{service}] Response Status: {status_code}");

        // Retry-After 要在读取 body 之前取出
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{service}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(TransportError::RateLimited { retry_after, body });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{service}] Server error (HTTP {status_code})");
            return Err(TransportError::Server {
                status: status_code,
                body,
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to read response body: {e}")))?;

        log::debug!(
            "[{service}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Sends a request, retrying transport failures with exponential backoff.
    ///
    /// `max_retries == 0` sends exactly once. Requests whose body cannot be
    /// cloned are sent once as well.
    pub(crate) async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        service: &str,
        method_name: &str,
        max_retries: u32,
    ) -> Result<(u16, String), AllDidError> {
        let mut attempt = 0;
        loop {
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{service}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, service, method_name)
                    .await
                    .map_err(|e| e.into_error(service));
            };

            match Self::execute_request(req, service, method_name).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] {} failed (attempt {}/{}), retrying in {:.1}s: {}",
                        service,
                        method_name,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into_error(service)),
            }
        }
    }

    /// Parse JSON response
    pub(crate) fn parse_json<T>(response_text: &str, service: &str) -> Result<T, AllDidError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{service}] JSON parse failed: {e}");
            log::error!(
                "[{service}] Raw response: {}",
                truncate_for_log(response_text)
            );
            AllDidError::Unknown {
                service: service.to_string(),
                raw_code: Some("PARSE_ERROR".to_string()),
                raw_message: e.to_string(),
            }
        })
    }
}

/// `Retry-After` when the backend sent one (capped at 30s), otherwise backoff.
fn retry_delay(error: &TransportError, attempt: u32) -> Duration {
    if let TransportError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// 100ms, 200ms, 400ms, ... capped at 10s
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}
