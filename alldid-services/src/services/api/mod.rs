//! Generic AllDID HTTP API service

mod error;
mod http;
mod service;
mod types;

use reqwest::Client;

use alldid_core::{AllDidError, Result};

use crate::services::common::create_http_client;
use crate::types::ApiServiceOptions;

pub(crate) const SERVICE_NAME: &str = "api";

/// Service backed by a remote AllDID API.
///
/// Every operation, [`is_supported`](alldid_core::NamingService::is_supported)
/// included, is a `POST {base_uri}/{method}` round trip. A backend that
/// cannot be reached supports nothing.
pub struct ApiService {
    pub(crate) client: Client,
    pub(crate) base_uri: String,
    pub(crate) network: String,
    pub(crate) max_retries: u32,
}

impl ApiService {
    pub fn new(options: ApiServiceOptions) -> Result<Self> {
        let base_uri = options.base_uri.trim().trim_end_matches('/').to_string();
        if base_uri.is_empty() {
            return Err(AllDidError::InvalidParameter {
                service: SERVICE_NAME.to_string(),
                param: "base_uri".to_string(),
                detail: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            client: create_http_client(SERVICE_NAME)?,
            base_uri,
            network: options.network,
            max_retries: options.max_retries,
        })
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }
}

impl std::fmt::Debug for ApiService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiService")
            .field("base_uri", &self.base_uri)
            .field("network", &self.network)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}
