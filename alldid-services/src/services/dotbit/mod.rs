//! .bit account indexer service

mod error;
mod http;
mod service;
mod types;

use reqwest::Client;

use alldid_core::{AllDidError, Result};

use crate::services::common::{NameTransfer, SuffixRule, create_http_client};
use crate::types::DotbitServiceOptions;

pub(crate) const SERVICE_NAME: &str = "dotbit";
pub(crate) const EXTENSION_SERVICE_NAME: &str = "dotbit_extension";

/// Top-level label of every .bit account.
const BIT_SUFFIX: &str = "bit";

/// .bit names resolved through the account indexer JSON-RPC API.
///
/// Two flavours share this type:
///
/// - [`DotbitService::new`] serves `alice.bit` style accounts.
/// - [`DotbitService::extension`] serves names of other systems registered as
///   .bit sub-accounts. They are queried with a trailing dot (`alice.eth.`)
///   and resolved as `alice.eth.bit`.
pub struct DotbitService {
    pub(crate) client: Client,
    pub(crate) indexer_uri: String,
    pub(crate) max_retries: u32,
    pub(crate) service_name: &'static str,
    pub(crate) transfer: NameTransfer,
    pub(crate) rule: SuffixRule,
}

impl DotbitService {
    pub fn new(options: &DotbitServiceOptions) -> Result<Self> {
        Self::build(options, SERVICE_NAME, NameTransfer::Identity)
    }

    pub fn extension(options: &DotbitServiceOptions) -> Result<Self> {
        Self::build(
            options,
            EXTENSION_SERVICE_NAME,
            NameTransfer::Append(BIT_SUFFIX),
        )
    }

    fn build(
        options: &DotbitServiceOptions,
        service_name: &'static str,
        transfer: NameTransfer,
    ) -> Result<Self> {
        Ok(Self {
            client: create_http_client(service_name)?,
            indexer_uri: options.resolved_indexer_uri().to_string(),
            max_retries: options.max_retries,
            service_name,
            transfer,
            rule: SuffixRule::new(BIT_SUFFIX)?,
        })
    }

    pub fn indexer_uri(&self) -> &str {
        &self.indexer_uri
    }

    /// .bit account behind `name`, if `name` is in this service's namespace.
    pub(crate) fn account_of(&self, name: &str) -> Option<String> {
        self.transfer
            .to_account(name)
            .filter(|account| self.rule.matches(account))
    }

    pub(crate) fn require_account(&self, name: &str) -> Result<String> {
        self.account_of(name)
            .ok_or_else(|| AllDidError::DidIsNotSupported {
                service: self.service_name.to_string(),
                name: name.to_string(),
            })
    }
}

impl std::fmt::Debug for DotbitService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DotbitService")
            .field("service_name", &self.service_name)
            .field("indexer_uri", &self.indexer_uri)
            .field("transfer", &self.transfer)
            .finish_non_exhaustive()
    }
}
