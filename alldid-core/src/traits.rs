//! Naming service adapter contract and error translation helpers.

use async_trait::async_trait;

use crate::error::{AllDidError, Result};
use crate::record::{KeyPrefix, RecordItem, RecordItemAddr};

/// Raw backend error, before translation.
#[derive(Debug, Clone)]
pub struct RawServiceError {
    /// Error code (format differs per backend).
    pub code: Option<String>,
    /// Original error message.
    pub message: String,
}

impl RawServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Call-site information available when translating an error.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Queried name (for `UnregisteredName` and friends).
    pub name: Option<String>,
    /// Queried record key (for `RecordNotFound`).
    pub key: Option<String>,
    /// Operation being performed (for `UnsupportedMethod`).
    pub method: Option<String>,
}

impl ErrorContext {
    pub fn for_name(method: &str, name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            key: None,
            method: Some(method.to_string()),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    pub(crate) fn name_or_unknown(&self) -> String {
        self.name.clone().unwrap_or_else(|| "<unknown>".to_string())
    }
}

/// Maps a backend's native errors onto [`AllDidError`].
///
/// Every adapter implements this at its boundary so that callers of the
/// dispatcher see one error shape regardless of which service answered.
pub trait ServiceErrorMapper {
    /// Service identifier used in the produced errors.
    fn service_id(&self) -> &'static str;

    /// Translate a raw backend error.
    fn map_error(&self, raw: RawServiceError, context: ErrorContext) -> AllDidError;

    /// Shortcut: unparseable backend response.
    fn parse_error(&self, detail: impl ToString) -> AllDidError {
        AllDidError::Unknown {
            service: self.service_id().to_string(),
            raw_code: Some("PARSE_ERROR".to_string()),
            raw_message: detail.to_string(),
        }
    }

    /// Shortcut: unmapped backend error (fallback).
    fn unknown_error(&self, raw: RawServiceError) -> AllDidError {
        AllDidError::Unknown {
            service: self.service_id().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }

    /// Shortcut: the name has no registration.
    fn unregistered_error(&self, context: &ErrorContext) -> AllDidError {
        AllDidError::unregistered(self.service_id(), context.name_or_unknown())
    }
}

/// Naming service adapter.
///
/// One implementation per naming system (.bit, ENS, generic HTTP API, …).
/// Every method is asynchronous, including [`is_supported`](Self::is_supported),
/// so the dispatcher probes all services with one calling convention.
///
/// Methods with a default implementation are optional capabilities: the
/// default fails with [`AllDidError::UnsupportedMethod`] (or derives the
/// answer from other methods, as [`is_available`](Self::is_available) does).
#[async_trait]
pub trait NamingService: Send + Sync {
    /// Service identifier, e.g. `"dotbit"`.
    fn service_name(&self) -> &'static str;

    /// Whether `name` belongs to this service's namespace.
    ///
    /// Should be a pure syntax check without side effects. Services that must
    /// ask a remote backend document it.
    async fn is_supported(&self, name: &str) -> bool;

    /// Whether `name` currently resolves to an owner.
    async fn is_registered(&self, name: &str) -> Result<bool>;

    /// Logical negation of [`is_registered`](Self::is_registered).
    async fn is_available(&self, name: &str) -> Result<bool> {
        self.is_registered(name).await.map(|registered| !registered)
    }

    /// Owner address. Fails with `UnregisteredName` if not registered.
    async fn owner(&self, name: &str) -> Result<String>;

    /// Manager (operator) address, for systems that separate it from the owner.
    async fn manager(&self, name: &str) -> Result<String> {
        let _ = name;
        Err(AllDidError::unsupported_method(self.service_name(), "manager"))
    }

    /// Stable identifier of the name within its system. Format is opaque.
    async fn token_id(&self, name: &str) -> Result<String>;

    /// Single-key lookup. `Ok(None)` when the key has no value.
    async fn record(&self, name: &str, key: &str) -> Result<Option<RecordItem>>;

    /// Batch lookup. `None` returns the service's default key set.
    /// Keys without a value are omitted.
    async fn records(&self, name: &str, keys: Option<&[String]>) -> Result<Vec<RecordItem>>;

    /// Address lookup for one ticker.
    async fn addr(&self, name: &str, ticker: &str) -> Result<Option<RecordItemAddr>>;

    /// Address lookup for several tickers, or every address when `None`.
    async fn addrs(&self, name: &str, tickers: Option<&[String]>) -> Result<Vec<RecordItemAddr>>;

    /// Primary decentralized-web content pointer.
    async fn dweb(&self, name: &str) -> Result<Option<String>> {
        let _ = name;
        Err(AllDidError::unsupported_method(self.service_name(), "dweb"))
    }

    /// All content pointers, optionally restricted to one protocol.
    async fn dwebs(&self, name: &str, protocol: Option<&str>) -> Result<Vec<String>> {
        let _ = (name, protocol);
        Err(AllDidError::unsupported_method(self.service_name(), "dwebs"))
    }

    /// Best-effort address → name lookup. `Ok(None)` when no reverse record exists.
    async fn reverse(&self, address: &str, ticker: Option<&str>) -> Result<Option<String>>;

    /// On-chain registry backing this namespace.
    async fn registry_address(&self, name: &str) -> Result<String> {
        let _ = name;
        Err(AllDidError::unsupported_method(
            self.service_name(),
            "registry_address",
        ))
    }

    /// Nostr public key records.
    async fn nostrs(&self, name: &str) -> Result<Vec<RecordItem>> {
        let keys = [KeyPrefix::Profile.key("nostr")];
        self.records(name, Some(keys.as_slice())).await
    }

    /// First Nostr public key record.
    async fn nostr(&self, name: &str) -> Result<Option<RecordItem>> {
        Ok(self.nostrs(name).await?.into_iter().next())
    }
}
