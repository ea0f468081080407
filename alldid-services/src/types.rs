//! Service configuration types.

use serde::{Deserialize, Serialize};

/// Default retry count for HTTP-backed services.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

// ============ .bit ============

/// .bit deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitNetwork {
    #[default]
    Mainnet,
    Testnet,
}

impl BitNetwork {
    /// Public account indexer for this network.
    pub fn default_indexer_uri(self) -> &'static str {
        match self {
            Self::Mainnet => "https://indexer-v1.did.id",
            Self::Testnet => "https://test-indexer.did.id",
        }
    }
}

/// Options for the .bit indexer service.
///
/// ```json
/// { "network": "testnet", "indexer_uri": "https://test-indexer.did.id", "max_retries": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotbitServiceOptions {
    #[serde(default)]
    pub network: BitNetwork,
    /// Overrides the network's public indexer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexer_uri: Option<String>,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl DotbitServiceOptions {
    pub fn new(network: BitNetwork) -> Self {
        Self {
            network,
            indexer_uri: None,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    #[must_use]
    pub fn with_indexer_uri(mut self, indexer_uri: impl Into<String>) -> Self {
        self.indexer_uri = Some(indexer_uri.into());
        self
    }

    /// Configured indexer, or the network default.
    pub fn resolved_indexer_uri(&self) -> &str {
        self.indexer_uri
            .as_deref()
            .filter(|uri| !uri.trim().is_empty())
            .unwrap_or_else(|| self.network.default_indexer_uri())
    }
}

impl Default for DotbitServiceOptions {
    fn default() -> Self {
        Self::new(BitNetwork::Mainnet)
    }
}

// ============ API ============

/// Options for a generic AllDID HTTP API backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiServiceOptions {
    /// Backend root, e.g. `https://api.example.com/v1`.
    pub base_uri: String,
    /// Network label forwarded to the backend. Empty means backend default.
    #[serde(default)]
    pub network: String,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl ApiServiceOptions {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            network: String::new(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    #[must_use]
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = network.into();
        self
    }
}

// ============ Factory ============

/// Options for one service, as accepted by [`create_service`](crate::create_service).
///
/// Serialized with `"service"` as the tag and `"options"` as the content:
///
/// ```json
/// { "service": "dotbit", "options": { "network": "mainnet" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "service", content = "options", rename_all = "snake_case")]
pub enum ServiceOptions {
    /// Requires feature `dotbit`.
    #[cfg(feature = "dotbit")]
    Dotbit(DotbitServiceOptions),
    /// Requires feature `dotbit`.
    #[cfg(feature = "dotbit")]
    DotbitExtension(DotbitServiceOptions),
    /// Requires feature `api`.
    #[cfg(feature = "api")]
    Api(ApiServiceOptions),
}

/// Options for [`create_instance`](crate::create_instance).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateInstanceOptions {
    #[serde(default)]
    pub dotbit: DotbitServiceOptions,
}
