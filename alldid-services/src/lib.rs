//! # alldid-services
//!
//! HTTP-backed naming services for [`alldid_core`] and factory functions that
//! assemble them into an [`AllDid`](alldid_core::AllDid) dispatcher.
//!
//! ## Supported Services
//!
//! | Service | Feature Flag | Namespace | Backend |
//! |---------|-------------|-----------|---------|
//! | [`DotbitService`] (`dotbit`) | `dotbit` | `alice.bit` | .bit account indexer (JSON-RPC) |
//! | [`DotbitService::extension`] (`dotbit_extension`) | `dotbit` | `alice.eth.` → `alice.eth.bit` | .bit account indexer |
//! | [`ApiService`] (`api`) | `api` | whatever the backend accepts | AllDID HTTP API |
//!
//! ## Feature Flags
//!
//! ### Service Selection
//!
//! - **`all-services`** *(default)*: enable every service above.
//! - **`dotbit`**: .bit and .bit extension services.
//! - **`api`**: the generic API service and [`create_lite_instance`].
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: platform TLS.
//! - **`rustls`**: rustls, for cross-compilation targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use alldid_services::{create_instance, CreateInstanceOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let alldid = create_instance(CreateInstanceOptions::default())?;
//!
//!     if alldid.is_supported("leonx.bit").await {
//!         println!("owner: {}", alldid.owner("leonx.bit").await?);
//!         if let Some(addr) = alldid.addr("leonx.bit", "BSC").await? {
//!             println!("{}: {}", addr.symbol, addr.value);
//!         }
//!     }
//!
//!     let name = alldid
//!         .reverse("0xc72b6f66017246d6a7f159f5c2bf358188ad9eca", Some("BNB"))
//!         .await?;
//!     println!("reverse: {name:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Backend failures are translated into [`AllDidError`](alldid_core::AllDidError)
//! at each service's boundary. Transport failures (timeouts, connection errors,
//! HTTP 429 and 502-504) are retried with exponential backoff up to
//! `max_retries` times and then surface as `Unknown`.

mod factory;
mod http_client;
mod services;
mod types;
mod utils;

// Re-export factory functions
#[cfg(feature = "api")]
pub use factory::create_lite_instance;
pub use factory::{create_instance, create_service};

// Re-export types
pub use types::{
    ApiServiceOptions, BitNetwork, CreateInstanceOptions, DEFAULT_MAX_RETRIES,
    DotbitServiceOptions, ServiceOptions,
};

pub use services::common::SuffixRule;

// Re-export concrete services (behind feature flags)
#[cfg(feature = "api")]
pub use services::ApiService;

#[cfg(feature = "dotbit")]
pub use services::DotbitService;
