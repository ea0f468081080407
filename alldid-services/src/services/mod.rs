//! Naming service implementations

/// Shared utilities used by service implementations.
pub(crate) mod common;

#[cfg(feature = "api")]
mod api;
#[cfg(feature = "dotbit")]
mod dotbit;

#[cfg(feature = "api")]
pub use api::ApiService;
#[cfg(feature = "dotbit")]
pub use dotbit::DotbitService;
