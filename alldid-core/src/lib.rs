//! # alldid-core
//!
//! Dispatch core for resolving human-readable names across several naming
//! systems (.bit, ENS, Space ID, Solana Name Service, Unstoppable Domains,
//! Polkadot Name Service, custom HTTP backends) behind one API.
//!
//! ## Pieces
//!
//! | Item | Role |
//! |------|------|
//! | [`NamingService`] | Contract every naming system adapter implements |
//! | [`AllDid`] | Holds installed services, routes each query to the first that supports the name |
//! | [`RecordItem`] / [`RecordItemAddr`] | Normalized record shape all services return |
//! | [`AllDidError`] | Closed error taxonomy shared by dispatcher and services |
//!
//! ## Routing
//!
//! Services are probed in installation order with
//! [`NamingService::is_supported`]; the first `true` wins and later services
//! are not asked. There is no priority field and no support cache: install
//! order is the only tie-break.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, AllDidError>`](AllDidError). The
//! dispatcher raises only [`AllDidError::DidIsNotSupported`]; everything else
//! comes from the service that handled the call, already translated into the
//! shared taxonomy through [`ServiceErrorMapper`].
//!
//! Concrete HTTP-backed services live in the `alldid-services` crate.

mod dispatcher;
mod error;
mod record;
mod traits;

#[cfg(test)]
mod test_utils;

pub use dispatcher::AllDid;
pub use error::{AllDidError, DISPATCHER_SERVICE, ErrorCode, Result};
pub use record::{KeyPrefix, RecordItem, RecordItemAddr};
pub use traits::{ErrorContext, NamingService, RawServiceError, ServiceErrorMapper};
