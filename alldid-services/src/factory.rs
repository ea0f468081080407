//! Service and dispatcher factory functions.

use std::sync::Arc;

use alldid_core::{AllDid, NamingService, Result};

#[cfg(feature = "api")]
use crate::services::ApiService;
#[cfg(feature = "dotbit")]
use crate::services::DotbitService;
#[cfg(feature = "api")]
use crate::types::ApiServiceOptions;
use crate::types::{CreateInstanceOptions, ServiceOptions};

/// Creates a [`NamingService`] from the given options.
///
/// The concrete service type is determined by the [`ServiceOptions`] variant.
///
/// # Examples
///
/// ```rust,no_run
/// use alldid_services::{create_service, DotbitServiceOptions, ServiceOptions};
///
/// let dotbit = create_service(ServiceOptions::Dotbit(DotbitServiceOptions::default())).unwrap();
/// assert_eq!(dotbit.service_name(), "dotbit");
/// ```
pub fn create_service(options: ServiceOptions) -> Result<Arc<dyn NamingService>> {
    match options {
        #[cfg(feature = "dotbit")]
        ServiceOptions::Dotbit(options) => Ok(Arc::new(DotbitService::new(&options)?)),
        #[cfg(feature = "dotbit")]
        ServiceOptions::DotbitExtension(options) => {
            Ok(Arc::new(DotbitService::extension(&options)?))
        }
        #[cfg(feature = "api")]
        ServiceOptions::Api(options) => Ok(Arc::new(ApiService::new(options)?)),
    }
}

/// Builds a dispatcher with every HTTP-backed service enabled by features.
///
/// Installation order is `.bit`, then the `.bit` extension. Services for
/// chain-backed systems (ENS, Solana, ...) are installed by the caller
/// afterwards with [`AllDid::install_service`].
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use alldid_core::NamingService;
/// # async fn example(ens: Arc<dyn NamingService>) -> alldid_core::Result<()> {
/// use alldid_services::{create_instance, CreateInstanceOptions};
///
/// let mut alldid = create_instance(CreateInstanceOptions::default())?;
/// alldid.install_service(ens);
///
/// let owner = alldid.owner("leonx.bit").await?;
/// # Ok(())
/// # }
/// ```
pub fn create_instance(options: CreateInstanceOptions) -> Result<AllDid> {
    let mut alldid = AllDid::new();

    #[cfg(feature = "dotbit")]
    {
        alldid.install_service(create_service(ServiceOptions::Dotbit(options.dotbit.clone()))?);
        alldid.install_service(create_service(ServiceOptions::DotbitExtension(
            options.dotbit,
        ))?);
    }
    #[cfg(not(feature = "dotbit"))]
    let _ = options;

    log::debug!("Created AllDid instance: {alldid:?}");
    Ok(alldid)
}

/// Builds a dispatcher with a single remote API service.
#[cfg(feature = "api")]
pub fn create_lite_instance(options: ApiServiceOptions) -> Result<AllDid> {
    Ok(AllDid::new().with_service(create_service(ServiceOptions::Api(options))?))
}
