//! First-match dispatcher over installed naming services.

use std::sync::Arc;

use crate::error::{AllDidError, Result};
use crate::record::{RecordItem, RecordItemAddr};
use crate::traits::NamingService;

/// Routes every query to the first installed service that supports the name.
///
/// Services are probed in installation order, one at a time: the next
/// service's [`is_supported`](NamingService::is_supported) is only awaited
/// after the previous one answered `false`. When two services accept the
/// same syntax, the one installed first always wins.
///
/// The dispatcher originates a single error, [`AllDidError::DidIsNotSupported`];
/// everything a service returns, success or failure, is passed through unchanged.
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use alldid_core::{AllDid, NamingService, Result};
/// # async fn example(dotbit: Arc<dyn NamingService>, ens: Arc<dyn NamingService>) -> Result<()> {
/// let mut alldid = AllDid::new();
/// alldid.install_service(dotbit);
/// alldid.install_service(ens);
///
/// if alldid.is_supported("alice.bit").await {
///     let owner = alldid.owner("alice.bit").await?;
///     println!("owner: {owner}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct AllDid {
    services: Vec<Arc<dyn NamingService>>,
}

impl AllDid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a service. No deduplication and no overlap check.
    pub fn install_service(&mut self, service: Arc<dyn NamingService>) {
        log::debug!(
            "Installing naming service '{}' at position {}",
            service.service_name(),
            self.services.len()
        );
        self.services.push(service);
    }

    /// Builder form of [`install_service`](Self::install_service).
    #[must_use]
    pub fn with_service(mut self, service: Arc<dyn NamingService>) -> Self {
        self.install_service(service);
        self
    }

    /// Installed services, in routing order.
    pub fn services(&self) -> &[Arc<dyn NamingService>] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    async fn find_service(&self, name: &str) -> Option<&Arc<dyn NamingService>> {
        for service in &self.services {
            if service.is_supported(name).await {
                log::debug!("{name} routed to '{}'", service.service_name());
                return Some(service);
            }
        }
        None
    }

    /// `true` if any installed service supports `name`.
    pub async fn is_supported(&self, name: &str) -> bool {
        self.find_service(name).await.is_some()
    }

    /// The first installed service that supports `name`.
    pub async fn get_service_or_throw(&self, name: &str) -> Result<Arc<dyn NamingService>> {
        match self.find_service(name).await {
            Some(service) => Ok(Arc::clone(service)),
            None => {
                log::warn!("No installed naming service supports {name}");
                Err(AllDidError::not_supported(name))
            }
        }
    }

    pub async fn is_registered(&self, name: &str) -> Result<bool> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(&*service, "is_registered", service.is_registered(name).await)
    }

    pub async fn is_available(&self, name: &str) -> Result<bool> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(&*service, "is_available", service.is_available(name).await)
    }

    pub async fn owner(&self, name: &str) -> Result<String> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(&*service, "owner", service.owner(name).await)
    }

    pub async fn manager(&self, name: &str) -> Result<String> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(&*service, "manager", service.manager(name).await)
    }

    pub async fn token_id(&self, name: &str) -> Result<String> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(&*service, "token_id", service.token_id(name).await)
    }

    pub async fn record(&self, name: &str, key: &str) -> Result<Option<RecordItem>> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(&*service, "record", service.record(name, key).await)
    }

    pub async fn records(&self, name: &str, keys: Option<&[String]>) -> Result<Vec<RecordItem>> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(&*service, "records", service.records(name, keys).await)
    }

    pub async fn addr(&self, name: &str, ticker: &str) -> Result<Option<RecordItemAddr>> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(&*service, "addr", service.addr(name, ticker).await)
    }

    pub async fn addrs(
        &self,
        name: &str,
        tickers: Option<&[String]>,
    ) -> Result<Vec<RecordItemAddr>> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(&*service, "addrs", service.addrs(name, tickers).await)
    }

    pub async fn dweb(&self, name: &str) -> Result<Option<String>> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(&*service, "dweb", service.dweb(name).await)
    }

    pub async fn dwebs(&self, name: &str, protocol: Option<&str>) -> Result<Vec<String>> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(&*service, "dwebs", service.dwebs(name, protocol).await)
    }

    pub async fn registry_address(&self, name: &str) -> Result<String> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(
            &*service,
            "registry_address",
            service.registry_address(name).await,
        )
    }

    pub async fn nostrs(&self, name: &str) -> Result<Vec<RecordItem>> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(&*service, "nostrs", service.nostrs(name).await)
    }

    pub async fn nostr(&self, name: &str) -> Result<Option<RecordItem>> {
        let service = self.get_service_or_throw(name).await?;
        log_outcome(&*service, "nostr", service.nostr(name).await)
    }

    /// Reverse lookup across installed services.
    ///
    /// An address carries no suffix to route on, so services are asked in
    /// installation order and the first name found is returned. A service that
    /// answers `UnsupportedMethod` is skipped while others remain; if none of
    /// them could answer at all, the first `UnsupportedMethod` is returned.
    /// Any other error is returned as is.
    pub async fn reverse(&self, address: &str, ticker: Option<&str>) -> Result<Option<String>> {
        let mut answered = false;
        let mut unsupported = None;
        for service in &self.services {
            match service.reverse(address, ticker).await {
                Ok(Some(name)) => {
                    log::debug!(
                        "Reverse of {address} answered by '{}'",
                        service.service_name()
                    );
                    return Ok(Some(name));
                }
                Ok(None) => answered = true,
                Err(e @ AllDidError::UnsupportedMethod { .. }) => {
                    if unsupported.is_none() {
                        unsupported = Some((service, e));
                    }
                }
                Err(e) => return log_outcome(&**service, "reverse", Err(e)),
            }
        }
        match unsupported {
            Some((service, e)) if !answered => log_outcome(&**service, "reverse", Err(e)),
            _ => Ok(None),
        }
    }
}

impl std::fmt::Debug for AllDid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllDid")
            .field(
                "services",
                &self
                    .services
                    .iter()
                    .map(|s| s.service_name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Logs a failed delegation without altering it.
fn log_outcome<T>(service: &dyn NamingService, method: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        if e.is_expected() {
            log::warn!("[{}] {method} failed: {e}", service.service_name());
        } else {
            log::error!("[{}] {method} failed: {e}", service.service_name());
        }
    }
    result
}
