//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{AllDidError, Result};
use crate::record::{RecordItem, RecordItemAddr};
use crate::traits::NamingService;

// ===== MockNamingService =====

/// Suffix-matching service that counts its support probes.
pub struct MockNamingService {
    name: &'static str,
    suffix: &'static str,
    probes: AtomicUsize,
    reverse: HashMap<String, String>,
}

impl MockNamingService {
    pub fn new(name: &'static str, suffix: &'static str) -> Self {
        Self {
            name,
            suffix,
            probes: AtomicUsize::new(0),
            reverse: HashMap::new(),
        }
    }

    pub fn with_reverse(mut self, address: &str, name: &str) -> Self {
        self.reverse.insert(address.to_string(), name.to_string());
        self
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

pub fn suffix_service(name: &'static str, suffix: &'static str) -> Arc<MockNamingService> {
    Arc::new(MockNamingService::new(name, suffix))
}

#[async_trait]
impl NamingService for MockNamingService {
    fn service_name(&self) -> &'static str {
        self.name
    }

    async fn is_supported(&self, name: &str) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        name.len() > self.suffix.len() && name.ends_with(self.suffix)
    }

    async fn is_registered(&self, _name: &str) -> Result<bool> {
        Ok(true)
    }

    async fn owner(&self, _name: &str) -> Result<String> {
        Ok(format!("{}-owner", self.name))
    }

    async fn token_id(&self, name: &str) -> Result<String> {
        Ok(format!("{}:{name}", self.name))
    }

    async fn record(&self, _name: &str, _key: &str) -> Result<Option<RecordItem>> {
        Ok(None)
    }

    async fn records(&self, _name: &str, _keys: Option<&[String]>) -> Result<Vec<RecordItem>> {
        Ok(Vec::new())
    }

    async fn addr(&self, _name: &str, _ticker: &str) -> Result<Option<RecordItemAddr>> {
        Ok(None)
    }

    async fn addrs(
        &self,
        _name: &str,
        _tickers: Option<&[String]>,
    ) -> Result<Vec<RecordItemAddr>> {
        Ok(Vec::new())
    }

    async fn reverse(&self, address: &str, _ticker: Option<&str>) -> Result<Option<String>> {
        if self.reverse.is_empty() {
            return Err(AllDidError::unsupported_method(self.name, "reverse"));
        }
        Ok(self.reverse.get(address).cloned())
    }
}
