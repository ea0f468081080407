//! 共享测试工具：内存表驱动的 naming service

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use alldid_core::{
    AllDidError, KeyPrefix, NamingService, RecordItem, RecordItemAddr, Result,
};
use async_trait::async_trait;

/// One registered name.
#[derive(Clone, Default)]
pub struct Entry {
    pub owner: String,
    pub records: Vec<RecordItem>,
}

/// Naming service answering from an in-memory table.
pub struct TableService {
    id: &'static str,
    suffix: &'static str,
    names: HashMap<String, Entry>,
}

impl TableService {
    pub fn new(id: &'static str, suffix: &'static str) -> Self {
        Self {
            id,
            suffix,
            names: HashMap::new(),
        }
    }

    pub fn with_name(mut self, name: &str, owner: &str, records: Vec<RecordItem>) -> Self {
        self.names.insert(
            name.to_string(),
            Entry {
                owner: owner.to_string(),
                records,
            },
        );
        self
    }

    pub fn into_arc(self) -> Arc<dyn NamingService> {
        Arc::new(self)
    }

    fn entry(&self, name: &str) -> Result<&Entry> {
        self.names
            .get(name)
            .ok_or_else(|| AllDidError::unregistered(self.id, name))
    }
}

/// `address.{ticker}` record with a value.
pub fn address(ticker: &str, value: &str) -> RecordItem {
    RecordItem::from_key(KeyPrefix::Address.key(ticker)).with_value(value)
}

#[async_trait]
impl NamingService for TableService {
    fn service_name(&self) -> &'static str {
        self.id
    }

    async fn is_supported(&self, name: &str) -> bool {
        name.strip_suffix(self.suffix)
            .is_some_and(|label| !label.is_empty() && label.split('.').all(|l| !l.is_empty()))
    }

    async fn is_registered(&self, name: &str) -> Result<bool> {
        Ok(self.names.contains_key(name))
    }

    async fn owner(&self, name: &str) -> Result<String> {
        Ok(self.entry(name)?.owner.clone())
    }

    async fn token_id(&self, name: &str) -> Result<String> {
        self.entry(name)?;
        Ok(format!("{}:{name}", self.id))
    }

    async fn record(&self, name: &str, key: &str) -> Result<Option<RecordItem>> {
        Ok(self
            .entry(name)?
            .records
            .iter()
            .find(|r| r.key == key && !r.is_empty())
            .cloned())
    }

    async fn records(&self, name: &str, keys: Option<&[String]>) -> Result<Vec<RecordItem>> {
        Ok(self
            .entry(name)?
            .records
            .iter()
            .filter(|r| !r.is_empty())
            .filter(|r| keys.is_none_or(|keys| keys.contains(&r.key)))
            .cloned()
            .collect())
    }

    async fn addr(&self, name: &str, ticker: &str) -> Result<Option<RecordItemAddr>> {
        let record = self.record(name, &KeyPrefix::Address.key(ticker)).await?;
        Ok(record.and_then(RecordItemAddr::from_record))
    }

    async fn addrs(&self, name: &str, tickers: Option<&[String]>) -> Result<Vec<RecordItemAddr>> {
        let keys: Option<Vec<String>> =
            tickers.map(|t| t.iter().map(|t| KeyPrefix::Address.key(t)).collect());
        let records = self.records(name, keys.as_deref()).await?;
        Ok(records
            .into_iter()
            .filter_map(RecordItemAddr::from_record)
            .collect())
    }

    async fn reverse(&self, address: &str, _ticker: Option<&str>) -> Result<Option<String>> {
        Ok(self
            .names
            .iter()
            .find(|(_, entry)| entry.owner == address)
            .map(|(name, _)| name.clone()))
    }
}
