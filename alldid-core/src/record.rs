//! Normalized record model shared by every naming service.

use serde::{Deserialize, Serialize};

/// Well-known key categories.
///
/// A record key is `"{prefix}.{subtype}"`, e.g. `address.eth` or
/// `profile.twitter`. Keys without a dot have no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPrefix {
    /// Cryptocurrency receiving addresses (`address.btc`).
    Address,
    /// Profile fields (`profile.email`, `profile.nostr`).
    Profile,
    /// Decentralized web content pointers (`dweb.ipfs`).
    Dweb,
    /// Free text records.
    Text,
    /// User-defined keys (`custom_key.*`).
    #[serde(rename = "custom_key")]
    Custom,
}

impl KeyPrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Profile => "profile",
            Self::Dweb => "dweb",
            Self::Text => "text",
            Self::Custom => "custom_key",
        }
    }

    /// Builds a full key under this prefix. The subtype is lowercased.
    pub fn key(self, subtype: &str) -> String {
        format!("{}.{}", self.as_str(), subtype.to_lowercase())
    }

    /// Returns `true` if `key` belongs to this category.
    pub fn matches(self, key: &str) -> bool {
        key.split_once('.')
            .is_some_and(|(prefix, _)| prefix == self.as_str())
    }
}

impl std::fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single attribute attached to a name.
///
/// `key` is `"{type}.{subtype}"` whenever `type` is non-empty. The relation is
/// never validated; build items through [`RecordItem::from_key`] to keep it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordItem {
    /// Full dotted key, e.g. `address.eth`.
    pub key: String,
    /// Category prefix of `key`; empty if the key has no dot.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Final path segment of `key`.
    pub subtype: String,
    /// User-assigned annotation; empty if none.
    #[serde(default)]
    pub label: String,
    /// Resolved value; empty if unset.
    #[serde(default)]
    pub value: String,
    /// Cache lifetime hint in seconds, 0 if the source has no such notion.
    #[serde(default)]
    pub ttl: u32,
}

impl RecordItem {
    /// Creates an empty item for `key`, deriving `type` and `subtype` from it.
    ///
    /// ```
    /// use alldid_core::RecordItem;
    ///
    /// let item = RecordItem::from_key("address.eth");
    /// assert_eq!(item.record_type, "address");
    /// assert_eq!(item.subtype, "eth");
    ///
    /// let bare = RecordItem::from_key("ETH");
    /// assert_eq!(bare.record_type, "");
    /// assert_eq!(bare.subtype, "ETH");
    /// ```
    pub fn from_key(key: impl Into<String>) -> Self {
        let key = key.into();
        let (record_type, subtype) = match key.split_once('.') {
            Some((prefix, _)) => (
                prefix.to_string(),
                key.rsplit('.').next().unwrap_or_default().to_string(),
            ),
            None => (String::new(), key.clone()),
        };

        Self {
            key,
            record_type,
            subtype,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// `true` when the record carries no value.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_address(&self) -> bool {
        self.record_type == KeyPrefix::Address.as_str()
    }

    pub fn is_dweb(&self) -> bool {
        self.record_type == KeyPrefix::Dweb.as_str()
    }
}

/// An address record with its canonical uppercase ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordItemAddr {
    #[serde(flatten)]
    pub record: RecordItem,
    /// Uppercase ticker, e.g. `ETH`.
    pub symbol: String,
}

impl RecordItemAddr {
    /// Wraps an address-typed record. Returns `None` for any other category.
    pub fn from_record(record: RecordItem) -> Option<Self> {
        if !record.is_address() {
            return None;
        }
        let symbol = record.subtype.to_uppercase();
        Some(Self { record, symbol })
    }
}

impl std::ops::Deref for RecordItemAddr {
    type Target = RecordItem;

    fn deref(&self) -> &Self::Target {
        &self.record
    }
}

impl From<RecordItemAddr> for RecordItem {
    fn from(addr: RecordItemAddr) -> Self {
        addr.record
    }
}
