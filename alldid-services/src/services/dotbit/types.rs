//! .bit indexer 类型定义

use serde::{Deserialize, Deserializer, Serialize};

use alldid_core::RecordItem;

// ============ JSON-RPC ============

#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub id: u32,
    pub method: &'a str,
    pub params: [P; 1],
}

impl<'a, P> RpcRequest<'a, P> {
    pub fn new(method: &'a str, params: P) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method,
            params: [params],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse<T> {
    pub result: Option<IndexerResult<T>>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Indexer envelope: `errno == 0` means success.
#[derive(Debug, Deserialize)]
pub(crate) struct IndexerResult<T> {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: String,
    pub data: Option<T>,
}

// ============ Params ============

#[derive(Debug, Serialize)]
pub(crate) struct AccountParams<'a> {
    pub account: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReverseParams<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub key_info: KeyInfo<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct KeyInfo<'a> {
    pub coin_type: &'static str,
    pub chain_id: &'static str,
    pub key: &'a str,
}

// ============ Data ============

#[derive(Debug, Deserialize)]
pub(crate) struct AccountInfoData {
    pub account_info: AccountInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccountInfo {
    pub account_id_hex: String,
    pub owner_key: String,
    pub manager_key: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccountRecordsData {
    #[serde(default)]
    pub records: Vec<IndexerRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IndexerRecord {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, deserialize_with = "deserialize_ttl")]
    pub ttl: u32,
}

impl From<IndexerRecord> for RecordItem {
    fn from(record: IndexerRecord) -> Self {
        RecordItem::from_key(record.key.to_lowercase())
            .with_label(record.label)
            .with_value(record.value)
            .with_ttl(record.ttl)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReverseRecordData {
    #[serde(default)]
    pub account: String,
}

/// The indexer sends ttl as a decimal string; tolerate numbers and junk.
fn deserialize_ttl<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Ttl {
        Number(u64),
        Negative(i64),
        Text(String),
    }

    let clamp = |n: u64| u32::try_from(n).unwrap_or(u32::MAX);
    Ok(match Option::<Ttl>::deserialize(deserializer)? {
        Some(Ttl::Number(n)) => clamp(n),
        Some(Ttl::Text(s)) => s.trim().parse().map(clamp).unwrap_or(0),
        Some(Ttl::Negative(_)) | None => 0,
    })
}

// ============ Coin types ============

/// SLIP-44 coin type the indexer keys reverse records by.
pub(crate) fn coin_type(ticker: &str) -> Option<&'static str> {
    match ticker.to_uppercase().as_str() {
        "BTC" => Some("0"),
        "DOGE" => Some("3"),
        "ETH" => Some("60"),
        "TRX" => Some("195"),
        "CKB" => Some("309"),
        "BNB" => Some("714"),
        "MATIC" => Some("966"),
        "BSC" => Some("9006"),
        _ => None,
    }
}
