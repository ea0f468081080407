//! Service 公共工具函数

use std::time::Duration;

use alldid_core::{AllDidError, DISPATCHER_SERVICE, RecordItem, RecordItemAddr, Result};
use regex::Regex;
use reqwest::Client;

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub(crate) fn create_http_client(service: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| AllDidError::Unknown {
            service: service.to_string(),
            raw_code: Some("HTTP_CLIENT".to_string()),
            raw_message: e.to_string(),
        })
}

// ============ 名称语法 ============

/// Suffix-based name syntax: one or more non-empty dot-terminated labels
/// followed by a fixed top-level label.
///
/// `SuffixRule::new("bit")` accepts `alice.bit` and `a.b.bit`, and rejects
/// `.bit`, `alice..bit` and anything containing whitespace.
#[derive(Debug, Clone)]
pub struct SuffixRule {
    suffix: String,
    pattern: Regex,
}

impl SuffixRule {
    /// Builds the rule for `suffix` (without the leading dot).
    pub fn new(suffix: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"^([^.\s]+\.)+{}$", regex::escape(suffix))).map_err(
            |e| AllDidError::InvalidParameter {
                service: DISPATCHER_SERVICE.to_string(),
                param: "suffix".to_string(),
                detail: e.to_string(),
            },
        )?;
        Ok(Self {
            suffix: suffix.to_string(),
            pattern,
        })
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

// ============ 名称转换 ============

/// How a queried name maps onto the backend's own account names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameTransfer {
    /// Name is used as is.
    Identity,
    /// Name ends with `.` and is completed with a fixed top-level label,
    /// e.g. `alice.eth.` → `alice.eth.bit`.
    Append(&'static str),
}

impl NameTransfer {
    /// Queried name → backend account. `None` if the name does not have the
    /// shape this transfer expects.
    pub(crate) fn to_account(self, name: &str) -> Option<String> {
        match self {
            Self::Identity => Some(name.to_string()),
            Self::Append(label) => name.ends_with('.').then(|| format!("{name}{label}")),
        }
    }

    /// Backend account → name as callers query it.
    pub(crate) fn from_account(self, account: &str) -> Option<String> {
        match self {
            Self::Identity => Some(account.to_string()),
            Self::Append(label) => account
                .strip_suffix(label)
                .filter(|name| name.len() > 1 && name.ends_with('.'))
                .map(str::to_string),
        }
    }
}

// ============ 记录筛选 ============

/// Keeps valued records, restricted to `keys` (case-insensitive) when given.
pub(crate) fn filter_records(records: Vec<RecordItem>, keys: Option<&[String]>) -> Vec<RecordItem> {
    let wanted: Option<Vec<String>> = keys.map(|keys| keys.iter().map(|k| k.to_lowercase()).collect());
    records
        .into_iter()
        .filter(|r| !r.is_empty())
        .filter(|r| {
            wanted
                .as_ref()
                .is_none_or(|wanted| wanted.contains(&r.key.to_lowercase()))
        })
        .collect()
}

/// Address records, restricted to `tickers` (case-insensitive) when given.
pub(crate) fn select_addrs(records: Vec<RecordItem>, tickers: Option<&[String]>) -> Vec<RecordItemAddr> {
    records
        .into_iter()
        .filter(|r| !r.is_empty())
        .filter_map(RecordItemAddr::from_record)
        .filter(|a| {
            tickers.is_none_or(|tickers| tickers.iter().any(|t| t.eq_ignore_ascii_case(&a.symbol)))
        })
        .collect()
}

/// `dweb.*` values, restricted to one protocol when given.
pub(crate) fn select_dwebs(records: &[RecordItem], protocol: Option<&str>) -> Vec<String> {
    records
        .iter()
        .filter(|r| !r.is_empty() && r.is_dweb())
        .filter(|r| protocol.is_none_or(|p| r.subtype.eq_ignore_ascii_case(p)))
        .map(|r| r.value.clone())
        .collect()
}
