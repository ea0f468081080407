//! AllDID API wire types

use serde::{Deserialize, Serialize};

/// Request body. Only the fields an operation uses are sent.
#[derive(Debug, Default, Serialize)]
pub(crate) struct ApiRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<&'a str>,
}

impl<'a> ApiRequest<'a> {
    pub fn name(name: &'a str) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }
}

/// Response envelope: `code == 0` means success.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IsSupportedData {
    pub is_supported: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IsRegisteredData {
    pub is_registered: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IsAvailableData {
    pub is_available: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnerData {
    pub owner: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ManagerData {
    pub manager: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenIdData {
    pub token_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DwebData {
    pub dweb: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DwebsData {
    #[serde(default)]
    pub dwebs: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReverseData {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegistryAddressData {
    pub registry_address: String,
}
