//! Merchant model matching the site frontend contract.

use serde::{Deserialize, Serialize};

/// A merchant listed in the directory.
///
/// `is_enabled` gates public visibility only; disabled merchants still appear
/// in the admin list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub id: String,
    pub name: String,
    pub contact_link: String,
    pub is_enabled: bool,
}

/// Request body for creating or overwriting a merchant.
///
/// Updates have no partial-field semantics: every field is always sent and the
/// stored document is fully overwritten.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantInput {
    pub name: String,
    #[serde(default)]
    pub contact_link: String,
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
}

fn default_enabled() -> bool {
    true
}
