//! Global settings singleton.

use serde::{Deserialize, Serialize};

/// Site-wide settings. A single document; `contact_link` is the default
/// call-to-action URL the public pages wire into their dynamic-link targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    pub contact_link: Option<String>,
}

/// Request body for overwriting the settings singleton. The write is
/// unconditional: last write wins.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub contact_link: String,
}
