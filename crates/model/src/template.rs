//! Enterprise card template models and parameters.

use serde::{Deserialize, Serialize};

/// Wallet platform a template targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Apple,
    Google,
}

/// What the issued cards are used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    EmployeeBadge,
    Hotel,
}

/// NFC protocol spoken by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    Desfire,
    Seos,
    SmartTap,
}

/// A card template as returned by the console API.
///
/// Enumerated fields are kept as strings so that values added on the
/// server side still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub use_case: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_published_at: Option<String>,
    #[serde(default)]
    pub issued_keys_count: Option<u64>,
    #[serde(default)]
    pub active_keys_count: Option<u64>,
    #[serde(default)]
    pub allowed_device_counts: Option<serde_json::Value>,
    #[serde(default)]
    pub support_settings: Option<serde_json::Value>,
    #[serde(default)]
    pub terms_settings: Option<serde_json::Value>,
    #[serde(default)]
    pub style_settings: Option<serde_json::Value>,
}

/// Visual design of the card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateDesign {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_secondary_color: Option<String>,
    /// Base64-encoded image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_image: Option<String>,
}

/// Support contact details shown on the card back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SupportInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions_url: Option<String>,
}

/// Body for POST /v1/console/card-templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTemplateParams {
    pub name: String,
    pub platform: Platform,
    pub use_case: UseCase,
    pub protocol: Protocol,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_on_multiple_devices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iphone_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design: Option<TemplateDesign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_info: Option<SupportInfo>,
}

/// Parameters for PUT /v1/console/card-templates/{template_id}.
///
/// `template_id` selects the template and is not part of the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTemplateParams {
    #[serde(skip)]
    pub template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_on_multiple_devices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iphone_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_info: Option<SupportInfo>,
}
