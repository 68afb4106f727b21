//! NFC key-card models and parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a key card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardState {
    Active,
    Suspended,
    Unlinked,
    Deleted,
    /// A state this client does not know about yet.
    #[serde(other)]
    Unknown,
}

impl CardState {
    /// Wire name used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Unlinked => "unlinked",
            Self::Deleted => "deleted",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardState {
    type Err = ParseCardStateError;

    /// Parses a known state, ignoring case. `unknown` is not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            "unlinked" => Ok(Self::Unlinked),
            "deleted" => Ok(Self::Deleted),
            _ => Err(ParseCardStateError(s.to_string())),
        }
    }
}

/// Error parsing a card state name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown card state '{0}', expected active, suspended, unlinked or deleted")]
pub struct ParseCardStateError(String);

/// A provisioned key card as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub install_url: Option<String>,
    #[serde(default)]
    pub state: Option<CardState>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub card_template_id: Option<String>,
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub site_code: Option<String>,
    #[serde(default)]
    pub direct_install_url: Option<String>,
}

/// Envelope for GET /v1/key-cards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardList {
    #[serde(default)]
    pub keys: Vec<Card>,
}

/// Body for POST /v1/key-cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProvisionCardParams {
    pub card_template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_on_multiple_devices: Option<bool>,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_code: Option<String>,
    /// ISO-8601 timestamp.
    pub start_date: String,
    /// ISO-8601 timestamp.
    pub expiration_date: String,
    /// Base64-encoded photo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_photo: Option<String>,
}

/// Parameters for PATCH /v1/key-cards/{card_id}.
///
/// `card_id` selects the card and is not part of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateCardParams {
    #[serde(skip)]
    pub card_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_photo: Option<String>,
}

/// Query for GET /v1/key-cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCardsParams {
    pub template_id: String,
    pub state: Option<CardState>,
}

impl ListCardsParams {
    /// List every card issued from `template_id`.
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            state: None,
        }
    }

    /// Restrict the listing to cards in `state`.
    pub fn with_state(mut self, state: CardState) -> Self {
        self.state = Some(state);
        self
    }
}
