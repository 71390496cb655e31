//! Wire DTOs for the backend function host.
//!
//! DESIGN
//! ======
//! Response shapes are loose: success is signalled by the presence of a single
//! marker field (`access_token`, `id`, `success`), and any failure may carry a
//! `message`. Every response type therefore deserializes permissively and
//! exposes an `into_result` that applies the success rule in one place.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::api::ApiError;

// =============================================================================
// TOKEN EXCHANGE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenRequest {
    pub code: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl TokenResponse {
    /// The access token, or a rejection when the exchange produced none.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `access_token` is missing or empty.
    pub fn into_result(self) -> Result<String, ApiError> {
        match self.access_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ApiError::Rejected(self.message)),
        }
    }
}

// =============================================================================
// BOARDS
// =============================================================================

/// A board as returned by the proxy's `boards` listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteBoard {
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pin_count: Option<u64>,
    #[serde(default)]
    pub follower_count: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BoardListResponse {
    /// Absent or `null` means the account has no boards.
    #[serde(default)]
    pub items: Option<Vec<RemoteBoard>>,
}

impl BoardListResponse {
    #[must_use]
    pub fn into_items(self) -> Vec<RemoteBoard> {
        self.items.unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateBoardRequest {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CreateBoardResponse {
    #[serde(default, deserialize_with = "deserialize_opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A board the service confirmed as created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedBoard {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl CreateBoardResponse {
    /// The created board. `requested_name` fills in a name the service omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the response carries no `id`.
    pub fn into_result(self, requested_name: &str) -> Result<CreatedBoard, ApiError> {
        match self.id {
            Some(id) if !id.is_empty() => Ok(CreatedBoard {
                id,
                name: self.name.unwrap_or_else(|| requested_name.to_owned()),
                description: self.description.unwrap_or_default(),
            }),
            _ => Err(ApiError::Rejected(self.message)),
        }
    }
}

// =============================================================================
// PINS
// =============================================================================

/// Pin creation payload. `media_source` is an image URL, not image bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreatePinRequest {
    pub board_id: String,
    pub title: String,
    pub media_source: String,
    pub description: String,
    pub link: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CreatePinResponse {
    #[serde(default, deserialize_with = "deserialize_opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl CreatePinResponse {
    /// The new pin's id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the response carries no `id`.
    pub fn into_result(self) -> Result<String, ApiError> {
        match self.id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(ApiError::Rejected(self.message)),
        }
    }
}

// =============================================================================
// PRODUCT PARSE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParseRequest {
    pub url: String,
}

/// Product metadata scraped from a shop page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedProduct {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub description: String,
    /// Image URL.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "deserialize_opt_string_or_number")]
    pub price: Option<String>,
    /// Discount in percent.
    #[serde(default, deserialize_with = "deserialize_opt_lenient_f64")]
    pub discount: Option<f64>,
    /// Origin site identifier, e.g. `"amazon"`.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub source: String,
}

impl ParsedProduct {
    /// Price worth displaying, skipping empty strings.
    #[must_use]
    pub fn display_price(&self) -> Option<&str> {
        self.price.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// Discount worth displaying, skipping zero.
    #[must_use]
    pub fn display_discount(&self) -> Option<f64> {
        self.discount.filter(|d| *d != 0.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ParseResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<ParsedProduct>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ParseResponse {
    /// The parsed product when the service reported success with data.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false or `data` is missing.
    pub fn into_result(self) -> Result<ParsedProduct, ApiError> {
        match (self.success, self.data) {
            (true, Some(product)) => Ok(product),
            _ => Err(ApiError::Rejected(self.message)),
        }
    }
}

// =============================================================================
// DESERIALIZE HELPERS
// =============================================================================

fn deserialize_opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}

fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_opt_string_or_number(deserializer)?.ok_or_else(|| D::Error::custom("expected string or number, got null"))
}

/// Number, numeric string or `"15%"`; anything unreadable is treated as absent.
fn deserialize_opt_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
        Some(serde_json::Value::String(s)) => {
            let trimmed = s.trim().trim_end_matches('%');
            if trimmed.is_empty() {
                return Ok(None);
            }
            Ok(trimmed.parse::<f64>().ok())
        }
        Some(_) => Ok(None),
    }
}

/// A string field that may arrive as `null`; `null` reads as empty.
fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
