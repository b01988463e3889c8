//! DTOs for favorites endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::character::SUCCESS;

/// Identifier sent either as a JSON number or as a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for IdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdValue::Number(n) => write!(f, "{}", n),
            IdValue::Text(s) => f.write_str(s),
        }
    }
}

/// Request body for `POST /favorites/new`.
///
/// ```json
/// { "userId": "1", "characterId": "5" }
/// ```
///
/// An absent `userId` defaults to the single implicit user; an explicit
/// `null` is kept as `Some(None)` and rejected as invalid.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub user_id: Option<Option<IdValue>>,
    #[serde(default)]
    pub character_id: Option<IdValue>,
}

/// Query string for `DELETE /favorites/{character_id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFavoriteQuery {
    pub user_id: Option<String>,
}

/// Plain success envelope carrying a message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: SUCCESS,
            message: message.into(),
        }
    }
}
