use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An in-game annotation tied to a match. Rows reference matches(id) without
/// cascade semantics, so callers delete commentary before its match.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Commentary {
    pub id: i64,
    pub match_id: i64,
    pub minute: i32,
    pub period: String,
    pub event_type: String,
    pub actor: String,
    pub team: String,
    pub message: String,
    pub metadata: serde_json::Value,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCommentary {
    pub match_id: i64,
    pub minute: i32,
    pub period: String,
    pub event_type: String,
    pub actor: String,
    pub team: String,
    pub message: String,
    pub metadata: serde_json::Value,
    pub tags: Vec<String>,
}
