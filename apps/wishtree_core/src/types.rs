use std::fmt;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Submitter id used when the client sends none.
pub const ANONYMOUS: &str = "anonymous";

/// Lifecycle tag of a wish. Wishes are created `PENDING` and nothing moves
/// them on yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WishStatus {
    #[default]
    Pending,
}

impl WishStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WishStatus::Pending => "PENDING",
        }
    }
}

impl fmt::Display for WishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WishStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(WishStatus::Pending),
            other => Err(format!("unknown wish status {other:?}")),
        }
    }
}

/// A stored wish, as returned by the API and as written to the JSON store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wish {
    pub id: i64,
    pub content: String,
    pub anonymous_id: String,
    pub created_at: String,
    pub status: WishStatus,
}

/// A validated wish that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewWish {
    pub content: String,
    pub anonymous_id: String,
    pub created_at: String,
    pub status: WishStatus,
}

impl NewWish {
    /// Stamp `createdAt` and `PENDING`.
    pub fn new(content: String, anonymous_id: String) -> Self {
        Self {
            content,
            anonymous_id,
            created_at: now_iso(),
            status: WishStatus::Pending,
        }
    }

    pub fn with_id(self, id: i64) -> Wish {
        Wish {
            id,
            content: self.content,
            anonymous_id: self.anonymous_id,
            created_at: self.created_at,
            status: self.status,
        }
    }
}

/// `2026-10-18T09:30:00.123Z`
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
