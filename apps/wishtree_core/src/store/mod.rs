//! Durable wish storage.
//!
//! Two backends implement [`WishStore`]:
//! - [`SqlWishStore`]: the `wishes` table through sea-orm; every append is a
//!   single atomic `INSERT`.
//! - [`FileWishStore`]: one pretty-printed JSON array, newest first. Appends
//!   are serialized by a per-store lock and land through a temp file rename.
//!
//! Both list newest-first and treat an absent store as empty.

mod file;
mod sql;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{NewWish, Wish};

pub use file::FileWishStore;
pub use sql::SqlWishStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persisted data that cannot be read back. Never overwritten.
    #[error("corrupt wish store {location}: {reason}")]
    Corrupt { location: String, reason: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Corrupt {
            location: location.into(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
pub trait WishStore: Send + Sync {
    /// Persist `wish` and return it with its final id.
    async fn append(&self, wish: NewWish) -> Result<Wish, StoreError>;

    /// Every stored wish, newest first.
    async fn list_all(&self) -> Result<Vec<Wish>, StoreError>;
}
