use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::{StoreError, WishStore};
use crate::models::wish::{self, Column as WishCol, Entity as WishEntity};
use crate::types::{NewWish, Wish, WishStatus, ANONYMOUS};

pub struct SqlWishStore {
    db: DatabaseConnection,
}

impl SqlWishStore {
    /// The schema must already be in place (see [`crate::ensure_schema`]).
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

fn row_to_wish(row: wish::Model) -> Result<Wish, StoreError> {
    let status = match row.status.as_deref() {
        None => WishStatus::default(),
        Some(s) => s
            .parse::<WishStatus>()
            .map_err(|reason| StoreError::corrupt(format!("wishes#{}", row.id), reason))?,
    };
    Ok(Wish {
        id: i64::from(row.id),
        content: row.content,
        anonymous_id: row.anonymous_id.unwrap_or_else(|| ANONYMOUS.to_string()),
        created_at: row.created_at.unwrap_or_default(),
        status,
    })
}

#[async_trait]
impl WishStore for SqlWishStore {
    async fn append(&self, new: NewWish) -> Result<Wish, StoreError> {
        let created = wish::ActiveModel {
            id: NotSet,
            content: Set(new.content),
            anonymous_id: Set(Some(new.anonymous_id)),
            created_at: Set(Some(new.created_at)),
            status: Set(Some(new.status.as_str().to_string())),
        }
        .insert(&self.db)
        .await?;

        row_to_wish(created)
    }

    async fn list_all(&self) -> Result<Vec<Wish>, StoreError> {
        WishEntity::find()
            .order_by_desc(WishCol::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(row_to_wish)
            .collect()
    }
}
