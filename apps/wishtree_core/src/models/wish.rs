use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wishes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    // camelCase column names are what the table has always used
    #[sea_orm(column_name = "anonymousId", column_type = "Text", nullable)]
    pub anonymous_id: Option<String>,

    /// ISO-8601 text, not a native timestamp.
    #[sea_orm(column_name = "createdAt", column_type = "Text", nullable)]
    pub created_at: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
