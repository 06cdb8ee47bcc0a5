use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menfess_post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord message ID, empty until the post has been sent.
    pub message_id: String,
    pub channel_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
