//! AFK user factory.

use crate::factory::helpers::next_snowflake;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating AFK status rows.
pub struct AfkUserFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    reason: String,
    since: DateTime<Utc>,
}

impl<'a> AfkUserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_snowflake(),
            reason: "AFK".to_string(),
            since: Utc::now(),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub async fn build(self) -> Result<entity::afk_user::Model, DbErr> {
        entity::afk_user::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            reason: ActiveValue::Set(self.reason),
            since: ActiveValue::Set(self.since),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an AFK row with default values.
pub async fn create_afk_user(db: &DatabaseConnection) -> Result<entity::afk_user::Model, DbErr> {
    AfkUserFactory::new(db).build().await
}
