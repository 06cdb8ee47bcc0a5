//! Domain models for AFK status.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::parse_stored_id;

#[derive(Debug, Clone, PartialEq)]
pub struct AfkStatus {
    pub user_id: u64,
    pub reason: String,
    pub since: DateTime<Utc>,
}

impl AfkStatus {
    pub fn from_entity(entity: entity::afk_user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            user_id: parse_stored_id(&entity.user_id)?,
            reason: entity.reason,
            since: entity.since,
        })
    }
}
