//! AFK status data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::afk::AfkStatus;

/// Repository providing database operations for AFK statuses.
pub struct AfkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AfkRepository<'a> {
    /// Creates a new AfkRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets or replaces a member's AFK status, starting now.
    ///
    /// # Returns
    /// - `Ok(AfkStatus)` - The stored status
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn set(&self, user_id: u64, reason: String) -> Result<AfkStatus, DbErr> {
        let entity = entity::prelude::AfkUser::insert(entity::afk_user::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            reason: ActiveValue::Set(reason),
            since: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::afk_user::Column::UserId)
                .update_columns([
                    entity::afk_user::Column::Reason,
                    entity::afk_user::Column::Since,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        AfkStatus::from_entity(entity)
    }

    /// Gets the AFK statuses of the given members, in no particular order.
    ///
    /// Members without a status are skipped.
    pub async fn get_many(&self, user_ids: &[u64]) -> Result<Vec<AfkStatus>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = user_ids.iter().map(|id| id.to_string()).collect();

        entity::prelude::AfkUser::find()
            .filter(entity::afk_user::Column::UserId.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(AfkStatus::from_entity)
            .collect()
    }

    /// Clears a member's AFK status.
    ///
    /// # Returns
    /// - `Ok(true)` - A status existed and was removed
    /// - `Ok(false)` - The member was not AFK
    /// - `Err(DbErr)` - Database error during delete
    pub async fn clear(&self, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::AfkUser::delete_by_id(user_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
