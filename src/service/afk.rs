//! AFK status service.

use sea_orm::DatabaseConnection;

use crate::{data::afk::AfkRepository, error::AppError, model::afk::AfkStatus, util::text::safe_text};

/// Characters kept from an AFK reason.
pub const REASON_MAX: usize = 80;
/// Reason used when none is given.
pub const DEFAULT_REASON: &str = "AFK";
/// AFK users listed in one mention notice.
pub const MAX_NOTICES: usize = 5;

/// Sanitises an AFK reason, falling back to `AFK` when empty.
pub fn normalize_reason(reason: Option<&str>) -> String {
    let reason = safe_text(reason.unwrap_or(DEFAULT_REASON), REASON_MAX);
    if reason.is_empty() {
        DEFAULT_REASON.to_string()
    } else {
        reason
    }
}

pub struct AfkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AfkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a member AFK, replacing any previous reason.
    pub async fn set(&self, user_id: u64, reason: Option<&str>) -> Result<AfkStatus, AppError> {
        Ok(AfkRepository::new(self.db)
            .set(user_id, normalize_reason(reason))
            .await?)
    }

    /// Clears a member's AFK status.
    ///
    /// # Returns
    /// - `Ok(true)` - The member was AFK and is now back
    /// - `Ok(false)` - The member was not AFK
    pub async fn clear(&self, user_id: u64) -> Result<bool, AppError> {
        Ok(AfkRepository::new(self.db).clear(user_id).await?)
    }

    /// Statuses of the mentioned users that are AFK, in mention order.
    ///
    /// Duplicated mentions are listed once and at most `MAX_NOTICES` statuses are
    /// returned. Callers filter out bots before calling.
    pub async fn notices(&self, mentioned: &[u64]) -> Result<Vec<AfkStatus>, AppError> {
        let mut ids: Vec<u64> = Vec::with_capacity(mentioned.len());
        for id in mentioned {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }

        let statuses = AfkRepository::new(self.db).get_many(&ids).await?;

        Ok(ids
            .iter()
            .filter_map(|id| statuses.iter().find(|s| s.user_id == *id).cloned())
            .take(MAX_NOTICES)
            .collect())
    }
}
