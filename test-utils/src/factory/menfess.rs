//! Menfess factories for posts and anonymous labels.

use crate::factory::helpers::next_snowflake;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a sent menfess post in the given channel.
///
/// # Arguments
/// - `db` - Database connection
/// - `channel_id` - Discord channel ID the post lives in
///
/// # Returns
/// - `Ok(entity::menfess_post::Model)` - Created post with a unique message ID
/// - `Err(DbErr)` - Database error during insert
pub async fn create_post(
    db: &DatabaseConnection,
    channel_id: &str,
) -> Result<entity::menfess_post::Model, DbErr> {
    entity::menfess_post::ActiveModel {
        id: ActiveValue::NotSet,
        message_id: ActiveValue::Set(next_snowflake()),
        channel_id: ActiveValue::Set(channel_id.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates an anonymous label mapping for a user.
pub async fn create_anon(
    db: &DatabaseConnection,
    user_id: &str,
    anon_label: &str,
) -> Result<entity::menfess_anon::Model, DbErr> {
    entity::menfess_anon::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        anon_label: ActiveValue::Set(anon_label.to_string()),
    }
    .insert(db)
    .await
}
