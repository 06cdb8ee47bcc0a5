//! Domain models for anonymous confessions.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::parse_stored_id;

/// A confession post. The ID is the public menfess number shown in embeds.
#[derive(Debug, Clone, PartialEq)]
pub struct MenfessPost {
    pub id: i32,
    /// Discord message ID, `None` while the post has not been sent yet.
    pub message_id: Option<u64>,
    pub channel_id: u64,
    pub created_at: DateTime<Utc>,
}

impl MenfessPost {
    pub fn from_entity(entity: entity::menfess_post::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            message_id: entity.message_id.parse().ok().filter(|id| *id != 0),
            channel_id: parse_stored_id(&entity.channel_id)?,
            created_at: entity.created_at,
        })
    }
}

/// Validated menfess submission.
#[derive(Debug, Clone, PartialEq)]
pub struct MenfessSubmission {
    /// Short recipient hint ("untuk").
    pub to: String,
    /// Name shown as sender: the alias if given, otherwise the stable anonymous label.
    pub sender_label: String,
    pub content: String,
}
