//! Menfess data repository.
//!
//! Stores confession posts, whose auto-increment ID is the public menfess number, and the
//! stable per-user anonymous labels.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
};

use crate::model::menfess::MenfessPost;

/// Repository providing database operations for menfess posts and anonymous labels.
pub struct MenfessRepository<'a, C> {
    db: &'a C,
}

impl<'a, C> MenfessRepository<'a, C>
where
    C: ConnectionTrait,
{
    /// Creates a new MenfessRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reserves the next menfess number for a post in `channel_id`.
    ///
    /// The message ID is left empty until the post is sent, see `set_message_id`.
    ///
    /// # Returns
    /// - `Ok(MenfessPost)` - Reserved post with its menfess number
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_post(&self, channel_id: u64) -> Result<MenfessPost, DbErr> {
        let entity = entity::menfess_post::ActiveModel {
            id: ActiveValue::NotSet,
            message_id: ActiveValue::Set(String::new()),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        MenfessPost::from_entity(entity)
    }

    /// Records the Discord message that carries a sent post.
    ///
    /// # Returns
    /// - `Ok(Some(MenfessPost))` - Updated post
    /// - `Ok(None)` - No post with this number
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_message_id(
        &self,
        id: i32,
        message_id: u64,
    ) -> Result<Option<MenfessPost>, DbErr> {
        let Some(existing) = entity::prelude::MenfessPost::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::menfess_post::ActiveModel = existing.into();
        active.message_id = ActiveValue::Set(message_id.to_string());
        let entity = active.update(self.db).await?;

        MenfessPost::from_entity(entity).map(Some)
    }

    /// Gets a post by menfess number.
    pub async fn get_post(&self, id: i32) -> Result<Option<MenfessPost>, DbErr> {
        entity::prelude::MenfessPost::find_by_id(id)
            .one(self.db)
            .await?
            .map(MenfessPost::from_entity)
            .transpose()
    }

    /// Gets the anonymous label assigned to a user, if any.
    pub async fn find_anon_label(&self, user_id: u64) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::MenfessAnon::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|anon| anon.anon_label))
    }

    /// Counts users that have been assigned an anonymous label.
    pub async fn count_anon_labels(&self) -> Result<u64, DbErr> {
        entity::prelude::MenfessAnon::find().count(self.db).await
    }

    /// Assigns an anonymous label to a user.
    ///
    /// Fails on a unique constraint violation if the user or the label is taken.
    pub async fn create_anon_label(&self, user_id: u64, anon_label: String) -> Result<(), DbErr> {
        entity::menfess_anon::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            anon_label: ActiveValue::Set(anon_label),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
