//! Anonymous confession ("menfess") service.
//!
//! This module provides `MenfessCooldown`, an in-memory per-user submission cooldown,
//! and `MenfessService`, which validates submissions, assigns stable anonymous labels
//! and keeps track of the posts made so that anonymous replies can reference them.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use sea_orm::{DatabaseConnection, TransactionTrait};
use tokio::sync::RwLock;

use crate::{
    data::menfess::MenfessRepository,
    error::AppError,
    model::menfess::{MenfessPost, MenfessSubmission},
    util::text::{is_bad_alias, safe_text},
};

/// Characters of the recipient hint and sender label shown in the embed.
pub const LABEL_MAX: usize = 24;

/// Per-user cooldown between menfess submissions.
///
/// Lives for the whole process and is lost on restart.
#[derive(Clone)]
pub struct MenfessCooldown {
    last_sent: Arc<RwLock<HashMap<u64, Instant>>>,
    cooldown: Duration,
}

impl MenfessCooldown {
    /// Creates a cooldown tracker.
    ///
    /// # Arguments
    /// - `cooldown_sec` - Seconds a user must wait between submissions
    pub fn new(cooldown_sec: u64) -> Self {
        Self {
            last_sent: Arc::new(RwLock::new(HashMap::new())),
            cooldown: Duration::from_secs(cooldown_sec),
        }
    }

    fn remaining_at(&self, last: Option<&Instant>, now: Instant) -> Option<u64> {
        let elapsed = now.saturating_duration_since(*last?);
        let left = self.cooldown.checked_sub(elapsed)?;
        if left.is_zero() {
            return None;
        }

        // Round partial seconds up so "0s" is never shown while still cooling down.
        Some(left.as_millis().div_ceil(1000) as u64)
    }

    /// Seconds the user still has to wait, `None` if they may submit now.
    pub async fn remaining(&self, user_id: u64) -> Option<u64> {
        let last_sent = self.last_sent.read().await;
        self.remaining_at(last_sent.get(&user_id), Instant::now())
    }

    /// Records a submission if the user is not cooling down.
    ///
    /// Check and record happen under one lock, so two submissions racing each other
    /// cannot both pass.
    ///
    /// # Returns
    /// - `Ok(())` - Submission recorded
    /// - `Err(u64)` - Seconds still to wait
    pub async fn try_acquire(&self, user_id: u64) -> Result<(), u64> {
        let mut last_sent = self.last_sent.write().await;
        let now = Instant::now();

        if let Some(wait) = self.remaining_at(last_sent.get(&user_id), now) {
            return Err(wait);
        }

        last_sent.insert(user_id, now);
        Ok(())
    }
}

/// Formats the anonymous label for the `n`-th labelled user (1-based).
pub fn anon_label(n: u64) -> String {
    format!("Anon #{:03}", n)
}

/// Message shown when a user has to wait for the cooldown.
pub fn cooldown_message(wait_sec: u64) -> String {
    format!("⏳ tunggu {}s dulu ya.", wait_sec)
}

/// Validated but not yet labelled submission fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MenfessDraft {
    pub to: String,
    pub alias: Option<String>,
    pub content: String,
}

/// Validates raw modal values.
///
/// # Returns
/// - `Ok(MenfessDraft)` - Trimmed values, alias `None` when left empty
/// - `Err(AppError::BadRequest)` - Empty recipient or content, or a rejected alias
pub fn validate_submission(to: &str, alias: &str, content: &str) -> Result<MenfessDraft, AppError> {
    let to = to.trim();
    let alias = alias.trim();
    let content = content.trim();

    if to.is_empty() || content.is_empty() {
        return Err(AppError::BadRequest("Form kosong 😭".to_string()));
    }
    if !alias.is_empty() && is_bad_alias(alias) {
        return Err(AppError::BadRequest(
            "Nama tidak boleh mengandung mention / nyamar staff ya.".to_string(),
        ));
    }

    Ok(MenfessDraft {
        to: safe_text(to, LABEL_MAX),
        alias: (!alias.is_empty()).then(|| alias.to_string()),
        content: content.to_string(),
    })
}

pub struct MenfessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenfessService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's anonymous label, assigning the next free one on first use.
    ///
    /// # Returns
    /// - `Ok(String)` - Label such as `Anon #007`
    /// - `Err(AppError::DbErr)` - Database error while reading or assigning the label
    pub async fn anon_label(&self, user_id: u64) -> Result<String, AppError> {
        let txn = self.db.begin().await?;
        let repo = MenfessRepository::new(&txn);

        if let Some(label) = repo.find_anon_label(user_id).await? {
            return Ok(label);
        }

        let label = anon_label(repo.count_anon_labels().await? + 1);
        repo.create_anon_label(user_id, label.clone()).await?;
        txn.commit().await?;

        tracing::debug!("Assigned {} to user {}", label, user_id);

        Ok(label)
    }

    /// Reserves a menfess number and resolves the sender label for a submission.
    ///
    /// The alias is used as sender label when given, otherwise the user's anonymous
    /// label. The user is assigned an anonymous label either way, matching how labels
    /// are numbered by first submission.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID of the sender
    /// - `channel_id` - Channel the post will be sent to
    /// - `draft` - Validated submission
    ///
    /// # Returns
    /// - `Ok((MenfessPost, MenfessSubmission))` - Reserved post and the content to publish
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn prepare_post(
        &self,
        user_id: u64,
        channel_id: u64,
        draft: MenfessDraft,
    ) -> Result<(MenfessPost, MenfessSubmission), AppError> {
        let anon = self.anon_label(user_id).await?;
        let post = MenfessRepository::new(self.db).create_post(channel_id).await?;

        let sender_label = safe_text(draft.alias.as_deref().unwrap_or(&anon), LABEL_MAX);

        Ok((
            post,
            MenfessSubmission {
                to: draft.to,
                sender_label,
                content: draft.content,
            },
        ))
    }

    /// Records the Discord message a post was published as.
    pub async fn mark_sent(&self, id: i32, message_id: u64) -> Result<(), AppError> {
        MenfessRepository::new(self.db)
            .set_message_id(id, message_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Menfess #{} tidak ditemukan.", id)))?;

        Ok(())
    }

    /// Resolves the post an anonymous reply refers to.
    ///
    /// # Returns
    /// - `Ok((MenfessPost, u64))` - The post and its Discord message ID
    /// - `Err(AppError::BadRequest)` - Empty reply text
    /// - `Err(AppError::NotFound)` - Unknown post, or a post that was never sent
    pub async fn reply_target(&self, id: i32, reply: &str) -> Result<(MenfessPost, u64), AppError> {
        if reply.trim().is_empty() {
            return Err(AppError::BadRequest("Balasan kosong 😭".to_string()));
        }

        let not_found =
            || AppError::NotFound("Menfess asal tidak ditemukan (mungkin sudah kehapus).".to_string());

        let post = MenfessRepository::new(self.db)
            .get_post(id)
            .await?
            .ok_or_else(not_found)?;
        let message_id = post.message_id.ok_or_else(not_found)?;

        Ok((post, message_id))
    }
}
