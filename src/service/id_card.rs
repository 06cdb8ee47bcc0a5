//! ID card service.
//!
//! Turns raw modal submissions into sanitised cards and stores them. A card's number is
//! generated once, on first submission, and never changes afterwards.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::id_card::IdCardRepository,
    error::AppError,
    model::id_card::{CardTheme, IdCard, IdCardSubmission, UpsertIdCardParam},
    util::text::safe_text,
};

const NAME_MAX: usize = 18;
const GENDER_MAX: usize = 8;
const DOMICILE_MAX: usize = 18;
const HOBBY_MAX: usize = 18;
const STATUS_MAX: usize = 18;

/// Digits in a card number.
pub const CARD_NUMBER_LEN: usize = 16;

/// Placeholder for fields left empty after sanitising.
const EMPTY_FIELD: &str = "—";

/// Builds a card number from the user ID and a millisecond timestamp.
///
/// The two are concatenated, the last 16 digits kept and the result left-padded with
/// zeros, so short inputs still give a 16-digit number.
pub fn generate_card_number(user_id: u64, now_ms: i64) -> String {
    let raw: String = format!("{}{}", user_id, now_ms)
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let tail = &raw[raw.len().saturating_sub(CARD_NUMBER_LEN)..];

    format!("{:0>width$}", tail, width = CARD_NUMBER_LEN)
}

/// Splits the combined `status | theme` field.
///
/// The first non-empty part is the status, the second selects the theme. A missing
/// or unknown theme is `Light`.
pub fn split_status_theme(raw: &str) -> (String, CardTheme) {
    let mut parts = raw.split('|').map(str::trim).filter(|p| !p.is_empty());

    let status = safe_text(parts.next().unwrap_or(EMPTY_FIELD), STATUS_MAX);
    let theme = parts.next().map(CardTheme::from_tag).unwrap_or(CardTheme::Light);

    (status, theme)
}

fn or_placeholder(value: String) -> String {
    if value.is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        value
    }
}

/// Sanitises a modal submission into storable card fields.
///
/// # Arguments
/// - `user_id` - Discord user ID of the submitting member
/// - `fallback_name` - Name used when the submitted name is empty, usually the username
/// - `submission` - Raw modal values
/// - `now_ms` - Current time in milliseconds, used for a new card number
pub fn sanitize_submission(
    user_id: u64,
    fallback_name: &str,
    submission: &IdCardSubmission,
    now_ms: i64,
) -> UpsertIdCardParam {
    let (status, theme) = split_status_theme(&submission.status_theme);

    let mut name = safe_text(&submission.name, NAME_MAX);
    if name.is_empty() {
        name = safe_text(fallback_name, NAME_MAX);
    }

    UpsertIdCardParam {
        user_id,
        name: or_placeholder(name),
        gender: or_placeholder(safe_text(&submission.gender, GENDER_MAX)),
        domicile: or_placeholder(safe_text(&submission.domicile, DOMICILE_MAX)),
        hobby: or_placeholder(safe_text(&submission.hobby, HOBBY_MAX)),
        status,
        theme,
        new_number: generate_card_number(user_id, now_ms),
    }
}

pub struct IdCardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IdCardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a member's card from a modal submission.
    ///
    /// # Returns
    /// - `Ok(IdCard)` - The stored card, keeping its original number on update
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn submit(
        &self,
        user_id: u64,
        fallback_name: &str,
        submission: &IdCardSubmission,
    ) -> Result<IdCard, AppError> {
        let param = sanitize_submission(
            user_id,
            fallback_name,
            submission,
            Utc::now().timestamp_millis(),
        );

        let card = IdCardRepository::new(self.db).upsert(param).await?;

        tracing::info!("Stored ID card {} for user {}", card.number, user_id);

        Ok(card)
    }

    /// Gets a member's card, if any.
    pub async fn get(&self, user_id: u64) -> Result<Option<IdCard>, AppError> {
        Ok(IdCardRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?)
    }
}
