//! Domain models for member identity cards.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::parse_stored_id;

/// Visual theme of an identity card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTheme {
    Light,
    Dark,
}

impl CardTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardTheme::Light => "light",
            CardTheme::Dark => "dark",
        }
    }

    /// Parses a theme tag; anything other than `dark` (case-insensitive) is `Light`.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("dark") {
            CardTheme::Dark
        } else {
            CardTheme::Light
        }
    }

    /// Embed colour for the theme.
    pub fn color(&self) -> u32 {
        match self {
            CardTheme::Light => 0x77d0d7,
            CardTheme::Dark => 0x2b2d42,
        }
    }
}

/// A member's identity card.
#[derive(Debug, Clone, PartialEq)]
pub struct IdCard {
    pub user_id: u64,
    /// 16-digit card number, assigned once on first creation.
    pub number: String,
    pub name: String,
    pub gender: String,
    pub domicile: String,
    pub hobby: String,
    pub status: String,
    pub theme: CardTheme,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IdCard {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(IdCard)` - The converted domain model
    /// - `Err(DbErr::Type)` - Stored user ID is not numeric
    pub fn from_entity(entity: entity::id_card::Model) -> Result<Self, DbErr> {
        Ok(Self {
            user_id: parse_stored_id(&entity.user_id)?,
            number: entity.number,
            name: entity.name,
            gender: entity.gender,
            domicile: entity.domicile,
            hobby: entity.hobby,
            status: entity.status,
            theme: CardTheme::from_tag(&entity.theme),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Raw values submitted through the ID card modal, before sanitising.
#[derive(Debug, Clone, Default)]
pub struct IdCardSubmission {
    pub name: String,
    pub gender: String,
    pub domicile: String,
    pub hobby: String,
    /// Status with an optional theme suffix, e.g. `single | dark`.
    pub status_theme: String,
}

/// Sanitised card fields ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertIdCardParam {
    pub user_id: u64,
    pub name: String,
    pub gender: String,
    pub domicile: String,
    pub hobby: String,
    pub status: String,
    pub theme: CardTheme,
    /// Number to assign if the card does not exist yet; ignored on update.
    pub new_number: String,
}
