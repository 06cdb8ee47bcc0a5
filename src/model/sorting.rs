//! Domain models for sorting participants.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::house::{House, UnknownHouse},
    util::parse::parse_stored_id,
};

/// A member's permanent sorting result.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedUser {
    /// Discord user ID.
    pub user_id: u64,
    pub house: House,
    /// When the member was sorted; the result is locked from then on.
    pub sorted_at: DateTime<Utc>,
}

impl SortedUser {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(SortedUser)` - The converted domain model
    /// - `Err(DbErr::Type)` - Stored user ID is not numeric or the house tag is unknown
    pub fn from_entity(entity: entity::sorting_user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            user_id: parse_stored_id(&entity.user_id)?,
            house: entity
                .house
                .parse()
                .map_err(|e: UnknownHouse| DbErr::Type(e.to_string()))?,
            sorted_at: entity.sorted_at,
        })
    }
}

/// Result of a member pressing the sorting button.
#[derive(Debug, Clone, PartialEq)]
pub enum RollOutcome {
    /// The member was sorted just now.
    Sorted(SortedUser),
    /// The member was sorted before; the stored result is returned unchanged.
    AlreadySorted(SortedUser),
    /// Sorting requires an ID card and the member has none.
    MissingIdCard,
}
