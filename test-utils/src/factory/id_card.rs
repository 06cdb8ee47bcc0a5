//! ID card factory for creating test identity card rows.

use crate::factory::helpers::{next_id, next_snowflake};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ID cards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let card = IdCardFactory::new(&db)
///     .user_id("123456789")
///     .name("Valerie")
///     .theme("dark")
///     .build()
///     .await?;
/// ```
pub struct IdCardFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    number: String,
    name: String,
    theme: String,
    created_at: DateTime<Utc>,
}

impl<'a> IdCardFactory<'a> {
    /// Creates a new IdCardFactory with default values.
    ///
    /// Defaults:
    /// - user_id: unique snowflake string
    /// - number: 16-digit zero padded counter
    /// - name: `"Member {id}"`
    /// - theme: `"light"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: next_snowflake(),
            number: format!("{:016}", id),
            name: format!("Member {}", id),
            theme: "light".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Sets the creation timestamp, used to control registry ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the ID card into the database.
    ///
    /// # Returns
    /// - `Ok(entity::id_card::Model)` - Created ID card
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::id_card::Model, DbErr> {
        entity::id_card::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            number: ActiveValue::Set(self.number),
            name: ActiveValue::Set(self.name),
            gender: ActiveValue::Set("-".to_string()),
            domicile: ActiveValue::Set("Jakarta".to_string()),
            hobby: ActiveValue::Set("Reading".to_string()),
            status: ActiveValue::Set("single".to_string()),
            theme: ActiveValue::Set(self.theme),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an ID card with default values.
///
/// Shorthand for `IdCardFactory::new(db).build().await`.
pub async fn create_id_card(db: &DatabaseConnection) -> Result<entity::id_card::Model, DbErr> {
    IdCardFactory::new(db).build().await
}
