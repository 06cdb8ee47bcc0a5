//! Sorting user factory for creating recorded house assignments.

use crate::factory::helpers::next_snowflake;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating sorted participants.
pub struct SortingUserFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    house: String,
}

impl<'a> SortingUserFactory<'a> {
    /// Creates a new SortingUserFactory; defaults to a unique user in the `light` house.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_snowflake(),
            house: "light".to_string(),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the stored house tag (`"light"` or `"dark"`).
    pub fn house(mut self, house: impl Into<String>) -> Self {
        self.house = house.into();
        self
    }

    pub async fn build(self) -> Result<entity::sorting_user::Model, DbErr> {
        entity::sorting_user::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            house: ActiveValue::Set(self.house),
            sorted_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sorted participant with default values.
pub async fn create_sorting_user(
    db: &DatabaseConnection,
) -> Result<entity::sorting_user::Model, DbErr> {
    SortingUserFactory::new(db).build().await
}
