//! Sorting user data repository.
//!
//! Stores each member's permanent sorting result. A row's existence is what locks a
//! member out of sorting again.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::{house::House, sorting::SortedUser};

/// Repository providing database operations for sorting results.
pub struct SortingUserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C> SortingUserRepository<'a, C>
where
    C: ConnectionTrait,
{
    /// Creates a new SortingUserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the sorting result of a member.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(Some(SortedUser))` - The member has been sorted
    /// - `Ok(None)` - The member has not been sorted yet
    /// - `Err(DbErr)` - Database error or corrupt row
    pub async fn find_by_user_id(&self, user_id: u64) -> Result<Option<SortedUser>, DbErr> {
        entity::prelude::SortingUser::find_by_id(user_id.to_string())
            .one(self.db)
            .await?
            .map(SortedUser::from_entity)
            .transpose()
    }

    /// Records a member's sorting result.
    ///
    /// Fails with a unique constraint violation if the member already has a result,
    /// so a result can never be overwritten.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `house` - The house drawn for the member
    ///
    /// # Returns
    /// - `Ok(SortedUser)` - The recorded result
    /// - `Err(DbErr)` - Database error, including an existing result for the member
    pub async fn create(&self, user_id: u64, house: House) -> Result<SortedUser, DbErr> {
        let entity = entity::sorting_user::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            house: ActiveValue::Set(house.as_str().to_string()),
            sorted_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        SortedUser::from_entity(entity)
    }
}
