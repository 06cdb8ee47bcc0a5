//! Sorting service.
//!
//! Assigns each member a permanent house on their first roll. The draw from the fair
//! allocator and the recorded result are committed in one database transaction, and
//! rolls are serialized through a process-wide lock so concurrent button presses can
//! never read the same bag slot.

pub mod allocator;

#[cfg(test)]
mod test;

use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tokio::sync::Mutex;

use crate::{
    data::{id_card::IdCardRepository, kv::KvRepository, sorting_user::SortingUserRepository},
    error::AppError,
    model::sorting::{RollOutcome, SortedUser},
    service::sorting::allocator::{normalize_bag_size, FairAllocator},
};

/// Lock shared by every roll in the process.
///
/// Created once at startup and handed to each `SortingService`.
#[derive(Clone, Default)]
pub struct SortingLock(Arc<Mutex<()>>);

impl SortingLock {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct SortingService<'a> {
    db: &'a DatabaseConnection,
    lock: &'a SortingLock,
    bag_size: usize,
}

impl<'a> SortingService<'a> {
    /// Creates a new SortingService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `lock` - Process-wide sorting lock
    /// - `bag_size` - Configured allocator bag size
    pub fn new(db: &'a DatabaseConnection, lock: &'a SortingLock, bag_size: usize) -> Self {
        Self { db, lock, bag_size }
    }

    /// Rolls a house for a member.
    ///
    /// A member that is already sorted gets their stored result back without touching the
    /// allocator. A member without an ID card is refused. Otherwise a house is drawn and
    /// recorded atomically: if recording fails, the allocator state is rolled back too.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID of the member pressing the sorting button
    ///
    /// # Returns
    /// - `Ok(RollOutcome)` - Sorted now, already sorted, or missing an ID card
    /// - `Err(AppError::SortingErr)` - Invalid bag size or allocator storage failure
    /// - `Err(AppError::DbErr)` - Database error while checking or recording the result
    pub async fn roll(&self, user_id: u64) -> Result<RollOutcome, AppError> {
        let bag_size = normalize_bag_size(self.bag_size)?;
        let _guard = self.lock.0.lock().await;

        if let Some(existing) = SortingUserRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
        {
            return Ok(RollOutcome::AlreadySorted(existing));
        }

        if IdCardRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .is_none()
        {
            return Ok(RollOutcome::MissingIdCard);
        }

        let txn = self.db.begin().await?;

        let allocator = FairAllocator::new(KvRepository::new(&txn), bag_size)?;
        let house = allocator.draw().await?;
        let sorted = SortingUserRepository::new(&txn)
            .create(user_id, house)
            .await?;

        txn.commit().await?;

        tracing::info!("Sorted user {} into {}", user_id, sorted.house);

        Ok(RollOutcome::Sorted(sorted))
    }

    /// Gets a member's sorting result.
    ///
    /// # Returns
    /// - `Ok(Some(SortedUser))` - The member has been sorted
    /// - `Ok(None)` - The member has not been sorted yet
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, user_id: u64) -> Result<Option<SortedUser>, AppError> {
        Ok(SortingUserRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?)
    }
}
