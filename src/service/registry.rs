//! Member registry listing over all ID cards.

use sea_orm::DatabaseConnection;

use crate::{
    data::id_card::IdCardRepository,
    error::AppError,
    model::registry::{RegistryEntry, RegistryPage, REGISTRY_PAGE_SIZE},
};

/// Number of pages for `total` entries. An empty registry still has one (empty) page.
pub fn total_pages(total: usize) -> usize {
    total.div_ceil(REGISTRY_PAGE_SIZE).max(1)
}

pub struct RegistryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a registry page, newest card first.
    ///
    /// Out-of-range page indexes are clamped to the last page, so stale navigation
    /// buttons always land on a valid page.
    ///
    /// # Arguments
    /// - `index` - Requested zero-based page index
    ///
    /// # Returns
    /// - `Ok(RegistryPage)` - The (clamped) page
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn page(&self, index: usize) -> Result<RegistryPage, AppError> {
        let repo = IdCardRepository::new(self.db);
        let per_page = REGISTRY_PAGE_SIZE as u64;

        let (mut cards, total) = repo.get_page_newest_first(index as u64, per_page).await?;
        let total_entries = total as usize;
        let total_pages = total_pages(total_entries);
        let clamped = index.min(total_pages - 1);

        if clamped != index {
            cards = repo.get_page_newest_first(clamped as u64, per_page).await?.0;
        }

        Ok(RegistryPage {
            index: clamped,
            total_pages,
            total_entries,
            entries: cards
                .into_iter()
                .map(|card| RegistryEntry {
                    user_id: card.user_id,
                    name: card.name,
                    created_at: card.created_at,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use test_utils::{builder::TestBuilder, factory};

    #[test]
    fn counts_pages() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
    }

    /// Expected: one empty page for an empty registry
    #[tokio::test]
    async fn empty_registry_has_one_page() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::IdCard)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let page = RegistryService::new(db).page(3).await?;

        assert_eq!(page.index, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.entries.is_empty());
        assert!(!page.has_prev() && !page.has_next());

        Ok(())
    }

    /// Expected: requesting past the end returns the last page
    #[tokio::test]
    async fn clamps_to_last_page() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::IdCard)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let now = Utc::now();
        for minutes in 0..12 {
            factory::id_card::IdCardFactory::new(db)
                .name(format!("m{}", minutes))
                .created_at(now - Duration::minutes(minutes))
                .build()
                .await?;
        }

        let service = RegistryService::new(db);
        let first = service.page(0).await?;
        let last = service.page(99).await?;

        assert_eq!(first.total_entries, 12);
        assert_eq!(first.entries[0].name, "m0");
        assert!(first.has_next());
        assert_eq!(last.index, 1);
        assert_eq!(last.entries.len(), 2);
        assert_eq!(last.first_position(), 11);
        assert!(last.has_prev() && !last.has_next());

        Ok(())
    }
}
