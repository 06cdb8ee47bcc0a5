//! Domain models for the member registry listing.

use chrono::{DateTime, Utc};

/// Members listed per registry page.
pub const REGISTRY_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub user_id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One page of the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryPage {
    /// Zero-based page index, always within `0..total_pages`.
    pub index: usize,
    pub total_pages: usize,
    pub total_entries: usize,
    pub entries: Vec<RegistryEntry>,
}

impl RegistryPage {
    /// 1-based position of the first entry on this page.
    pub fn first_position(&self) -> usize {
        self.index * REGISTRY_PAGE_SIZE + 1
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total_pages
    }
}
