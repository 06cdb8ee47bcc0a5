//! Domain models for self-assignable roles.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Options Discord accepts in one select menu, and so per catalog category.
pub const MAX_CATEGORY_OPTIONS: usize = 25;

/// One selectable role in a self-role menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelfRoleOption {
    pub label: String,
    /// Discord role ID, stored as a string in the catalog file.
    pub value: String,
}

impl SelfRoleOption {
    pub fn role_id(&self) -> Option<u64> {
        self.value.parse().ok().filter(|id| *id != 0)
    }
}

/// Self-role categories keyed by the name used in the `selfroles:<category>` custom ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SelfRoleCatalog {
    pub categories: BTreeMap<String, Vec<SelfRoleOption>>,
}

/// Roles to change on a member after a self-role selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleDiff {
    pub add: Vec<u64>,
    pub remove: Vec<u64>,
}

impl RoleDiff {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}
