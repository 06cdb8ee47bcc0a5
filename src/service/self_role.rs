//! Self-assignable role catalog and selection diffing.
//!
//! The catalog is a JSON object mapping category names to lists of `{label, value}`
//! options. A category may also be an object of sub-categories, which are flattened to
//! `<category>_<sub>` names:
//!
//! ```json
//! {
//!   "age": [{ "label": "Gen Z", "value": "1460185561678614601" }],
//!   "interest": { "gaming": [{ "label": "Roblox", "value": "1459530313309884567" }] }
//! }
//! ```

use std::{collections::BTreeMap, path::Path, sync::Arc};

use serde::Deserialize;

use crate::{
    error::config::ConfigError,
    model::self_role::{RoleDiff, SelfRoleCatalog, SelfRoleOption, MAX_CATEGORY_OPTIONS},
};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Flat(Vec<SelfRoleOption>),
    Nested(BTreeMap<String, Vec<SelfRoleOption>>),
}

/// Parses a catalog document, flattening nested categories.
pub fn parse_catalog(json: &str) -> Result<SelfRoleCatalog, serde_json::Error> {
    let raw: BTreeMap<String, RawCategory> = serde_json::from_str(json)?;

    let mut categories = BTreeMap::new();
    for (name, category) in raw {
        match category {
            RawCategory::Flat(options) => {
                categories.insert(name, options);
            }
            RawCategory::Nested(subs) => {
                for (sub, options) in subs {
                    categories.insert(format!("{}_{}", name, sub), options);
                }
            }
        }
    }

    Ok(SelfRoleCatalog { categories })
}

/// Checks that every category can be shown as one select menu.
///
/// # Returns
/// - `Ok(())` - Every category has 1 to `MAX_CATEGORY_OPTIONS` options with numeric role IDs
/// - `Err(String)` - Reason the first offending category was rejected
pub fn validate_catalog(catalog: &SelfRoleCatalog) -> Result<(), String> {
    for (name, options) in &catalog.categories {
        if options.is_empty() {
            return Err(format!("category '{}' has no options", name));
        }
        if options.len() > MAX_CATEGORY_OPTIONS {
            return Err(format!(
                "category '{}' has {} options, at most {} fit in a select menu",
                name,
                options.len(),
                MAX_CATEGORY_OPTIONS
            ));
        }
        if let Some(option) = options.iter().find(|o| o.role_id().is_none()) {
            return Err(format!(
                "option '{}' in '{}' has a non-numeric role id",
                option.label, name
            ));
        }
    }

    Ok(())
}

/// Loads the catalog from `path`.
///
/// # Returns
/// - `Ok(SelfRoleCatalog)` - Parsed catalog
/// - `Err(ConfigError::InvalidSelfRoleCatalog)` - The file is unreadable, not a valid
///   catalog, or has a category that cannot be shown as a select menu
pub fn load_catalog(path: &Path) -> Result<SelfRoleCatalog, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidSelfRoleCatalog {
        path: path.display().to_string(),
        reason,
    };

    let json = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let catalog = parse_catalog(&json).map_err(|e| invalid(e.to_string()))?;
    validate_catalog(&catalog).map_err(invalid)?;

    tracing::info!(
        "Loaded {} self-role categories from {}",
        catalog.categories.len(),
        path.display()
    );

    Ok(catalog)
}

/// Shared, read-only access to the self-role catalog.
#[derive(Clone, Default)]
pub struct SelfRoleService {
    catalog: Arc<SelfRoleCatalog>,
}

impl SelfRoleService {
    pub fn new(catalog: SelfRoleCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &SelfRoleCatalog {
        &self.catalog
    }

    pub fn category(&self, name: &str) -> Option<&[SelfRoleOption]> {
        self.catalog.categories.get(name).map(Vec::as_slice)
    }

    /// Computes the role changes for a selection in one category.
    ///
    /// Only the first `MAX_CATEGORY_OPTIONS` roles of `category` are considered, the
    /// ones its select menu offers: roles the member holds from elsewhere are never
    /// removed and selected values outside those options are ignored.
    ///
    /// # Arguments
    /// - `category` - Category name from the select menu's custom ID
    /// - `current` - Role IDs the member currently has
    /// - `selected` - Role IDs chosen in the select menu
    ///
    /// # Returns
    /// - `Some(RoleDiff)` - Roles to add and remove
    /// - `None` - Unknown category
    pub fn diff(&self, category: &str, current: &[u64], selected: &[u64]) -> Option<RoleDiff> {
        let options = self.category(category)?;
        let role_ids: Vec<u64> = options
            .iter()
            .take(MAX_CATEGORY_OPTIONS)
            .filter_map(SelfRoleOption::role_id)
            .collect();

        let add = role_ids
            .iter()
            .filter(|id| selected.contains(id) && !current.contains(id))
            .copied()
            .collect();
        let remove = role_ids
            .iter()
            .filter(|id| current.contains(id) && !selected.contains(id))
            .copied()
            .collect();

        Some(RoleDiff { add, remove })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "age": [
            { "label": "Gen Alpha", "value": "1" },
            { "label": "Gen Z", "value": "2" }
        ],
        "interest": {
            "gaming": [{ "label": "Roblox", "value": "10" }],
            "music": [{ "label": "Jazz", "value": "20" }]
        }
    }"#;

    fn service() -> SelfRoleService {
        SelfRoleService::new(parse_catalog(CATALOG).unwrap())
    }

    #[test]
    fn flattens_nested_categories() {
        let catalog = parse_catalog(CATALOG).unwrap();
        let names: Vec<&str> = catalog.categories.keys().map(String::as_str).collect();

        assert_eq!(names, vec!["age", "interest_gaming", "interest_music"]);
    }

    #[test]
    fn rejects_malformed_catalog() {
        assert!(parse_catalog(r#"{ "age": "Gen Z" }"#).is_err());
        assert!(parse_catalog("[]").is_err());
    }

    #[test]
    fn diff_adds_and_removes_within_category() {
        let diff = service().diff("age", &[1, 10, 99], &[2]).unwrap();

        assert_eq!(diff.add, vec![2]);
        assert_eq!(diff.remove, vec![1]);
    }

    #[test]
    fn diff_ignores_selection_outside_category() {
        let diff = service().diff("interest_gaming", &[], &[10, 20, 1]).unwrap();

        assert_eq!(diff.add, vec![10]);
        assert!(diff.remove.is_empty());
    }

    #[test]
    fn diff_is_empty_when_unchanged() {
        assert!(service().diff("age", &[1], &[1]).unwrap().is_empty());
        assert!(service().diff("unknown", &[], &[1]).is_none());
    }

    fn category_of(size: usize) -> SelfRoleCatalog {
        let options = (1..=size as u64)
            .map(|i| SelfRoleOption {
                label: format!("Role {}", i),
                value: (1000 + i).to_string(),
            })
            .collect();

        SelfRoleCatalog {
            categories: BTreeMap::from([("big".to_string(), options)]),
        }
    }

    /// Expected: a role past the menu's option limit is neither added nor removed
    #[test]
    fn diff_keeps_roles_the_menu_cannot_show() {
        let service = SelfRoleService::new(category_of(MAX_CATEGORY_OPTIONS + 1));

        let diff = service.diff("big", &[1026], &[1001, 1026]).unwrap();

        assert_eq!(diff.add, vec![1001]);
        assert!(diff.remove.is_empty());
    }

    /// Expected: categories that cannot become a select menu are rejected
    #[test]
    fn validate_rejects_empty_and_oversized_categories() {
        assert!(validate_catalog(&category_of(MAX_CATEGORY_OPTIONS)).is_ok());
        assert!(validate_catalog(&category_of(MAX_CATEGORY_OPTIONS + 1)).is_err());

        let empty = parse_catalog(r#"{ "age": [] }"#).unwrap();
        assert!(validate_catalog(&empty)
            .unwrap_err()
            .contains("has no options"));

        let bad_id = parse_catalog(r#"{ "age": [{ "label": "Gen Z", "value": "gen-z" }] }"#).unwrap();
        assert!(validate_catalog(&bad_id).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let result = load_catalog(Path::new("/nonexistent/selfroles.json"));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidSelfRoleCatalog { .. })
        ));
    }
}
