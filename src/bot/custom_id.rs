//! Typed custom IDs for buttons, select menus and modals.
//!
//! Every component the bot sends gets its custom ID from [`CustomId`]'s `Display`
//! implementation, and every incoming interaction is parsed back with `parse`, so the
//! two directions cannot drift apart.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomId {
    /// Sorting panel button.
    SortingRoll,
    /// Opens the ID card modal.
    IdCardOpen,
    /// ID card modal submission.
    IdCardSubmit,
    /// Opens the menfess modal.
    MenfessNew,
    /// Menfess modal submission.
    MenfessSubmit,
    /// Opens the anonymous reply modal for a menfess number.
    MenfessReply(i32),
    /// Anonymous reply modal submission for a menfess number.
    MenfessReplySubmit(i32),
    /// Registry navigation from the given page index.
    RegistryPrev(usize),
    RegistryNext(usize),
    /// Self-role select menu for a catalog category.
    SelfRoles(String),
}

impl CustomId {
    /// Parses a custom ID, `None` for IDs this bot does not own.
    pub fn parse(id: &str) -> Option<Self> {
        let parts: Vec<&str> = id.split(':').collect();

        match parts.as_slice() {
            ["sorting", "roll"] => Some(Self::SortingRoll),
            ["idcard", "open"] => Some(Self::IdCardOpen),
            ["idcard", "submit"] => Some(Self::IdCardSubmit),
            ["menfess", "new"] => Some(Self::MenfessNew),
            ["menfess", "submit"] => Some(Self::MenfessSubmit),
            ["menfess", "reply", n] => n.parse().ok().map(Self::MenfessReply),
            ["menfess", "reply_submit", n] => n.parse().ok().map(Self::MenfessReplySubmit),
            ["registry", "prev", n] => n.parse().ok().map(Self::RegistryPrev),
            ["registry", "next", n] => n.parse().ok().map(Self::RegistryNext),
            ["selfroles", category] if !category.is_empty() => {
                Some(Self::SelfRoles(category.to_string()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for CustomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SortingRoll => f.write_str("sorting:roll"),
            Self::IdCardOpen => f.write_str("idcard:open"),
            Self::IdCardSubmit => f.write_str("idcard:submit"),
            Self::MenfessNew => f.write_str("menfess:new"),
            Self::MenfessSubmit => f.write_str("menfess:submit"),
            Self::MenfessReply(id) => write!(f, "menfess:reply:{}", id),
            Self::MenfessReplySubmit(id) => write!(f, "menfess:reply_submit:{}", id),
            Self::RegistryPrev(page) => write!(f, "registry:prev:{}", page),
            Self::RegistryNext(page) => write!(f, "registry:next:{}", page),
            Self::SelfRoles(category) => write!(f, "selfroles:{}", category),
        }
    }
}

impl From<CustomId> for String {
    fn from(id: CustomId) -> Self {
        id.to_string()
    }
}
