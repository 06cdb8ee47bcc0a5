//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot's event handlers and the data (repository) layer. They
//! validate and sanitise member input, coordinate repository calls and own any state
//! that must outlive a single interaction, such as menfess cooldowns or the sorting lock.

pub mod afk;
pub mod id_card;
pub mod menfess;
pub mod registry;
pub mod self_role;
pub mod sorting;
