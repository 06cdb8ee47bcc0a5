//! Factory methods for creating test data.
//!
//! Each table has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let card = factory::id_card::create_id_card(&db).await?;
//! let sorted = factory::sorting_user::SortingUserFactory::new(&db)
//!     .user_id(card.user_id.clone())
//!     .house("dark")
//!     .build()
//!     .await?;
//! ```

pub mod afk_user;
pub mod helpers;
pub mod id_card;
pub mod menfess;
pub mod sorting_user;
