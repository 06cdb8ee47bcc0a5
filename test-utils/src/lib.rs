//! HOV Assistant Test Utils
//!
//! Provides shared testing utilities for the HOV Assistant bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases and customizable table
//! schemas, plus factories for seeding rows.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::IdCard;
//!
//! #[tokio::test]
//! async fn test_id_card_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(IdCard)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
