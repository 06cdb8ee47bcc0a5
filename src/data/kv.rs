//! Key/value text store.
//!
//! This module defines the `KvStore` abstraction consumed by the fair sorting allocator
//! and `KvRepository`, its SeaORM implementation over the `kv_entry` table.

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait, TransactionSession,
    TransactionTrait,
};

/// Persistent text store keyed by string.
///
/// `set_texts` must apply every entry or none of them: callers rely on it to persist
/// several related values as one unit.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Reads the value stored under `key`, `None` if the key was never written.
    async fn get_text(&self, key: &str) -> Result<Option<String>, DbErr>;

    /// Overwrites all given keys atomically. Durable once the call returns.
    async fn set_texts(&self, entries: &[(&str, String)]) -> Result<(), DbErr>;
}

/// Repository providing the key/value store over the `kv_entry` table.
///
/// Works against a plain connection or an open transaction. Writes always run in their
/// own (possibly nested) transaction so a batch is applied atomically.
pub struct KvRepository<'a, C> {
    db: &'a C,
}

impl<'a, C> KvRepository<'a, C>
where
    C: ConnectionTrait + TransactionTrait,
{
    /// Creates a new KvRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a, C> KvStore for KvRepository<'a, C>
where
    C: ConnectionTrait + TransactionTrait + Send + Sync,
{
    async fn get_text(&self, key: &str) -> Result<Option<String>, DbErr> {
        let entry = entity::prelude::KvEntry::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(entry.map(|entry| entry.value))
    }

    async fn set_texts(&self, entries: &[(&str, String)]) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        for (key, value) in entries {
            entity::prelude::KvEntry::insert(entity::kv_entry::ActiveModel {
                key: ActiveValue::Set(key.to_string()),
                value: ActiveValue::Set(value.clone()),
            })
            .on_conflict(
                OnConflict::column(entity::kv_entry::Column::Key)
                    .update_column(entity::kv_entry::Column::Value)
                    .to_owned(),
            )
            .exec(&txn)
            .await?;
        }

        txn.commit().await
    }
}
