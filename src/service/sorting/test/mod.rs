use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::{
    data::kv::KvStore,
    error::sorting::SortingError,
    model::house::House,
    service::sorting::allocator::{FairAllocator, BAG_KEY, CURSOR_KEY, LAST_KEY},
};


/// In-memory `KvStore` with switchable failures.
#[derive(Clone, Default)]
struct MemoryKvStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryKvStore {
    fn with_values(values: &[(&str, &str)]) -> Self {
        let store = Self::default();
        {
            let mut map = store.values.lock().unwrap();
            for (key, value) in values {
                map.insert(key.to_string(), value.to_string());
            }
        }
        store
    }

    fn snapshot(&self) -> HashMap<String, String> {
        self.values.lock().unwrap().clone()
    }

    fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn bag(&self) -> Vec<House> {
        serde_json::from_str(&self.value(BAG_KEY).unwrap()).unwrap()
    }

    fn cursor(&self) -> usize {
        self.value(CURSOR_KEY).unwrap().parse().unwrap()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get_text(&self, key: &str) -> Result<Option<String>, DbErr> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DbErr::Custom("store offline".to_string()));
        }
        Ok(self.value(key))
    }

    async fn set_texts(&self, entries: &[(&str, String)]) -> Result<(), DbErr> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DbErr::Custom("store offline".to_string()));
        }
        let mut map = self.values.lock().unwrap();
        for (key, value) in entries {
            map.insert(key.to_string(), value.clone());
        }
        Ok(())
    }
}
