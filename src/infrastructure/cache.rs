use crate::domain::table::DataTable;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Bounded cache of parsed tables keyed by file content.
///
/// Re-submitting the same spreadsheet (a common pattern when users tweak
/// analysis options and re-run) skips the parse entirely. Entries are
/// evicted in insertion order once the capacity is reached.
pub struct ParseCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

struct CacheInner {
    entries: HashMap<String, Arc<DataTable>>,
    order: VecDeque<String>,
}

impl ParseCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Cache key for an upload: the extension disambiguates identical bytes
    /// parsed under different formats.
    pub fn content_key(extension: &str, bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        format!("{}:{}", extension, hex::encode(hasher.finalize()))
    }

    pub fn get(&self, key: &str) -> Option<Arc<DataTable>> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.entries.get(key).cloned()
    }

    pub fn insert(&self, key: String, table: Arc<DataTable>) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.entries.contains_key(&key) {
            return;
        }
        while inner.order.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
            }
        }
        inner.order.push_back(key.clone());
        inner.entries.insert(key, table);
    }
}
