//! Process-local key-value storage.
//!
//! Optionally enforces a byte quota over keys plus values, the way browser
//! local storage refuses writes once its budget is spent.

use super::{KeyValueStorage, StorageError, StorageResult};
use std::collections::HashMap;

/// In-memory storage; contents live as long as the value.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    data: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage that rejects writes pushing usage past `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            data: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes used by all keys and values.
    pub fn used_bytes(&self) -> usize {
        self.data
            .iter()
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.data.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(quota_bytes) = self.quota_bytes {
            let replaced = self
                .data
                .get(key)
                .map_or(0, |previous| key.len() + previous.len());
            let required_bytes = self.used_bytes() - replaced + key.len() + value.len();
            if required_bytes > quota_bytes {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    required_bytes,
                    quota_bytes,
                });
            }
        }
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.data.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStorage;
    use crate::storage::{KeyValueStorage, StorageError};

    #[test]
    fn get_missing_returns_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("absent").unwrap(), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut storage = MemoryStorage::new();
        storage.set_item("k", "one").unwrap();
        storage.set_item("k", "two").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let mut storage = MemoryStorage::new();
        storage.remove_item("absent").unwrap();
        storage.set_item("k", "v").unwrap();
        storage.remove_item("k").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn quota_counts_replacement_not_accumulation() {
        let mut storage = MemoryStorage::with_quota(6);
        storage.set_item("k", "12345").unwrap();
        storage.set_item("k", "abcde").unwrap();
        assert_eq!(storage.used_bytes(), 6);

        let err = storage.set_item("k", "123456").unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                required_bytes: 7,
                quota_bytes: 6,
                ..
            }
        ));
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("abcde"));
    }
}
