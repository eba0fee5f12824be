use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::kv::KvStore;

/// Load a JSON value from the store. `Ok(None)` means the key was never
/// written; a present-but-unparseable value is an error the caller decides
/// how to treat.
pub fn load_state<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize a value to JSON and write it under `key`.
pub fn save_state<T: Serialize>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
