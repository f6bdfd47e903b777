//! Query Cache
//!
//! Keyed store of last-known query results with per-key listeners.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

type Listener = Arc<dyn Fn(&Value) + Send + Sync>;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to encode cached value for key `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("cached value for key `{key}` has an unexpected shape")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<String, Value>,
    listeners: HashMap<String, Vec<(u64, Listener)>>,
    next_listener_id: u64,
}

/// Shared query cache handle.
///
/// Cloning is cheap and every clone sees the same entries. Values are kept as
/// JSON and decoded into the caller's type on read, so a shape mismatch shows
/// up as a [`CacheError::Decode`] instead of a panic.
#[derive(Clone, Default)]
pub struct QueryCache {
    inner: Arc<RwLock<CacheInner>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, CacheInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the cached value for `key`, if any.
    pub fn get_query_data<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        let value = self.read().entries.get(key).cloned();
        value
            .map(|value| {
                serde_json::from_value(value).map_err(|source| CacheError::Decode {
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Replace the value under `key` with `updater(previous)` and notify the
    /// key's listeners. Other keys are left untouched.
    ///
    /// Listeners run after the lock is released, so they may read the cache.
    pub fn set_query_data<T, F>(&self, key: &str, updater: F) -> Result<(), CacheError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(Option<T>) -> T,
    {
        let previous = self.get_query_data::<T>(key)?;
        self.put_query_data(key, &updater(previous))
    }

    /// Store `data` under `key` regardless of what was cached before, then
    /// notify the key's listeners.
    pub fn put_query_data<T: Serialize>(&self, key: &str, data: &T) -> Result<(), CacheError> {
        let value = serde_json::to_value(data).map_err(|source| CacheError::Encode {
            key: key.to_string(),
            source,
        })?;

        let listeners: Vec<Listener> = {
            let mut inner = self.write();
            inner.entries.insert(key.to_string(), value.clone());
            inner
                .listeners
                .get(key)
                .map(|registered| registered.iter().map(|(_, l)| Arc::clone(l)).collect())
                .unwrap_or_default()
        };

        for listener in listeners {
            listener(&value);
        }
        Ok(())
    }

    /// Drop the entry under `key` without notifying anyone.
    pub fn remove_query_data(&self, key: &str) -> bool {
        self.write().entries.remove(key).is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read().entries.contains_key(key)
    }

    /// Register `listener` for writes to `key`. The listener stays registered
    /// until the returned [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, key: &str, listener: F) -> Subscription
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        let mut inner = self.write();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner
            .listeners
            .entry(key.to_string())
            .or_default()
            .push((id, Arc::new(listener)));

        Subscription {
            cache: Arc::clone(&self.inner),
            key: key.to_string(),
            id,
        }
    }

    pub fn listener_count(&self, key: &str) -> usize {
        self.read().listeners.get(key).map_or(0, Vec::len)
    }
}

/// Listener registration guard; unsubscribes on drop.
pub struct Subscription {
    cache: Arc<RwLock<CacheInner>>,
    key: String,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut inner = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(registered) = inner.listeners.get_mut(&self.key) {
            registered.retain(|(id, _)| *id != self.id);
            if registered.is_empty() {
                inner.listeners.remove(&self.key);
            }
        }
    }
}
