//! Client-local key-value storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session and theme persistence read and write through `KeyValueStore` so
//! the browser-wide `localStorage` singleton can be swapped for an in-memory
//! fake in host tests.
//!
//! TRADE-OFFS
//! ==========
//! `BrowserStore` is only live under `hydrate`. SSR and host builds see an
//! empty store that drops writes, which keeps server rendering deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Minimal string key-value storage, modelled on the Web Storage API.
pub trait KeyValueStore {
    /// Read the raw value for `key`, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error string if the backend refuses the write (quota
    /// exceeded, storage disabled).
    fn set(&self, key: &str, value: &str) -> Result<(), String>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str);
}

/// `window.localStorage` for the current origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| "local storage unavailable".to_owned())?;
            storage
                .set_item(key, value)
                .map_err(|e| format!("local storage write failed: {e:?}"))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store. Clones share one map, so two clones behave like two tabs
/// of the same browser profile.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// A boolean preference persisted as one of two string values under a key.
#[derive(Clone, Debug)]
pub struct LocalFlag<S> {
    store: S,
    key: &'static str,
    on_value: &'static str,
    off_value: &'static str,
}

impl<S: KeyValueStore> LocalFlag<S> {
    #[must_use]
    pub fn new(store: S, key: &'static str, on_value: &'static str, off_value: &'static str) -> Self {
        Self { store, key, on_value, off_value }
    }

    /// Stored preference, or `None` when unset or holding an unknown value.
    pub fn read(&self) -> Option<bool> {
        let raw = self.store.get(self.key)?;
        if raw == self.on_value {
            Some(true)
        } else if raw == self.off_value {
            Some(false)
        } else {
            None
        }
    }

    /// Persist the preference.
    ///
    /// # Errors
    ///
    /// Propagates the backend write error.
    pub fn write(&self, enabled: bool) -> Result<(), String> {
        self.store
            .set(self.key, if enabled { self.on_value } else { self.off_value })
    }
}
