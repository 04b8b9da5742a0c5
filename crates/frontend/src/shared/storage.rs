//! Local persistence of UI state.
//!
//! Each store is saved under its own key as `{"state": ..., "version": N}`.
//! A missing key, corrupt JSON or a version mismatch all hydrate to the
//! store's default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write '{0}' to local storage")]
    Write(String),
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Browser storage when a window exists, otherwise an in-memory map.
    pub fn shared() -> Rc<dyn KeyValueStorage> {
        if Self::storage().is_some() {
            Rc::new(BrowserStorage)
        } else {
            log::warn!("localStorage unavailable, UI state will not survive a reload");
            Rc::new(MemoryStorage::default())
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()
            .ok_or(StorageError::Unavailable)?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// State that lives in local storage.
pub trait PersistedState: Serialize + DeserializeOwned + Default + Clone + 'static {
    const STORAGE_KEY: &'static str;
    /// Bump when the stored shape changes incompatibly.
    const VERSION: u32 = 0;
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    state: &'a T,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope<T> {
    state: T,
    #[serde(default)]
    version: u32,
}

/// Read `key`, falling back to `T::default()`.
pub fn hydrate<T: DeserializeOwned + Default>(
    storage: &dyn KeyValueStorage,
    key: &str,
    version: u32,
) -> T {
    let Some(raw) = storage.get_item(key) else {
        return T::default();
    };
    match serde_json::from_str::<Envelope<T>>(&raw) {
        Ok(envelope) if envelope.version == version => envelope.state,
        Ok(envelope) => {
            log::warn!(
                "stored '{}' has version {}, expected {}; using defaults",
                key,
                envelope.version,
                version
            );
            T::default()
        }
        Err(e) => {
            log::warn!("stored '{}' is unreadable ({}); using defaults", key, e);
            T::default()
        }
    }
}

pub fn save<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    version: u32,
    state: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(&EnvelopeRef { state, version })?;
    storage.set_item(key, &raw)
}

/// A state value bound to its storage key. Every mutation is written through.
pub struct PersistedStore<T: PersistedState> {
    key: String,
    state: T,
    storage: Rc<dyn KeyValueStorage>,
}

impl<T: PersistedState> PersistedStore<T> {
    pub fn load(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self::load_with_key(storage, T::STORAGE_KEY)
    }

    /// For stores with one instance per screen, e.g. `table:<id>`.
    pub fn load_with_key(storage: Rc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = hydrate(storage.as_ref(), &key, T::VERSION);
        Self {
            key,
            state,
            storage,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.state);
        self.persist();
        result
    }

    pub fn replace(&mut self, value: T) {
        self.update(|state| *state = value);
    }

    pub fn reset(&mut self) {
        self.replace(T::default());
    }

    /// Forget the stored value without touching the in-memory state.
    pub fn clear(&self) {
        self.storage.remove_item(&self.key);
    }

    pub fn into_parts(self) -> (String, T, Rc<dyn KeyValueStorage>) {
        (self.key, self.state, self.storage)
    }

    fn persist(&self) {
        if let Err(e) = save(self.storage.as_ref(), &self.key, T::VERSION, &self.state) {
            log::warn!("failed to persist '{}': {}", self.key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: u32,
    }

    impl PersistedState for Counter {
        const STORAGE_KEY: &'static str = "counter";
        const VERSION: u32 = 2;
    }

    #[test]
    fn updates_survive_reload() {
        let storage: Rc<dyn KeyValueStorage> = Rc::new(MemoryStorage::default());
        let mut store = PersistedStore::<Counter>::load(storage.clone());
        assert_eq!(store.state().value, 0);
        store.update(|c| c.value = 7);

        assert_eq!(
            storage.get_item("counter").unwrap(),
            r#"{"state":{"value":7},"version":2}"#
        );
        let reloaded = PersistedStore::<Counter>::load(storage);
        assert_eq!(reloaded.state().value, 7);
    }

    #[test]
    fn corrupt_or_outdated_state_falls_back_to_default() {
        let storage = MemoryStorage::default();
        storage.set_item("counter", "{not json").unwrap();
        assert_eq!(hydrate::<Counter>(&storage, "counter", 2), Counter::default());

        storage
            .set_item("counter", r#"{"state":{"value":3},"version":1}"#)
            .unwrap();
        assert_eq!(hydrate::<Counter>(&storage, "counter", 2), Counter::default());
        assert_eq!(hydrate::<Counter>(&storage, "counter", 1), Counter { value: 3 });
    }

    #[test]
    fn reset_is_idempotent() {
        let storage: Rc<dyn KeyValueStorage> = Rc::new(MemoryStorage::default());
        let mut store = PersistedStore::<Counter>::load_with_key(storage.clone(), "table:x");
        store.update(|c| c.value = 1);
        store.reset();
        let first = store.state().clone();
        store.reset();
        assert_eq!(store.state(), &first);
        assert_eq!(store.key(), "table:x");
        assert_eq!(hydrate::<Counter>(storage.as_ref(), "table:x", 2), Counter::default());
    }
}
