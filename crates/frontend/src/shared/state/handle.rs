use leptos::prelude::*;
use std::rc::Rc;

use crate::shared::storage::{save, KeyValueStorage, PersistedState, PersistedStore};

/// Reactive view of a persisted store.
///
/// Reads subscribe like any signal; every mutation goes through
/// [`StoreHandle::update`], which notifies subscribers and writes the new
/// state to local storage.
pub struct StoreHandle<T: PersistedState + Send + Sync> {
    state: RwSignal<T>,
    key: StoredValue<String>,
    storage: StoredValue<Rc<dyn KeyValueStorage>, LocalStorage>,
}

impl<T: PersistedState + Send + Sync> Clone for StoreHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: PersistedState + Send + Sync> Copy for StoreHandle<T> {}

impl<T: PersistedState + Send + Sync> StoreHandle<T> {
    pub fn load(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self::from_store(PersistedStore::load(storage))
    }

    pub fn load_with_key(storage: Rc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self::from_store(PersistedStore::load_with_key(storage, key))
    }

    pub fn from_store(store: PersistedStore<T>) -> Self {
        let (key, state, storage) = store.into_parts();
        Self {
            state: RwSignal::new(state),
            key: StoredValue::new(key),
            storage: StoredValue::new_local(storage),
        }
    }

    pub fn get(&self) -> T {
        self.state.get()
    }

    pub fn get_untracked(&self) -> T {
        self.state.get_untracked()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.state.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.state.with_untracked(f)
    }

    pub fn read_only(&self) -> Signal<T> {
        self.state.into()
    }

    /// Mutate, notify, persist. `None` once the owning scope is disposed.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let result = self.state.try_update(f);
        self.persist();
        result
    }

    pub fn reset(&self) {
        self.update(|state| *state = T::default());
    }

    fn persist(&self) {
        let key = self.key.get_value();
        let result = self.state.with_untracked(|state| {
            self.storage
                .with_value(|storage| save(storage.as_ref(), &key, T::VERSION, state))
        });
        if let Err(e) = result {
            log::warn!("failed to persist '{}': {}", key, e);
        }
    }
}
