//! One-call-per-interaction facade over an injected store.

use std::sync::{Mutex, PoisonError};

use crate::error::{CollectionError, Result};
use crate::models::{Army, Document, Unit};
use crate::registry;
use crate::stats::{self, ArmyStats};
use crate::store::DocumentStore;
use crate::units::{self, StatusChange, StatusOnUpdate, UnitForm, UpsertOutcome};

/// Miniature collection backed by a [`DocumentStore`].
///
/// Every method loads the document fresh, applies one operation and saves
/// when it mutated. Cycles are serialized by an internal lock, so a shared
/// `Collection` never interleaves two load-mutate-save sequences.
#[derive(Debug)]
pub struct Collection<S> {
    store: S,
    status_on_update: StatusOnUpdate,
    lock: Mutex<()>,
}

impl<S: DocumentStore> Collection<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            status_on_update: StatusOnUpdate::default(),
            lock: Mutex::new(()),
        }
    }

    pub fn with_status_on_update(mut self, policy: StatusOnUpdate) -> Self {
        self.status_on_update = policy;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn status_on_update(&self) -> StatusOnUpdate {
        self.status_on_update
    }

    fn cycle<T>(&self, op: impl FnOnce(&mut Document, &S) -> Result<T>) -> Result<T> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut doc = self.store.load();
        op(&mut doc, &self.store)
    }

    /// A snapshot of the whole document.
    pub fn document(&self) -> Document {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.store.load()
    }

    pub fn list_armies(&self) -> Vec<String> {
        registry::list_armies(&self.document())
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn create_army(&self, name: &str) -> Result<()> {
        self.cycle(|doc, store| registry::create_army(doc, store, name))
    }

    pub fn select_army(&self, name: &str) -> Option<Army> {
        registry::select_army(&self.document(), name).cloned()
    }

    pub fn upsert_unit(&self, army_name: &str, form: &UnitForm) -> Result<UpsertOutcome> {
        let policy = self.status_on_update;
        self.cycle(|doc, store| units::upsert_unit(doc, store, army_name, form, policy))
    }

    pub fn update_status(
        &self,
        army_name: &str,
        unit_name: &str,
        new_status: &str,
    ) -> Result<StatusChange> {
        self.cycle(|doc, store| units::update_status(doc, store, army_name, unit_name, new_status))
    }

    pub fn delete_unit(&self, army_name: &str, unit_name: &str) -> Result<Unit> {
        self.cycle(|doc, store| units::delete_unit(doc, store, army_name, unit_name))
    }

    /// Statistics for one army.
    pub fn stats(&self, army_name: &str) -> Result<ArmyStats> {
        self.select_army(army_name)
            .map(|army| stats::compute(&army))
            .ok_or_else(|| CollectionError::ArmyNotFound(army_name.to_string()))
    }
}
