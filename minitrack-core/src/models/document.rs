use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::army::Army;

/// The whole persisted collection: army name to army, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    armies: IndexMap<String, Army>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.armies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.armies.is_empty()
    }

    pub fn contains_army(&self, name: &str) -> bool {
        self.armies.contains_key(name)
    }

    pub fn army(&self, name: &str) -> Option<&Army> {
        self.armies.get(name)
    }

    pub fn army_mut(&mut self, name: &str) -> Option<&mut Army> {
        self.armies.get_mut(name)
    }

    /// Returns the named army, inserting an empty one at the end if absent.
    pub fn army_or_insert(&mut self, name: &str) -> &mut Army {
        self.armies.entry(name.to_string()).or_default()
    }

    pub fn insert_army(&mut self, name: impl Into<String>, army: Army) -> Option<Army> {
        self.armies.insert(name.into(), army)
    }

    pub fn army_names(&self) -> impl Iterator<Item = &str> {
        self.armies.keys().map(String::as_str)
    }
}
