use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use super::{decode, encode, DocumentStore, EMPTY_DOCUMENT};
use crate::error::StoreError;
use crate::models::Document;

/// In-memory backing that holds the serialized document text.
///
/// Goes through the same encode/decode path as the file store, so corrupt
/// contents and round trips behave identically.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: Mutex<Option<String>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    /// An empty backing, as if the file did not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backing pre-filled with raw text.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(text.into())),
            saves: AtomicUsize::new(0),
        }
    }

    /// Current raw text, or `None` if nothing was ever written.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Document {
        let mut contents = self.contents.lock().unwrap_or_else(PoisonError::into_inner);
        match contents.as_deref() {
            Some(text) => decode(text, "memory"),
            None => {
                *contents = Some(EMPTY_DOCUMENT.to_string());
                Document::new()
            }
        }
    }

    fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let text = encode(doc)?;
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
