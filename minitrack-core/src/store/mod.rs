//! Document persistence.
//!
//! Every mutation rewrites the whole document. Loading never fails: a
//! missing, unreadable or corrupt backing degrades to an empty document and
//! is only reported through the log.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::models::Document;

/// Serialized form of an empty document.
pub const EMPTY_DOCUMENT: &str = "{}";

/// Backing storage for the collection document.
pub trait DocumentStore {
    /// Loads the full document, falling back to an empty one.
    fn load(&self) -> Document;

    /// Replaces the stored document with `doc`.
    fn save(&self, doc: &Document) -> Result<(), StoreError>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn load(&self) -> Document {
        (**self).load()
    }

    fn save(&self, doc: &Document) -> Result<(), StoreError> {
        (**self).save(doc)
    }
}

/// Pretty-prints a document with two-space indentation.
///
/// Non-ASCII text is written as-is.
pub fn encode(doc: &Document) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Parses stored text, returning an empty document for corrupt input.
pub fn decode(text: &str, origin: &str) -> Document {
    match serde_json::from_str(text) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!("Ignoring corrupt document in {}: {}", origin, e);
            Document::new()
        }
    }
}

/// Saves `doc`, restoring it to `previous` if the write fails so that the
/// in-memory copy never runs ahead of the backing store.
pub(crate) fn persist<S: DocumentStore + ?Sized>(
    store: &S,
    doc: &mut Document,
    previous: Document,
) -> Result<(), StoreError> {
    if let Err(e) = store.save(doc) {
        *doc = previous;
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Army, Status, Unit};

    #[test]
    fn test_encode_empty_document() {
        assert_eq!(encode(&Document::new()).unwrap(), EMPTY_DOCUMENT);
    }

    #[test]
    fn test_encode_is_pretty_and_keeps_unicode() {
        let mut doc = Document::new();
        let mut army = Army::new();
        army.insert("Gärtner", Unit::new("Ork-Söldner", 3));
        doc.insert_army("Waaagh!", army);

        let text = encode(&doc).unwrap();

        assert!(text.contains("Gärtner"));
        assert!(text.contains("Ork-Söldner"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\n  \"Waaagh!\": {\n    \"Gärtner\": {\n      \"miniatures_number\": 3,"));
    }

    #[test]
    fn test_decode_corrupt_returns_empty() {
        assert!(decode("{not json", "test").is_empty());
        assert!(decode("", "test").is_empty());
        assert!(decode("[]", "test").is_empty());
        assert!(decode(r#"{"Orcs": 5}"#, "test").is_empty());
    }

    #[test]
    fn test_decode_keeps_armies_around_a_bad_unit() {
        let text = r#"{"Orcs":{"Grot":{"rare":"maybe","miniatures_number":1.5}},"Elves":{}}"#;

        let doc = decode(text, "test");

        assert_eq!(doc.army_names().collect::<Vec<_>>(), vec!["Orcs", "Elves"]);
        assert_eq!(doc.army("Orcs").unwrap().len(), 1);
        assert!(doc.army("Orcs").unwrap().get("Grot").is_none());
    }

    #[test]
    fn test_encode_decode_is_fixed_point() {
        let mut doc = Document::new();
        doc.army_or_insert("Orcs")
            .insert("Boyz", Unit::new("Infantry", 20).with_note("green"));
        doc.army_or_insert("Orcs").insert(
            "Nobz",
            Unit::new("Infantry", 5)
                .with_rare(true)
                .with_status(Status::Painted),
        );
        doc.army_or_insert("Elves");

        let first = encode(&doc).unwrap();
        let second = encode(&decode(&first, "test")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_unrecognized_status_survives_round_trip() {
        let text = r#"{
  "Orcs": {
    "Boyz": {
      "miniatures_number": 4,
      "rare": "No",
      "status": "primed",
      "miniatures_type": "Infantry",
      "note": ""
    }
  }
}"#;
        assert_eq!(encode(&decode(text, "test")).unwrap(), text);
    }
}
