//! Army registry: list, create and select armies.

use crate::error::{CollectionError, Result, ValidationError};
use crate::models::{Army, Document};
use crate::store::{persist, DocumentStore};

/// Army names in document order.
pub fn list_armies(doc: &Document) -> Vec<&str> {
    doc.army_names().collect()
}

/// Adds an empty army and persists the document.
///
/// The name is trimmed. Blank and already-used names are rejected without
/// touching the document.
pub fn create_army<S: DocumentStore + ?Sized>(
    doc: &mut Document,
    store: &S,
    name: &str,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::BlankArmyName.into());
    }
    if doc.contains_army(name) {
        return Err(CollectionError::DuplicateArmy(name.to_string()));
    }

    let previous = doc.clone();
    doc.insert_army(name, Army::new());
    persist(store, doc, previous)?;

    tracing::info!("Created army '{}'", name);
    Ok(())
}

pub fn select_army<'a>(doc: &'a Document, name: &str) -> Option<&'a Army> {
    doc.army(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_create_and_list_in_order() {
        let store = MemoryStore::new();
        let mut doc = store.load();

        create_army(&mut doc, &store, "Orcs").unwrap();
        create_army(&mut doc, &store, "Elves").unwrap();
        create_army(&mut doc, &store, "Dwarfs").unwrap();

        assert_eq!(list_armies(&doc), vec!["Orcs", "Elves", "Dwarfs"]);
        assert_eq!(list_armies(&store.load()), vec!["Orcs", "Elves", "Dwarfs"]);
        assert_eq!(store.save_count(), 3);
    }

    #[test]
    fn test_create_duplicate_army_fails() {
        let store = MemoryStore::new();
        let mut doc = store.load();
        create_army(&mut doc, &store, "Orcs").unwrap();
        let before = doc.clone();

        let result = create_army(&mut doc, &store, "Orcs");

        assert!(matches!(result, Err(CollectionError::DuplicateArmy(name)) if name == "Orcs"));
        assert_eq!(doc, before);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_create_trims_name_before_duplicate_check() {
        let store = MemoryStore::new();
        let mut doc = store.load();
        create_army(&mut doc, &store, "  Orcs ").unwrap();

        assert!(select_army(&doc, "Orcs").is_some());
        assert!(matches!(
            create_army(&mut doc, &store, "Orcs"),
            Err(CollectionError::DuplicateArmy(_))
        ));
    }

    #[test]
    fn test_create_blank_army_fails() {
        let store = MemoryStore::new();
        let mut doc = store.load();

        let result = create_army(&mut doc, &store, "   ");

        assert!(matches!(
            result,
            Err(CollectionError::Validation(ValidationError::BlankArmyName))
        ));
        assert!(doc.is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_select_army() {
        let store = MemoryStore::new();
        let mut doc = store.load();
        create_army(&mut doc, &store, "Orcs").unwrap();

        assert!(select_army(&doc, "Orcs").unwrap().is_empty());
        assert!(select_army(&doc, "Elves").is_none());
    }
}
