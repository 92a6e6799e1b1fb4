use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::unit::Unit;

/// A stored unit group, or an entry whose fields could not be read.
///
/// Unreadable entries are written back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UnitEntry {
    Unit(Unit),
    Unreadable(Value),
}

/// A named collection of unit groups, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Army {
    entries: IndexMap<String, UnitEntry>,
}

impl Army {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries, unreadable ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, unit_name: &str) -> Option<&Unit> {
        match self.entries.get(unit_name) {
            Some(UnitEntry::Unit(unit)) => Some(unit),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, unit_name: &str) -> Option<&mut Unit> {
        match self.entries.get_mut(unit_name) {
            Some(UnitEntry::Unit(unit)) => Some(unit),
            _ => None,
        }
    }

    /// Inserts or replaces a unit group, returning the previous unit.
    ///
    /// A replaced entry keeps its position. Replacing an unreadable entry
    /// returns `None`.
    pub fn insert(&mut self, unit_name: impl Into<String>, unit: Unit) -> Option<Unit> {
        match self.entries.insert(unit_name.into(), UnitEntry::Unit(unit)) {
            Some(UnitEntry::Unit(previous)) => Some(previous),
            _ => None,
        }
    }

    /// Removes a unit group, keeping the order of the remaining entries.
    ///
    /// Unreadable entries are left in place.
    pub fn remove(&mut self, unit_name: &str) -> Option<Unit> {
        if self.get(unit_name).is_none() {
            return None;
        }
        match self.entries.shift_remove(unit_name) {
            Some(UnitEntry::Unit(unit)) => Some(unit),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Unit)> {
        self.entries.iter().filter_map(|(name, entry)| match entry {
            UnitEntry::Unit(unit) => Some((name.as_str(), unit)),
            UnitEntry::Unreadable(_) => None,
        })
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.iter().map(|(_, unit)| unit)
    }

    /// Names of entries that could not be read as units.
    pub fn unreadable(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|(name, entry)| match entry {
            UnitEntry::Unreadable(_) => Some(name.as_str()),
            UnitEntry::Unit(_) => None,
        })
    }
}

impl<'de> Deserialize<'de> for Army {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let entries = raw
            .into_iter()
            .map(|(name, value)| {
                let entry = match Unit::deserialize(&value) {
                    Ok(unit) => UnitEntry::Unit(unit),
                    Err(e) => {
                        tracing::warn!("Keeping unreadable unit '{}' as-is: {}", name, e);
                        UnitEntry::Unreadable(value)
                    }
                };
                (name, entry)
            })
            .collect();
        Ok(Self { entries })
    }
}

impl FromIterator<(String, Unit)> for Army {
    fn from_iter<I: IntoIterator<Item = (String, Unit)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, unit)| (name, UnitEntry::Unit(unit)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut army = Army::new();
        army.insert("Boyz", Unit::new("Infantry", 20));
        army.insert("Nobz", Unit::new("Infantry", 5));

        let previous = army.insert("Boyz", Unit::new("Infantry", 30));

        assert_eq!(previous.unwrap().miniatures_number, 20);
        assert_eq!(army.len(), 2);
        let names: Vec<&str> = army.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Boyz", "Nobz"]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut army: Army = vec![
            ("A".to_string(), Unit::new("Infantry", 1)),
            ("B".to_string(), Unit::new("Infantry", 2)),
            ("C".to_string(), Unit::new("Infantry", 3)),
        ]
        .into_iter()
        .collect();

        assert!(army.remove("B").is_some());
        assert!(army.remove("B").is_none());

        let names: Vec<&str> = army.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    const WITH_BAD_UNIT: &str = r#"{
  "Boyz": {
    "miniatures_number": 20,
    "rare": "No",
    "status": "built",
    "miniatures_type": "Infantry",
    "note": ""
  },
  "Grot": {
    "miniatures_number": 3,
    "rare": "maybe",
    "status": "built",
    "miniatures_type": "Infantry",
    "note": ""
  }
}"#;

    #[test]
    fn test_bad_unit_is_kept_unreadable() {
        let army: Army = serde_json::from_str(WITH_BAD_UNIT).unwrap();

        assert_eq!(army.len(), 2);
        assert_eq!(army.get("Boyz").unwrap().miniatures_number, 20);
        assert!(army.get("Grot").is_none());
        assert_eq!(army.unreadable().collect::<Vec<_>>(), vec!["Grot"]);
        assert_eq!(army.units().count(), 1);
        assert_eq!(serde_json::to_string_pretty(&army).unwrap(), WITH_BAD_UNIT);
    }

    #[test]
    fn test_unreadable_entry_survives_remove_and_is_replaced_by_insert() {
        let mut army: Army = serde_json::from_str(WITH_BAD_UNIT).unwrap();

        assert!(army.remove("Grot").is_none());
        assert_eq!(army.len(), 2);

        assert!(army.insert("Grot", Unit::new("Infantry", 3)).is_none());
        assert_eq!(army.get("Grot").unwrap().miniatures_number, 3);
        assert_eq!(army.unreadable().count(), 0);
    }

    #[test]
    fn test_non_object_army_is_rejected() {
        let result: Result<Army, _> = serde_json::from_str("5");
        assert!(result.is_err());
    }
}
