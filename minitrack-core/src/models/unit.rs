use serde::{Deserialize, Serialize};
use std::fmt;

use super::status::{Status, UnitStatus};

/// One group of identical miniatures inside an army.
///
/// Field order matches the on-disk layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(default)]
    pub miniatures_number: u32,
    #[serde(default, with = "yes_no")]
    pub rare: bool,
    #[serde(default)]
    pub status: UnitStatus,
    pub miniatures_type: String,
    #[serde(default)]
    pub note: String,
}

impl Unit {
    /// A freshly built unit with no note.
    pub fn new(miniatures_type: impl Into<String>, miniatures_number: u32) -> Self {
        Self {
            miniatures_number,
            rare: false,
            status: UnitStatus::Known(Status::Built),
            miniatures_type: miniatures_type.into(),
            note: String::new(),
        }
    }

    pub fn with_rare(mut self, rare: bool) -> Self {
        self.rare = rare;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<UnitStatus>) -> Self {
        self.status = status.into();
        self
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Miniatures type: {}", self.miniatures_type)?;
        writeln!(f, "Number: {}", self.miniatures_number)?;
        writeln!(f, "Rare: {}", yes_no::label(self.rare))?;
        if !self.note.is_empty() {
            writeln!(f, "Notes: {}", self.note)?;
        }
        Ok(())
    }
}

/// Serializes the rarity flag as "Yes"/"No".
pub mod yes_no {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn label(flag: bool) -> &'static str {
        if flag {
            "Yes"
        } else {
            "No"
        }
    }

    pub fn serialize<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(label(*flag))
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Flag(flag) => Ok(flag),
            Raw::Text(text) => match text.trim().to_lowercase().as_str() {
                "yes" | "true" => Ok(true),
                "no" | "false" => Ok(false),
                _ => Err(de::Error::custom(format!(
                    "invalid rare flag '{}', expected Yes or No",
                    text
                ))),
            },
        }
    }
}
