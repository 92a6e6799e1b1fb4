//! Unit record manager: upsert, status changes and deletion.

use std::str::FromStr;

use crate::error::{CollectionError, Result, ValidationError};
use crate::models::{Document, Status, Unit, UnitStatus};
use crate::store::{persist, DocumentStore};
use crate::validation::{missing_fields, parse_miniatures_number};

/// Raw unit form input, validated by [`upsert_unit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitForm {
    pub unit_name: String,
    pub miniatures_type: String,
    pub miniatures_number: String,
    pub rare: bool,
    pub note: String,
}

impl UnitForm {
    pub fn new(
        unit_name: impl Into<String>,
        miniatures_type: impl Into<String>,
        miniatures_number: impl Into<String>,
    ) -> Self {
        Self {
            unit_name: unit_name.into(),
            miniatures_type: miniatures_type.into(),
            miniatures_number: miniatures_number.into(),
            ..Self::default()
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

    /// Checks the form and builds the trimmed group name and a fresh unit.
    pub fn validate(&self) -> std::result::Result<(String, Unit), ValidationError> {
        missing_fields([
            ("miniatures type", self.miniatures_type.as_str()),
            ("group name", self.unit_name.as_str()),
            ("miniatures number", self.miniatures_number.as_str()),
        ])?;
        let number = parse_miniatures_number(&self.miniatures_number)?;

        let unit = Unit::new(self.miniatures_type.trim(), number)
            .with_rare(self.rare)
            .with_note(self.note.trim());
        Ok((self.unit_name.trim().to_string(), unit))
    }
}

/// What happens to the status of an existing unit when its form is
/// re-submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusOnUpdate {
    /// Keep the current painting progress.
    #[default]
    Preserve,
    /// Start over at `built` on every re-submit.
    ResetToBuilt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated { previous_status: UnitStatus },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChange {
    Changed { from: UnitStatus, to: Status },
    Unchanged,
}

/// Creates or overwrites a unit group and persists the document.
///
/// The army name is trimmed; upserting into an army that does not exist yet
/// creates it.
pub fn upsert_unit<S: DocumentStore + ?Sized>(
    doc: &mut Document,
    store: &S,
    army_name: &str,
    form: &UnitForm,
    policy: StatusOnUpdate,
) -> Result<UpsertOutcome> {
    let army_name = army_name.trim();
    if army_name.is_empty() {
        return Err(ValidationError::BlankArmyName.into());
    }
    let (unit_name, mut unit) = form.validate()?;

    let previous = doc.clone();
    let army = doc.army_or_insert(army_name);
    let outcome = match army.get(&unit_name) {
        Some(existing) => {
            if policy == StatusOnUpdate::Preserve {
                unit.status = existing.status.clone();
            }
            UpsertOutcome::Updated {
                previous_status: existing.status.clone(),
            }
        }
        None => UpsertOutcome::Created,
    };
    army.insert(unit_name.as_str(), unit);
    persist(store, doc, previous)?;

    tracing::info!("Saved unit '{}' in army '{}'", unit_name, army_name);
    Ok(outcome)
}

/// Sets a unit's painting status, writing only when the value changes.
pub fn update_status<S: DocumentStore + ?Sized>(
    doc: &mut Document,
    store: &S,
    army_name: &str,
    unit_name: &str,
    new_status: &str,
) -> Result<StatusChange> {
    let status = Status::from_str(new_status)
        .map_err(|_| CollectionError::InvalidStatus(new_status.to_string()))?;

    let previous = doc.clone();
    let unit = doc
        .army_mut(army_name)
        .ok_or_else(|| CollectionError::ArmyNotFound(army_name.to_string()))?
        .get_mut(unit_name)
        .ok_or_else(|| CollectionError::unit_not_found(army_name, unit_name))?;

    if unit.status.is(status) {
        tracing::debug!("Status of '{}' already {}", unit_name, status);
        return Ok(StatusChange::Unchanged);
    }

    let from = std::mem::replace(&mut unit.status, UnitStatus::Known(status));
    persist(store, doc, previous)?;

    tracing::info!("Status for '{}' updated to '{}'", unit_name, status);
    Ok(StatusChange::Changed { from, to: status })
}

/// Removes a unit group and persists the document, returning the removed unit.
pub fn delete_unit<S: DocumentStore + ?Sized>(
    doc: &mut Document,
    store: &S,
    army_name: &str,
    unit_name: &str,
) -> Result<Unit> {
    let previous = doc.clone();
    let removed = doc
        .army_mut(army_name)
        .ok_or_else(|| CollectionError::ArmyNotFound(army_name.to_string()))?
        .remove(unit_name)
        .ok_or_else(|| CollectionError::unit_not_found(army_name, unit_name))?;
    persist(store, doc, previous)?;

    tracing::info!("Deleted unit '{}' from army '{}'", unit_name, army_name);
    Ok(removed)
}
