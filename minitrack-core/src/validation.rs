//! Parse-and-check helpers for unit form input.

use crate::error::ValidationError;

/// Parses the raw miniatures count.
///
/// Surrounding whitespace is ignored. Blank input, non-integers, negative
/// values and values beyond `u32::MAX` are rejected.
pub fn parse_miniatures_number(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingFields(vec!["miniatures number"]));
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotAnInteger(raw.to_string()))?;

    if value < 0 {
        return Err(ValidationError::Negative(value));
    }

    u32::try_from(value).map_err(|_| ValidationError::TooLarge(value))
}

/// Collects the labels of required fields that are blank after trimming.
pub(crate) fn missing_fields<'a>(
    fields: impl IntoIterator<Item = (&'static str, &'a str)>,
) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}
