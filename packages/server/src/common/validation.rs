//! Request field validation
//!
//! Collects per-field messages the way form serializers do, so a single 400
//! response can report every bad field at once.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::common::{ApiError, FieldErrors};
use crate::domains::accounts::models::is_valid_phone_number;

pub const FIELD_REQUIRED: &str = "This field is required.";
pub const FIELD_BLANK: &str = "This field may not be blank.";
pub const FIELD_NULL: &str = "This field may not be null.";
pub const NOT_A_STRING: &str = "Not a valid string.";
pub const INVALID_PHONE_NUMBER: &str = "Invalid phone number format.";

/// A request field as sent: `None` when absent, otherwise the raw JSON value
/// (including `null`). Use with `#[serde(default, deserialize_with = "present")]`.
pub type RawField = Option<Value>;

/// Keep an explicit `null` distinct from a missing field
pub fn present<'de, D>(deserializer: D) -> Result<RawField, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Accumulates field errors while extracting validated values
#[derive(Debug, Default)]
pub struct FieldValidator {
    errors: FieldErrors,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Required, non-blank string. Numbers are accepted as their decimal text.
    /// Surrounding whitespace is trimmed.
    pub fn required(&mut self, field: &str, value: RawField) -> Option<String> {
        let value = match value {
            None => {
                self.reject(field, FIELD_REQUIRED);
                return None;
            }
            Some(Value::Null) => {
                self.reject(field, FIELD_NULL);
                return None;
            }
            Some(Value::String(value)) => value,
            Some(Value::Number(number)) => number.to_string(),
            Some(_) => {
                self.reject(field, NOT_A_STRING);
                return None;
            }
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.reject(field, FIELD_BLANK);
            return None;
        }

        Some(trimmed.to_string())
    }

    /// Required string of at most `max_length` characters
    pub fn max_length(&mut self, field: &str, value: RawField, max_length: usize) -> Option<String> {
        let value = self.required(field, value)?;
        if value.chars().count() > max_length {
            self.reject(
                field,
                format!("Ensure this field has no more than {max_length} characters."),
            );
            return None;
        }
        Some(value)
    }

    /// Required phone number matching `^\+?\d{10,15}$`
    pub fn phone_number(&mut self, field: &str, value: RawField) -> Option<String> {
        let value = self.required(field, value)?;
        if !is_valid_phone_number(&value) {
            self.reject(field, INVALID_PHONE_NUMBER);
            return None;
        }
        Some(value)
    }

    /// Return the validated value, or every collected field error
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ApiError> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ApiError::Validation(self.errors)),
        }
    }
}
