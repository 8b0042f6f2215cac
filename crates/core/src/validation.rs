//! Payload validation for character writes.
//!
//! Create and update both require the full set of non-id fields; there is no
//! partial update. Validation collects every field error instead of stopping
//! at the first, and the resulting [`ValidationErrors`] serializes as a
//! `field -> [messages]` map, which is exactly the 422 response body.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::types::DbId;

/// Key used for errors about the body as a whole (e.g. not a JSON object).
const SCHEMA_KEY: &str = "_schema";

const MISSING_FIELD: &str = "Missing data for required field.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_AN_INTEGER: &str = "Not a valid integer.";
const EMPTY_STRING: &str = "Field may not be empty.";

/// Field-keyed validation messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any message was recorded for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A validated write payload: every non-id field of a character.
///
/// Constructed only through [`CharacterPayload::from_json`], so holding one
/// means the body passed schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterPayload {
    pub name: String,
    pub rarity: DbId,
    pub element: String,
    pub weapon: String,
}

impl CharacterPayload {
    /// Validate a JSON body into a payload, or report every field error.
    ///
    /// Rules:
    /// - the body must be a JSON object (else a `_schema` error);
    /// - `name`, `element`, `weapon` must be present JSON strings, and
    ///   `name` must be non-empty;
    /// - `rarity` must be present and integer-coercible: a JSON integer, or
    ///   a string that parses as one (numeric strings coerce, floats do not).
    ///
    /// Unknown fields (such as an `id` echoed back by a client) are ignored;
    /// the path segment is the only id source.
    pub fn from_json(body: &serde_json::Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let Some(object) = body.as_object() else {
            errors.push(SCHEMA_KEY, "Invalid input type.");
            return Err(errors);
        };

        let name = require_string(object, "name", &mut errors);
        if let Some(ref value) = name {
            if value.is_empty() {
                errors.push("name", EMPTY_STRING);
            }
        }
        let rarity = require_integer(object, "rarity", &mut errors);
        let element = require_string(object, "element", &mut errors);
        let weapon = require_string(object, "weapon", &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        // All four lookups succeeded if no errors were recorded.
        Ok(CharacterPayload {
            name: name.unwrap_or_default(),
            rarity: rarity.unwrap_or_default(),
            element: element.unwrap_or_default(),
            weapon: weapon.unwrap_or_default(),
        })
    }
}

fn require_string(
    object: &serde_json::Map<String, serde_json::Value>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match object.get(field) {
        None => {
            errors.push(field, MISSING_FIELD);
            None
        }
        Some(serde_json::Value::String(value)) => Some(value.clone()),
        Some(_) => {
            errors.push(field, NOT_A_STRING);
            None
        }
    }
}

fn require_integer(
    object: &serde_json::Map<String, serde_json::Value>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<DbId> {
    match object.get(field) {
        None => {
            errors.push(field, MISSING_FIELD);
            None
        }
        Some(serde_json::Value::Number(value)) => match value.as_i64() {
            Some(parsed) => Some(parsed),
            // A float or an out-of-range number is not integer-coercible.
            None => {
                errors.push(field, NOT_AN_INTEGER);
                None
            }
        },
        Some(serde_json::Value::String(value)) => match value.trim().parse::<DbId>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                errors.push(field, NOT_AN_INTEGER);
                None
            }
        },
        Some(_) => {
            errors.push(field, NOT_AN_INTEGER);
            None
        }
    }
}
