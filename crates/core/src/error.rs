use crate::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The referenced record does not exist. `key` is the path segment the
    /// client sent (numeric id or normalized name).
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// More than one record shares the normalized name used for lookup.
    #[error("Ambiguous name: {0} matches more than one record")]
    AmbiguousName(String),

    /// A path segment that must be an integer id was not parseable as one.
    #[error("Malformed key: '{0}' is not a valid integer id")]
    MalformedKey(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found error for the `characters` table, the only entity we have.
    pub fn character_not_found(key: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity: "Character",
            key: key.into(),
        }
    }
}
