use thiserror::Error;

/// Errors raised while ingesting an option document.
#[derive(Debug, Error)]
pub enum OptionDataError {
    /// The document was not valid JSON.
    #[error("option document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level value must be an array of options or groups.
    #[error("option document must be an array, found {found}")]
    NotAnArray { found: &'static str },

    /// A grouped document contains an element that is not a usable group.
    #[error("group at index {index} is malformed: {reason}")]
    MalformedGroup { index: usize, reason: &'static str },
}
