use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrepError {
    #[error("Invalid input: {field} {constraint}")]
    InvalidInput { field: String, constraint: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No saved stage prep plan found")]
    SnapshotNotFound,

    #[error("Unknown meal slot: {0}")]
    UnknownSlot(String),
}

impl PrepError {
    /// Shorthand for an `InvalidInput` naming the offending field.
    pub fn invalid(field: &str, constraint: impl Into<String>) -> Self {
        PrepError::InvalidInput {
            field: field.to_string(),
            constraint: constraint.into(),
        }
    }

    /// Field name carried by an `InvalidInput`, if this is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            PrepError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;
