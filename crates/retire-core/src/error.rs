use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("degenerate formula: {0}")]
    DegenerateFormula(String),

    #[error("division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl PlannerError {
    /// Shorthand for the common validation failure.
    pub(crate) fn invalid(field: &str, reason: &str) -> Self {
        PlannerError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(e: serde_json::Error) -> Self {
        PlannerError::SerializationError(e.to_string())
    }
}
