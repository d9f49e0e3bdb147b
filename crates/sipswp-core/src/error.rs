use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PlannerError {
    fn from(e: serde_json::Error) -> Self {
        PlannerError::SerializationError(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for PlannerError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        PlannerError::SerializationError(e.to_string())
    }
}
