use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Input rejected before any store interaction. Carries the offending
    /// field so the caller can point at the right form control.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("order not found")]
    NotFound,
    #[error("store error: {0}")]
    Store(String),
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::Validation {
            field,
            message: message.into(),
        }
    }
}
