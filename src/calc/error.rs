use thiserror::Error;

/// Errors raised while turning user input into calculator inputs
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid input for {field}: {reason} (got {value:?})")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl CalcError {
    pub(crate) fn invalid(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
