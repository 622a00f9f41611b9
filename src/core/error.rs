//! Error conditions raised at the marketplace input boundary.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// A form field failed to parse or is outside its allowed range.
    #[error("Invalid input for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },
}

impl MarketError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        MarketError::InvalidInput {
            field,
            value: value.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            MarketError::InvalidInput { field, .. } => field,
        }
    }
}

pub type Result<T, E = MarketError> = std::result::Result<T, E>;
