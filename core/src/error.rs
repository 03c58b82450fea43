//! Error taxonomy for classification requests.
//!
//! Both variants are user-facing: adapters render them at their boundary and
//! never propagate them further.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifyError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// No value was supplied at all.
    #[error("no input provided")]
    MissingInput,

    /// A value was supplied but is not a floating-point number.
    #[error("invalid number")]
    InvalidNumber { input: String },
}

impl ClassifyError {
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }

    /// Machine-readable code for logging
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingInput => "MISSING_INPUT",
            Self::InvalidNumber { .. } => "INVALID_NUMBER",
        }
    }
}
