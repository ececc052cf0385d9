//! Error types for index computation.

use thiserror::Error;

/// Errors raised by the calculator.
///
/// The `Display` output of `InvalidInput` is the bare reason so front ends can
/// show it to the user verbatim.
///
/// # Examples
/// ```
/// use imc_core::ImcError;
///
/// let err = ImcError::invalid_input("Peso deve ser maior que zero");
/// assert_eq!(err.to_string(), "Peso deve ser maior que zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImcError {
    /// Weight or height is unparsable or outside its accepted range.
    #[error("{0}")]
    InvalidInput(String),
}

impl ImcError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// The human-readable reason carried by this error
    pub fn reason(&self) -> &str {
        match self {
            ImcError::InvalidInput(msg) => msg,
        }
    }
}
