//! Free-text numeric input.
//!
//! Users type weights like `72,5` as often as `72.5`; both are accepted.

use std::fmt;

use crate::error::ImcError;

/// Which measurement a piece of input refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Weight in kilograms
    Weight,
    /// Height in metres
    Height,
}

impl Field {
    /// Lowercase field name as used inside messages
    pub fn name(&self) -> &'static str {
        match self {
            Field::Weight => "peso",
            Field::Height => "altura",
        }
    }

    fn unparsable_message(&self) -> &'static str {
        match self {
            Field::Weight => "Por favor, insira um peso válido (números apenas)",
            Field::Height => "Por favor, insira uma altura válida (números apenas)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a decimal number typed by a user.
///
/// Leading and trailing whitespace is ignored and `,` is read as the decimal
/// separator. Only the parse is checked here; ranges belong to
/// [`Measurement`](crate::Measurement).
///
/// # Examples
/// ```
/// use imc_core::{parse_decimal, Field};
///
/// assert_eq!(parse_decimal(" 72,5 ", Field::Weight).unwrap(), 72.5);
/// assert!(parse_decimal("setenta", Field::Weight).is_err());
/// ```
pub fn parse_decimal(text: &str, field: Field) -> Result<f64, ImcError> {
    let normalised = text.trim().replace(',', ".");
    normalised
        .parse::<f64>()
        .map_err(|_| ImcError::invalid_input(field.unparsable_message()))
}
