use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

pub const MAX_SYMBOL_LEN: usize = 7;

/// Ticker symbol: 1 to 7 uppercase ASCII letters.
///
/// Input is taken as typed. Lowercase or padded input is rejected rather than
/// normalized, so a user sees exactly the symbol that will be queried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        if !input.chars().all(|ch| ch.is_ascii_uppercase()) {
            return Err(ValidationError::SymbolInvalidChars {
                value: input.to_owned(),
            });
        }

        // All chars are ASCII here, so byte length equals char count.
        if input.len() > MAX_SYMBOL_LEN {
            return Err(ValidationError::SymbolTooLong {
                len: input.len(),
                max: MAX_SYMBOL_LEN,
            });
        }

        Ok(Self(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
