use serde::{Deserialize, Serialize};
use std::fmt;

/// A ticker symbol as typed by the user, normalized to trimmed upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(input: &str) -> Option<Self> {
        let symbol = input.trim().to_uppercase();
        if symbol.is_empty() {
            return None;
        }
        Some(Ticker(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
