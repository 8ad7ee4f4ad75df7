use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment label attached to an insight.
///
/// The backend currently emits `bullish`, `bearish` or `neutral`, but the set is
/// open: unknown labels are kept verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentiment(String);

impl Sentiment {
    pub fn new(label: impl Into<String>) -> Self {
        Sentiment(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased token used as the insight badge.
    pub fn badge(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
