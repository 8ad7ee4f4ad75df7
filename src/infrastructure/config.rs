use crate::domain::error::DomainError;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Environment variables checked for a backend override, in order.
pub const BACKEND_URL_VARS: [&str; 2] = ["BACKEND_URL", "INVESTLENS_BACKEND_URL"];

/// Process-wide backend settings, resolved once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed)
            .map_err(|e| DomainError::Config(format!("Invalid backend URL {trimmed:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::Config(format!(
                "Backend URL must use http or https, got {trimmed:?}"
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = BACKEND_URL_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        Self::new(&url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
