use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Required input missing or malformed; raised before any network call.
    #[error("{0}")]
    Validation(String),

    /// Network failure or non-2xx response.
    #[error("{0}")]
    Transport(String),

    /// Response body did not match the expected shape.
    #[error("{0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DomainError::Parse(e.to_string())
        } else {
            DomainError::Transport(e.to_string())
        }
    }
}
