use serde::{Deserialize, Serialize};

/// Reply of `GET /health`. Any well-formed 2xx body counts as healthy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}
