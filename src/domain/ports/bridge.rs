/// Bridge port — the only path from the dashboard to the backend service.
///
/// The set of operations is closed: callers get these four round trips and
/// nothing else. Implementations own the backend address and the transport;
/// the coordinator above only ever sees this trait object.
use crate::domain::entities::health::HealthStatus;
use crate::domain::entities::insight::{Insight, InsightRequest};
use crate::domain::entities::market_summary::MarketSummary;
use crate::domain::entities::ocr::{OcrResult, OcrUpload};
use crate::domain::error::DomainError;
use crate::domain::values::ticker::Ticker;
use async_trait::async_trait;
use serde::Serialize;

/// The sanctioned backend operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteOperation {
    Health,
    MarketSummary,
    ExtractText,
    GenerateInsight,
}

impl RemoteOperation {
    /// Backend path, relative to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            RemoteOperation::Health => "/health",
            RemoteOperation::MarketSummary => "/market/summary",
            RemoteOperation::ExtractText => "/ocr/extract",
            RemoteOperation::GenerateInsight => "/insights/generate",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RemoteOperation::Health => "health",
            RemoteOperation::MarketSummary => "market_summary",
            RemoteOperation::ExtractText => "extract_text",
            RemoteOperation::GenerateInsight => "generate_insight",
        }
    }
}

impl std::fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One call = one request. No retries, no caching.
#[async_trait]
pub trait Bridge: Send + Sync {
    /// Backend address, for display only.
    fn backend_url(&self) -> &str;

    async fn health(&self) -> Result<HealthStatus, DomainError>;

    async fn market_summary(&self, ticker: &Ticker) -> Result<MarketSummary, DomainError>;

    async fn extract_text(&self, upload: OcrUpload) -> Result<OcrResult, DomainError>;

    async fn generate_insight(&self, request: &InsightRequest) -> Result<Insight, DomainError>;
}
