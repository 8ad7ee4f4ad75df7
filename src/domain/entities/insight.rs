use crate::domain::entities::market_summary::MarketSummary;
use crate::domain::values::sentiment::Sentiment;
use crate::domain::values::ticker::Ticker;
use crate::domain::values::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /insights/generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightRequest {
    pub ticker: Ticker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub sentiment: Sentiment,
    pub headline: String,
    pub rationale: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub ticker: Option<String>,
    /// Market snapshot the insight was computed from.
    #[serde(default)]
    pub market: Option<MarketSummary>,
}
