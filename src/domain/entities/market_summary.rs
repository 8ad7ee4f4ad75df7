use crate::domain::values::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest quote snapshot for one symbol.
///
/// `day_low <= day_high` is expected from upstream and not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub day_low: f64,
    pub day_high: f64,
    #[serde(default)]
    pub volume: Option<u64>,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}
