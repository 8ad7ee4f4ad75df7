//! Shared test helpers: a scriptable in-memory bridge and sample payloads.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use investlens::domain::entities::health::HealthStatus;
use investlens::domain::entities::insight::{Insight, InsightRequest};
use investlens::domain::entities::market_summary::MarketSummary;
use investlens::domain::entities::ocr::{OcrResult, OcrUpload};
use investlens::domain::error::DomainError;
use investlens::domain::ports::bridge::{Bridge, RemoteOperation};
use investlens::domain::values::sentiment::Sentiment;
use investlens::domain::values::ticker::Ticker;
use investlens::InvestLens;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub const STUB_URL: &str = "http://stub.local";

/// Bridge that answers from canned results, counts calls and can hold a call
/// open until its gate is released.
pub struct StubBridge {
    health: Result<HealthStatus, String>,
    market: Result<MarketSummary, String>,
    ocr: Mutex<Vec<Result<OcrResult, String>>>,
    insight: Result<Insight, String>,
    gates: Mutex<HashMap<RemoteOperation, Arc<Notify>>>,
    calls: Mutex<Vec<RemoteOperation>>,
    pub insight_requests: Mutex<Vec<InsightRequest>>,
    pub market_tickers: Mutex<Vec<String>>,
}

impl StubBridge {
    pub fn new() -> Self {
        Self {
            health: Ok(HealthStatus {
                status: "ok".into(),
                message: "InvestLens backend ready".into(),
            }),
            market: Ok(sample_summary("AAPL")),
            ocr: Mutex::new(vec![]),
            insight: Ok(sample_insight("positive")),
            gates: Mutex::new(HashMap::new()),
            calls: Mutex::new(vec![]),
            insight_requests: Mutex::new(vec![]),
            market_tickers: Mutex::new(vec![]),
        }
    }

    pub fn failing_health(mut self, message: &str) -> Self {
        self.health = Err(message.into());
        self
    }

    pub fn failing_market(mut self, message: &str) -> Self {
        self.market = Err(message.into());
        self
    }

    pub fn failing_insight(mut self, message: &str) -> Self {
        self.insight = Err(message.into());
        self
    }

    /// Queue OCR replies; each extraction consumes the first one left.
    pub fn with_ocr(self, replies: Vec<Result<OcrResult, String>>) -> Self {
        *self.ocr.lock().unwrap() = replies;
        self
    }

    /// Hold every call to `op` until the returned gate is notified once per call.
    pub fn gate(&self, op: RemoteOperation) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates.lock().unwrap().insert(op, notify.clone());
        notify
    }

    pub fn calls(&self, op: RemoteOperation) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }

    pub fn call_log(&self) -> Vec<RemoteOperation> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, op: RemoteOperation) {
        self.calls.lock().unwrap().push(op);
        let gate = self.gates.lock().unwrap().get(&op).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

fn reply<T: Clone>(canned: &Result<T, String>) -> Result<T, DomainError> {
    canned.clone().map_err(DomainError::Transport)
}

#[async_trait]
impl Bridge for StubBridge {
    fn backend_url(&self) -> &str {
        STUB_URL
    }

    async fn health(&self) -> Result<HealthStatus, DomainError> {
        self.enter(RemoteOperation::Health).await;
        reply(&self.health)
    }

    async fn market_summary(&self, ticker: &Ticker) -> Result<MarketSummary, DomainError> {
        self.market_tickers.lock().unwrap().push(ticker.to_string());
        self.enter(RemoteOperation::MarketSummary).await;
        reply(&self.market)
    }

    async fn extract_text(&self, _upload: OcrUpload) -> Result<OcrResult, DomainError> {
        self.enter(RemoteOperation::ExtractText).await;
        let next = {
            let mut queue = self.ocr.lock().unwrap();
            if queue.is_empty() {
                Ok(sample_ocr("Revenue grew 12% year over year", Some(88.5)))
            } else {
                queue.remove(0)
            }
        };
        next.map_err(DomainError::Transport)
    }

    async fn generate_insight(&self, request: &InsightRequest) -> Result<Insight, DomainError> {
        self.insight_requests.lock().unwrap().push(request.clone());
        self.enter(RemoteOperation::GenerateInsight).await;
        reply(&self.insight)
    }
}

pub fn setup(stub: StubBridge) -> (InvestLens, Arc<StubBridge>) {
    let stub = Arc::new(stub);
    (InvestLens::with_bridge(stub.clone()), stub)
}

/// Yield until `cond` holds; gives a concurrently joined future time to reach
/// its await point.
pub async fn wait_until(cond: impl Fn() -> bool) {
    for _ in 0..1000 {
        if cond() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition never became true");
}

pub fn sample_summary(symbol: &str) -> MarketSummary {
    MarketSummary {
        symbol: symbol.to_string(),
        price: 150.25,
        change: -1.10,
        change_percent: -0.72,
        day_low: 148.00,
        day_high: 152.00,
        volume: Some(1_000_000),
        timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 14, 30, 0).unwrap(),
    }
}

pub fn sample_ocr(text: &str, confidence: Option<f64>) -> OcrResult {
    OcrResult {
        text: text.to_string(),
        confidence,
    }
}

pub fn sample_insight(sentiment: &str) -> Insight {
    Insight {
        sentiment: Sentiment::new(sentiment),
        headline: "AAPL down 0.72% at $150.25".into(),
        rationale: "Last price $150.25 (-1.10, -0.72%). Session range $148.00 – $152.00.".into(),
        timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 14, 31, 0).unwrap(),
        ticker: Some("AAPL".into()),
        market: Some(sample_summary("AAPL")),
    }
}

pub fn upload() -> OcrUpload {
    OcrUpload::new("screenshot.png", vec![0x89, b'P', b'N', b'G'])
}
