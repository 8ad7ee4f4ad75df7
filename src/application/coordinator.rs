use crate::application::operation_slot::{lock, OperationSlot, Ticket, TriggerOutcome};
use crate::domain::entities::health::HealthStatus;
use crate::domain::entities::insight::{Insight, InsightRequest};
use crate::domain::entities::market_summary::MarketSummary;
use crate::domain::entities::ocr::{OcrResult, OcrUpload};
use crate::domain::error::DomainError;
use crate::domain::ports::bridge::{Bridge, RemoteOperation};
use crate::domain::values::operation_state::UiOperationState;
use crate::domain::values::ticker::Ticker;
use log::{debug, info, warn};
use serde::Serialize;
use std::sync::{Arc, Mutex};

pub const DEFAULT_TICKER: &str = "AAPL";

pub const MISSING_TICKER_FOR_SUMMARY: &str = "Enter a ticker symbol to fetch data.";
pub const MISSING_TICKER_FOR_INSIGHT: &str = "Enter a ticker first.";
pub const MISSING_UPLOAD: &str = "Select a file to extract text from.";

/// Shown in the OCR buffer while an extraction is pending.
pub const OCR_PLACEHOLDER: &str = "Extracting text…";
/// Shown in the insight panel after a new upload, until the next insight.
pub const INSIGHT_PENDING_OCR: &str = "Using latest OCR result for insights once generated.";

/// Everything the dashboard displays, captured at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub backend_url: String,
    pub health: UiOperationState<HealthStatus>,
    pub market: UiOperationState<MarketSummary>,
    pub ocr: UiOperationState<OcrResult>,
    pub ocr_buffer: String,
    pub insight: UiOperationState<Insight>,
    pub insight_notice: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StartupReport {
    pub health: TriggerOutcome,
    pub market: TriggerOutcome,
}

/// Drives the four dashboard operations through the bridge.
///
/// Each operation has its own slot; a trigger arriving while that slot is in
/// flight is ignored without touching the bridge. Failures stay in the slot of
/// the operation that produced them.
pub struct Coordinator {
    bridge: Arc<dyn Bridge>,
    health: OperationSlot<HealthStatus>,
    market: OperationSlot<MarketSummary>,
    ocr: OperationSlot<OcrResult>,
    insight: OperationSlot<Insight>,
    /// Text of the latest successful extraction, fed to insight generation.
    ocr_context: Mutex<Option<String>>,
    insight_notice: Mutex<Option<String>>,
}

impl Coordinator {
    pub fn new(bridge: Arc<dyn Bridge>) -> Self {
        Self {
            bridge,
            health: OperationSlot::new(),
            market: OperationSlot::new(),
            ocr: OperationSlot::new(),
            insight: OperationSlot::new(),
            ocr_context: Mutex::new(None),
            insight_notice: Mutex::new(None),
        }
    }

    /// Initial load: health, then the market summary for `ticker`, one after the
    /// other. The summary is fetched whatever the health check says.
    pub async fn startup(&self, ticker: &str) -> StartupReport {
        let health = self.check_health().await;
        let market = self.refresh_market_summary(ticker).await;
        StartupReport { health, market }
    }

    pub async fn check_health(&self) -> TriggerOutcome {
        let op = RemoteOperation::Health;
        let Some(ticket) = self.health.try_begin() else {
            return ignored(op);
        };
        let result = self.bridge.health().await;
        settle(op, &self.health, ticket, result)
    }

    pub async fn refresh_market_summary(&self, input: &str) -> TriggerOutcome {
        let op = RemoteOperation::MarketSummary;
        let Some(ticker) = Ticker::parse(input) else {
            return reject(op, &self.market, MISSING_TICKER_FOR_SUMMARY);
        };
        let Some(ticket) = self.market.try_begin() else {
            return ignored(op);
        };
        let result = self.bridge.market_summary(&ticker).await;
        settle(op, &self.market, ticket, result)
    }

    pub async fn extract_text(&self, upload: OcrUpload) -> TriggerOutcome {
        let op = RemoteOperation::ExtractText;
        if upload.is_empty() {
            let outcome = reject(op, &self.ocr, MISSING_UPLOAD);
            if outcome == TriggerOutcome::Rejected {
                // The buffer no longer shows the old text, so it must not be sent either.
                *lock(&self.ocr_context) = None;
            }
            return outcome;
        }
        let Some(ticket) = self.ocr.try_begin() else {
            return ignored(op);
        };

        // The previous text is no longer current once a new file is picked.
        *lock(&self.ocr_context) = None;
        *lock(&self.insight_notice) = Some(INSIGHT_PENDING_OCR.to_string());
        self.insight.clear();

        let result = self.bridge.extract_text(upload).await;
        let context = result.as_ref().ok().and_then(OcrResult::context_text);
        let outcome = settle(op, &self.ocr, ticket, result);
        if outcome == TriggerOutcome::Settled {
            *lock(&self.ocr_context) = context;
        }
        outcome
    }

    pub async fn generate_insight(&self, input: &str) -> TriggerOutcome {
        let op = RemoteOperation::GenerateInsight;
        let Some(ticker) = Ticker::parse(input) else {
            return reject(op, &self.insight, MISSING_TICKER_FOR_INSIGHT);
        };
        let Some(ticket) = self.insight.try_begin() else {
            return ignored(op);
        };

        let request = InsightRequest {
            ticker,
            ocr_text: lock(&self.ocr_context).clone(),
        };
        lock(&self.insight_notice).take();

        let result = self.bridge.generate_insight(&request).await;
        settle(op, &self.insight, ticket, result)
    }

    pub fn health_state(&self) -> UiOperationState<HealthStatus> {
        self.health.state()
    }

    pub fn market_state(&self) -> UiOperationState<MarketSummary> {
        self.market.state()
    }

    pub fn ocr_state(&self) -> UiOperationState<OcrResult> {
        self.ocr.state()
    }

    pub fn insight_state(&self) -> UiOperationState<Insight> {
        self.insight.state()
    }

    /// Contents of the OCR text area.
    pub fn ocr_buffer(&self) -> String {
        match self.ocr.state() {
            UiOperationState::InFlight => OCR_PLACEHOLDER.to_string(),
            UiOperationState::Succeeded(result) => match result.confidence {
                Some(confidence) => format!("{}\n\nConfidence: {confidence}%", result.text),
                None => result.text,
            },
            UiOperationState::Idle | UiOperationState::Failed(_) => String::new(),
        }
    }

    pub fn insight_notice(&self) -> Option<String> {
        lock(&self.insight_notice).clone()
    }

    /// Whether the control that triggers `op` should accept input.
    pub fn is_enabled(&self, op: RemoteOperation) -> bool {
        let in_flight = match op {
            RemoteOperation::Health => self.health.is_in_flight(),
            RemoteOperation::MarketSummary => self.market.is_in_flight(),
            RemoteOperation::ExtractText => self.ocr.is_in_flight(),
            RemoteOperation::GenerateInsight => self.insight.is_in_flight(),
        };
        !in_flight
    }

    pub fn backend_url(&self) -> &str {
        self.bridge.backend_url()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            backend_url: self.backend_url().to_string(),
            health: self.health_state(),
            market: self.market_state(),
            ocr: self.ocr_state(),
            ocr_buffer: self.ocr_buffer(),
            insight: self.insight_state(),
            insight_notice: self.insight_notice(),
        }
    }
}

fn ignored(op: RemoteOperation) -> TriggerOutcome {
    debug!("{op}: already in flight, trigger ignored");
    TriggerOutcome::Ignored
}

fn reject<T: Clone>(op: RemoteOperation, slot: &OperationSlot<T>, message: &str) -> TriggerOutcome {
    if !slot.reject(message) {
        return ignored(op);
    }
    info!("{op}: rejected before dispatch: {message}");
    TriggerOutcome::Rejected
}

fn settle<T: Clone>(
    op: RemoteOperation,
    slot: &OperationSlot<T>,
    ticket: Ticket,
    result: Result<T, DomainError>,
) -> TriggerOutcome {
    match &result {
        Ok(_) => info!("{op}: succeeded"),
        Err(e) => warn!("{op}: failed: {e}"),
    }
    if slot.settle(ticket, result) {
        TriggerOutcome::Settled
    } else {
        debug!("{op}: result superseded by a newer dispatch");
        TriggerOutcome::Superseded
    }
}
