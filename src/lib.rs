pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::coordinator::{Coordinator, DashboardSnapshot, StartupReport};
use crate::application::operation_slot::TriggerOutcome;
use crate::domain::entities::ocr::OcrUpload;
use crate::domain::error::DomainError;
use crate::domain::ports::bridge::Bridge;
use crate::infrastructure::config::BackendConfig;
use crate::infrastructure::http::HttpBridge;
use std::sync::Arc;

/// Dashboard facade. Holds the coordinator only; the network lives behind the
/// bridge the coordinator was built with.
pub struct InvestLens {
    coordinator: Coordinator,
}

impl InvestLens {
    /// Resolve the backend address from the environment and connect over HTTP.
    pub fn new() -> Result<Self, DomainError> {
        let config = BackendConfig::from_env()?;
        Ok(Self::with_config(&config))
    }

    pub fn with_config(config: &BackendConfig) -> Self {
        Self::with_bridge(Arc::new(HttpBridge::new(config)))
    }

    pub fn with_bridge(bridge: Arc<dyn Bridge>) -> Self {
        Self {
            coordinator: Coordinator::new(bridge),
        }
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    // Delegating methods
    pub async fn startup(&self, ticker: &str) -> StartupReport {
        self.coordinator.startup(ticker).await
    }

    pub async fn check_health(&self) -> TriggerOutcome {
        self.coordinator.check_health().await
    }

    pub async fn refresh_market_summary(&self, ticker: &str) -> TriggerOutcome {
        self.coordinator.refresh_market_summary(ticker).await
    }

    pub async fn extract_text(&self, upload: OcrUpload) -> TriggerOutcome {
        self.coordinator.extract_text(upload).await
    }

    pub async fn generate_insight(&self, ticker: &str) -> TriggerOutcome {
        self.coordinator.generate_insight(ticker).await
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.coordinator.snapshot()
    }
}
