use crate::domain::entities::health::HealthStatus;
use crate::domain::entities::insight::{Insight, InsightRequest};
use crate::domain::entities::market_summary::MarketSummary;
use crate::domain::entities::ocr::{OcrResult, OcrUpload};
use crate::domain::error::DomainError;
use crate::domain::ports::bridge::{Bridge, RemoteOperation};
use crate::domain::values::ticker::Ticker;
use crate::infrastructure::config::BackendConfig;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// Bridge over the InvestLens HTTP API.
///
/// No timeout is configured, so a hung backend keeps the call pending for as
/// long as the underlying connection stays open.
pub struct HttpBridge {
    client: Client,
    base_url: String,
}

impl HttpBridge {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url().to_string(),
        }
    }

    fn request(&self, method: Method, op: RemoteOperation) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, op.path()))
            .header(ACCEPT, "application/json")
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        op: RemoteOperation,
        request: RequestBuilder,
    ) -> Result<T, DomainError> {
        debug!("bridge: dispatching {op}");

        let resp = request.send().await.map_err(|e| {
            warn!("bridge: {op} transport failure: {e}");
            DomainError::Transport(format!("Could not reach backend: {e}"))
        })?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| DomainError::Transport(format!("Failed to read {op} response: {e}")))?;

        if !status.is_success() {
            let message = error_message(status, &body);
            warn!("bridge: {op} returned {status}: {message}");
            return Err(DomainError::Transport(message));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!("bridge: malformed {op} response: {e}");
            DomainError::Parse(format!("Malformed {op} response: {e}"))
        })
    }
}

/// Message for a non-2xx reply: FastAPI's `detail` when present, else the raw
/// body, else a status line.
fn error_message(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("Request failed with {}", status.as_u16());
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    trimmed.to_string()
}

fn guess_mime(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl Bridge for HttpBridge {
    fn backend_url(&self) -> &str {
        &self.base_url
    }

    async fn health(&self) -> Result<HealthStatus, DomainError> {
        let op = RemoteOperation::Health;
        self.dispatch(op, self.request(Method::GET, op)).await
    }

    async fn market_summary(&self, ticker: &Ticker) -> Result<MarketSummary, DomainError> {
        let op = RemoteOperation::MarketSummary;
        let request = self
            .request(Method::GET, op)
            .query(&[("ticker", ticker.as_str())]);
        self.dispatch(op, request).await
    }

    async fn extract_text(&self, upload: OcrUpload) -> Result<OcrResult, DomainError> {
        let op = RemoteOperation::ExtractText;
        let mime = guess_mime(&upload.file_name);
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(mime)?;
        let request = self
            .request(Method::POST, op)
            .multipart(Form::new().part("file", part));
        self.dispatch(op, request).await
    }

    async fn generate_insight(&self, request: &InsightRequest) -> Result<Insight, DomainError> {
        let op = RemoteOperation::GenerateInsight;
        self.dispatch(op, self.request(Method::POST, op).json(request))
            .await
    }
}
