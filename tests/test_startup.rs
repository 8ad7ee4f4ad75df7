//! Initial load sequencing and per-panel reporting.

mod common;

use common::{setup, StubBridge, STUB_URL};
use investlens::application::operation_slot::TriggerOutcome;
use investlens::cli::render::render_dashboard;
use investlens::domain::ports::bridge::RemoteOperation;

#[tokio::test]
async fn test_startup_runs_health_then_market() {
    let (lens, stub) = setup(StubBridge::new());

    let report = lens.startup("aapl").await;

    assert_eq!(report.health, TriggerOutcome::Settled);
    assert_eq!(report.market, TriggerOutcome::Settled);
    assert_eq!(
        stub.call_log(),
        vec![RemoteOperation::Health, RemoteOperation::MarketSummary]
    );
}

#[tokio::test]
async fn test_health_failure_still_loads_market() {
    let (lens, stub) = setup(StubBridge::new().failing_health("Could not reach backend: connection refused"));

    lens.startup("AAPL").await;

    assert_eq!(stub.calls(RemoteOperation::MarketSummary), 1);
    let snapshot = lens.snapshot();
    assert_eq!(
        snapshot.health.error(),
        Some("Could not reach backend: connection refused")
    );
    assert!(snapshot.market.payload().is_some());

    let text = render_dashboard(&snapshot);
    let (status, rest) = text.split_once("== Market ==").unwrap();
    assert!(status.contains("Backend offline: Could not reach backend: connection refused"));
    assert!(!status.contains("150.25"));
    assert!(rest.contains("AAPL @ $150.25"));
    assert!(!rest.contains("Backend offline"));
}

#[tokio::test]
async fn test_market_failure_reported_apart_from_health() {
    let (lens, _stub) = setup(StubBridge::new().failing_market("Ticker not found"));

    lens.startup("NOPE").await;

    let snapshot = lens.snapshot();
    assert!(snapshot.health.payload().is_some());
    assert_eq!(snapshot.market.error(), Some("Ticker not found"));

    let text = render_dashboard(&snapshot);
    assert!(text.contains(&format!("Backend online • {STUB_URL}")));
    assert!(text.contains("== Market ==\nerror: Ticker not found"));
}

#[tokio::test]
async fn test_startup_with_blank_default_ticker() {
    let (lens, stub) = setup(StubBridge::new());

    let report = lens.startup(" ").await;

    assert_eq!(report.health, TriggerOutcome::Settled);
    assert_eq!(report.market, TriggerOutcome::Rejected);
    assert_eq!(stub.call_log(), vec![RemoteOperation::Health]);
}

#[tokio::test]
async fn test_fresh_dashboard_renders_idle_panels() {
    let (lens, _stub) = setup(StubBridge::new());
    let text = render_dashboard(&lens.snapshot());
    assert!(text.contains("Backend status unknown"));
    assert!(text.contains("No market data yet."));
    assert!(text.contains("No document uploaded."));
    assert!(text.contains("No insight yet."));
}
