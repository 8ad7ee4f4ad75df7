//! Text rendering of the dashboard panels.

use crate::application::coordinator::DashboardSnapshot;
use crate::domain::entities::health::HealthStatus;
use crate::domain::entities::insight::Insight;
use crate::domain::entities::market_summary::MarketSummary;
use crate::domain::values::operation_state::UiOperationState;
use chrono::Local;

pub fn render_error(message: &str) -> String {
    format!("error: {message}")
}

/// `1000000` -> `1,000,000`
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two decimals with an explicit `+` on non-negative values.
fn signed(value: f64) -> String {
    // -0.0 would otherwise print as "+-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}")
}

pub fn render_market_summary(summary: &MarketSummary) -> String {
    let volume = match summary.volume {
        Some(v) if v > 0 => format_volume(v),
        _ => "n/a".to_string(),
    };
    [
        format!("{} @ ${:.2}", summary.symbol, summary.price),
        format!(
            "Change: {} ({}%)",
            signed(summary.change),
            signed(summary.change_percent)
        ),
        format!("Range: ${:.2} – ${:.2}", summary.day_low, summary.day_high),
        format!("Volume: {volume}"),
        format!(
            "Last update: {}",
            summary
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
        ),
    ]
    .join("\n")
}

/// Headline and rationale are printed exactly as received.
pub fn render_insight(insight: &Insight) -> String {
    [
        format!("[{}]", insight.sentiment.badge()),
        insight.headline.clone(),
        insight.rationale.clone(),
        format!(
            "Generated: {}",
            insight.timestamp.with_timezone(&Local).format("%H:%M:%S")
        ),
    ]
    .join("\n")
}

pub fn render_status(state: &UiOperationState<HealthStatus>, backend_url: &str) -> String {
    match state {
        UiOperationState::Idle => "Backend status unknown".to_string(),
        UiOperationState::InFlight => "Checking backend…".to_string(),
        UiOperationState::Succeeded(_) => format!("Backend online • {backend_url}"),
        UiOperationState::Failed(message) => format!("Backend offline: {message}"),
    }
}

pub fn render_market_panel(state: &UiOperationState<MarketSummary>) -> String {
    match state {
        UiOperationState::Idle => "No market data yet.".to_string(),
        UiOperationState::InFlight => "Loading latest market data…".to_string(),
        UiOperationState::Succeeded(summary) => render_market_summary(summary),
        UiOperationState::Failed(message) => render_error(message),
    }
}

pub fn render_ocr_panel(snapshot: &DashboardSnapshot) -> String {
    match &snapshot.ocr {
        UiOperationState::Failed(message) => render_error(message),
        UiOperationState::Idle => "No document uploaded.".to_string(),
        _ => snapshot.ocr_buffer.clone(),
    }
}

pub fn render_insight_panel(
    state: &UiOperationState<Insight>,
    notice: Option<&str>,
) -> String {
    match state {
        UiOperationState::Idle => notice.unwrap_or("No insight yet.").to_string(),
        UiOperationState::InFlight => "Generating insight…".to_string(),
        UiOperationState::Succeeded(insight) => render_insight(insight),
        UiOperationState::Failed(message) => render_error(message),
    }
}

pub fn render_dashboard(snapshot: &DashboardSnapshot) -> String {
    let sections = [
        (
            "Status",
            render_status(&snapshot.health, &snapshot.backend_url),
        ),
        ("Market", render_market_panel(&snapshot.market)),
        ("OCR", render_ocr_panel(snapshot)),
        (
            "Insight",
            render_insight_panel(&snapshot.insight, snapshot.insight_notice.as_deref()),
        ),
    ];
    sections
        .iter()
        .map(|(title, body)| format!("== {title} ==\n{body}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
