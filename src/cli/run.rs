use crate::cli::commands::Commands;
use crate::cli::render;
use crate::domain::entities::ocr::OcrUpload;
use crate::domain::values::operation_state::UiOperationState;
use crate::InvestLens;
use std::path::Path;

/// Runs one command and prints the result. Returns whether every operation the
/// command asked for ended without failure; `main` turns `false` into exit
/// status 1.
pub async fn run_command(
    lens: &InvestLens,
    cmd: Commands,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let coordinator = lens.coordinator();
    let ok = match cmd {
        Commands::Health => {
            lens.check_health().await;
            let snapshot = lens.snapshot();
            print_panel(json, &snapshot.health, || {
                render::render_status(&snapshot.health, &snapshot.backend_url)
            })?;
            !snapshot.health.is_failed()
        }
        Commands::Summary { ticker } => {
            lens.refresh_market_summary(&ticker).await;
            let snapshot = lens.snapshot();
            print_panel(json, &snapshot.market, || {
                render::render_market_panel(&snapshot.market)
            })?;
            !snapshot.market.is_failed()
        }
        Commands::Ocr { file } => {
            lens.extract_text(read_upload(&file).await?).await;
            let snapshot = lens.snapshot();
            print_panel(json, &snapshot.ocr, || render::render_ocr_panel(&snapshot))?;
            !snapshot.ocr.is_failed()
        }
        Commands::Insight { ticker, ocr } => {
            if let Some(file) = ocr {
                lens.extract_text(read_upload(&file).await?).await;
                if let Some(message) = coordinator.ocr_state().error() {
                    eprintln!("{}", render::render_error(message));
                }
            }
            lens.generate_insight(&ticker).await;
            let snapshot = lens.snapshot();
            print_panel(json, &snapshot.insight, || {
                render::render_insight_panel(&snapshot.insight, snapshot.insight_notice.as_deref())
            })?;
            !snapshot.insight.is_failed()
        }
        Commands::Dashboard {
            ticker,
            ocr,
            insight,
        } => {
            lens.startup(&ticker).await;
            if let Some(file) = ocr {
                lens.extract_text(read_upload(&file).await?).await;
            }
            if insight {
                lens.generate_insight(&ticker).await;
            }
            let snapshot = lens.snapshot();
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("{}", render::render_dashboard(&snapshot));
            }
            !(snapshot.health.is_failed()
                || snapshot.market.is_failed()
                || snapshot.ocr.is_failed()
                || snapshot.insight.is_failed())
        }
    };
    Ok(ok)
}

fn print_panel<T, F>(json: bool, state: &UiOperationState<T>, text: F) -> Result<(), serde_json::Error>
where
    T: serde::Serialize,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        match state {
            UiOperationState::Failed(_) => eprintln!("{}", text()),
            _ => println!("{}", text()),
        }
    }
    Ok(())
}

pub async fn read_upload(path: &Path) -> Result<OcrUpload, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Could not read {}: {e}", path.display()))?;
    Ok(OcrUpload::new(upload_name(path), bytes))
}

/// File name sent with the multipart upload; `upload` when the path has none.
pub fn upload_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string())
}
