use crate::application::coordinator::DEFAULT_TICKER;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "investlens", about = "Market summary, OCR and insight dashboard")]
pub struct Cli {
    /// Print the dashboard state as JSON instead of text panels
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check backend status
    Health,
    /// Refresh the market summary for a ticker
    Summary {
        #[arg(default_value = DEFAULT_TICKER)]
        ticker: String,
    },
    /// Extract text from an image or document
    Ocr {
        file: PathBuf,
    },
    /// Generate an insight for a ticker, optionally with OCR context
    Insight {
        ticker: String,
        /// Extract text from this file first and pass it along
        #[arg(long)]
        ocr: Option<PathBuf>,
    },
    /// Run the startup sequence and render every panel
    Dashboard {
        #[arg(long, default_value = DEFAULT_TICKER)]
        ticker: String,
        /// Extract text from this file after startup
        #[arg(long)]
        ocr: Option<PathBuf>,
        /// Generate an insight once everything else has settled
        #[arg(long)]
        insight: bool,
    },
}
