pub mod health;
pub mod insight;
pub mod market_summary;
pub mod ocr;
