//! Published-spreadsheet access: fetching, row parsing, classification and
//! extraction.

mod classify;
mod client;
mod csv;
mod extract;
mod numeric;
mod testimonials;

pub use classify::{RowKind, StatLabel, classify};
pub use client::{DEFAULT_RESULTS_URL, HttpSheetClient};
pub use csv::{RawRow, parse_rows};
pub use extract::extract_results;
pub use testimonials::parse_testimonials;

use async_trait::async_trait;

/// SheetSource abstracts the transport that delivers published CSV text.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetches the raw CSV body at `url`.
    async fn fetch_csv(&self, url: &str) -> Result<String, SheetError>;
}

/// SheetError represents transport failures while fetching a sheet.
///
/// Parsing never fails, so every variant here is a fetch problem, and every
/// fetch problem is recovered upstream by substituting the fallback dataset.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}
