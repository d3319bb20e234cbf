//! Published sheet configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;

/// Published sheet endpoints and fetch behavior.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SheetConfig {
    /// CSV export URL of the results sheet. The published default is used
    /// when absent.
    pub results_url: Option<String>,
    /// CSV export URL of the testimonials sheet. Testimonials are skipped
    /// when absent.
    pub testimonials_url: Option<String>,
    /// HTTP request timeout; zero means the client default.
    #[serde(default, with = "duration")]
    pub timeout: Duration,
}
