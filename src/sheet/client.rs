//! HTTP client for published spreadsheet exports.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::{SheetError, SheetSource};

/// HTTP request timeout used when the configuration does not set one.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Published CSV export of the results sheet.
pub const DEFAULT_RESULTS_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRvpM86U7-XEQwXg2kRotwkID8Sa-jW85Tmc2hWRWVpOhHfqwd5kJlmpeDT_i_HNZPlDAMngNUvhEA/pub?gid=869956905&single=true&output=csv";

/// HttpSheetClient fetches published CSV text over HTTPS.
///
/// No authentication and no retry: published sheets are world-readable, and
/// every failure is recovered upstream by the fallback dataset.
pub struct HttpSheetClient {
    http: HttpClient,
}

impl HttpSheetClient {
    /// Creates a client with the given request timeout; zero falls back to
    /// the default.
    pub fn new(timeout: Duration) -> Self {
        let timeout = if timeout.is_zero() {
            REQUEST_TIMEOUT
        } else {
            timeout
        };
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build http client");

        Self { http }
    }
}

#[async_trait]
impl SheetSource for HttpSheetClient {
    async fn fetch_csv(&self, url: &str) -> Result<String, SheetError> {
        debug!(url = %url, "Fetching published sheet");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::Status(status));
        }

        Ok(response.text().await?)
    }
}
