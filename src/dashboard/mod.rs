//! Dashboard orchestration: fetch each dataset once, extract over the
//! fallback defaults, and assemble the views presentation surfaces render.

pub mod fallback;
mod view;

pub use view::{CalculatorView, DashboardView, MonthView};

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::{ResultsData, Testimonial, parse_unit_value};
use crate::sheet::{
    DEFAULT_RESULTS_URL, HttpSheetClient, SheetSource, extract_results, parse_rows,
    parse_testimonials,
};

/// Dashboard owns the data-loading path shared by every presentation
/// surface: one fetch per dataset per process, one extraction contract.
pub struct Dashboard {
    cfg: Config,
    source: Arc<dyn SheetSource>,
    /// Results cache slot. Assigned at most once, on the first load; every
    /// later call reuses the stored snapshot. The lock is held across the
    /// fetch so concurrent first loads collapse into a single request.
    results: Mutex<Option<Arc<ResultsData>>>,
    /// Testimonials cache slot, same single-assignment contract.
    testimonials: Mutex<Option<Arc<Vec<Testimonial>>>>,
}

impl Dashboard {
    /// Creates a dashboard backed by the HTTP sheet client.
    pub fn new(cfg: Config) -> Self {
        let source = Arc::new(HttpSheetClient::new(cfg.sheet.timeout));
        Self::with_source(cfg, source)
    }

    /// Creates a dashboard with an explicit source, letting tests stub the
    /// network.
    pub fn with_source(cfg: Config, source: Arc<dyn SheetSource>) -> Self {
        Self {
            cfg,
            source,
            results: Mutex::new(None),
            testimonials: Mutex::new(None),
        }
    }

    /// Returns the results snapshot, fetching it on the first call.
    ///
    /// Never fails: a transport error substitutes the embedded fallback
    /// dataset, and the degraded snapshot is cached like any other.
    pub async fn results(&self) -> Arc<ResultsData> {
        let mut slot = self.results.lock().await;
        if let Some(data) = slot.as_ref() {
            return Arc::clone(data);
        }

        let data = Arc::new(self.load_results().await);
        *slot = Some(Arc::clone(&data));
        data
    }

    /// Returns the testimonial list, fetching it on the first call.
    ///
    /// An unconfigured URL or a transport error yields the empty list.
    pub async fn testimonials(&self) -> Arc<Vec<Testimonial>> {
        let mut slot = self.testimonials.lock().await;
        if let Some(data) = slot.as_ref() {
            return Arc::clone(data);
        }

        let data = Arc::new(self.load_testimonials().await);
        *slot = Some(Arc::clone(&data));
        data
    }

    /// Assembles the serializable view for the given calculator inputs.
    ///
    /// Pure recomputation over the immutable snapshot; called again on every
    /// unit-value or start-month change.
    pub fn view(
        &self,
        data: &ResultsData,
        unit_input: &str,
        start_month: Option<&str>,
    ) -> DashboardView {
        let unit_value = parse_unit_value(unit_input);
        let stat = match start_month {
            Some(month) => data.stats_since(month),
            None => data.all_time.clone(),
        };
        let total_profit = stat.total_profit(unit_value);
        let avg_stake = stat.avg_stake(unit_value);

        DashboardView {
            all_time: data.all_time.clone(),
            seasons: data.seasons.clone(),
            months: data.months.newest_first().map(MonthView::from).collect(),
            calculator: CalculatorView {
                unit_value,
                start_month: start_month.map(str::to_string),
                stat,
                total_profit,
                avg_stake,
            },
        }
    }

    async fn load_results(&self) -> ResultsData {
        let defaults = fallback::results_data();
        let url = self
            .cfg
            .sheet
            .results_url
            .as_deref()
            .unwrap_or(DEFAULT_RESULTS_URL);

        match self.source.fetch_csv(url).await {
            Ok(text) => {
                let rows = parse_rows(&text);
                let data = extract_results(&rows, &defaults);
                info!(
                    rows = rows.len(),
                    months = data.months.records().len(),
                    seasons = data.seasons.len(),
                    "Results sheet loaded"
                );
                data
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch results sheet, using fallback data");
                defaults
            }
        }
    }

    async fn load_testimonials(&self) -> Vec<Testimonial> {
        let Some(url) = self.cfg.sheet.testimonials_url.as_deref() else {
            debug!("No testimonials sheet configured");
            return Vec::new();
        };

        match self.source.fetch_csv(url).await {
            Ok(text) => {
                let testimonials = parse_testimonials(&text);
                info!(count = testimonials.len(), "Testimonials sheet loaded");
                testimonials
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch testimonials sheet");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests;
