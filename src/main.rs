mod config;
mod dashboard;
mod domain;
mod sheet;

use std::env;

use config::Config;
use dashboard::Dashboard;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Unit value used when neither the flag nor the config supplies one.
const DEFAULT_UNIT_VALUE: &str = "10";

fn flag_value(name: &str) -> Option<String> {
    let prefix = format!("--{}=", name);
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix(&prefix).map(str::to_string))
}

fn init_tracing(log_level: Option<&str>) {
    let default = match log_level {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default.to_string()));

    fmt().with_env_filter(filter).with_target(false).init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config_path = flag_value("config").unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return;
        }
    };

    init_tracing(config.app.log_level.as_deref());

    info!(config = %config_path, name = %config.app.name, "Dashboard backend starting");

    let unit_input = flag_value("unit-value")
        .or_else(|| {
            config
                .calculator
                .as_ref()
                .and_then(|c| c.default_unit_value.map(|v| v.to_string()))
        })
        .unwrap_or_else(|| DEFAULT_UNIT_VALUE.to_string());

    let start_month = flag_value("from-month").or_else(|| {
        config
            .calculator
            .as_ref()
            .and_then(|c| c.default_start_month.clone())
    });

    let dashboard = Dashboard::new(config);

    let results = dashboard.results().await;
    let testimonials = dashboard.testimonials().await;

    info!(
        months = results.months.records().len(),
        seasons = results.seasons.len(),
        testimonials = testimonials.len(),
        "Dashboard data loaded"
    );

    let view = dashboard.view(&results, &unit_input, start_month.as_deref());

    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{}", json),
        Err(e) => error!(error = %e, "Failed to serialize dashboard view"),
    }
}
