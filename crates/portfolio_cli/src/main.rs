//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `portfolio_core` linkage and the configured catalog source.
//! - Print the visible titles under every filter, deterministically.

use portfolio_core::{open_configured_view, CategoryFilter, PortfolioConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("portfolio_core ping={}", portfolio_core::ping());
    println!("portfolio_core version={}", portfolio_core::core_version());

    let config = match PortfolioConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = config.log_dir.as_ref().and_then(|dir| dir.to_str()) {
        if let Err(err) = portfolio_core::init_logging(&config.log_level, dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut view = match open_configured_view(&config.catalog) {
        Ok(view) => view,
        Err(err) => {
            eprintln!("catalog error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for filter in CategoryFilter::ALL_OPTIONS {
        view.set_filter(filter);
        let snapshot = view.snapshot();
        match snapshot.empty_message() {
            Some(message) => println!("[{}] {message}", filter.label()),
            None => {
                let titles = snapshot
                    .cards
                    .iter()
                    .map(|card| card.title.as_str())
                    .collect::<Vec<_>>();
                println!("[{}] {}", filter.label(), titles.join(", "));
            }
        }
    }

    ExitCode::SUCCESS
}
