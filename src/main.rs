mod backend;
mod cli_messages;
mod config;
mod consts;
mod events;
mod logging;
mod models;
mod normalize;
mod pipeline;
mod runtime;
mod session;
#[cfg(test)]
mod test_support;
mod ui;

use crate::backend::{Backend, BackendClient};
use crate::config::{Config, get_config_path};
use crate::pipeline::{LoadMode, PipelineOptions};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for an electricity demand forecast backend
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the forecast, weather and holiday data and show the dashboard
    Start {
        /// Backend base URL. Overrides the config file.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Number of forecast periods to request
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
        periods: Option<u32>,

        /// Print render output to stdout instead of drawing the terminal UI
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Load one pipeline after another and stop at the first failure
        #[arg(long, action = clap::ArgAction::SetTrue)]
        sequential: bool,

        /// Draw the forecast lower and upper bounds. Overrides the config file.
        #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
        show_bounds: Option<bool>,

        /// Enable background colors
        #[arg(long, action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Check that the backend is reachable
    Status {
        /// Backend base URL. Overrides the config file.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
    /// Save dashboard defaults to the config file
    Configure {
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
        periods: Option<u32>,

        #[arg(long, value_name = "BOOL")]
        show_bounds: Option<bool>,
    },
    /// Delete the config file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            base_url,
            periods,
            headless,
            sequential,
            show_bounds,
            with_background,
        } => {
            let mut config = Config::load_or_default(&config_path)?;
            if let Some(base_url) = base_url {
                config.base_url = base_url;
            }
            if let Some(periods) = periods {
                config.forecast_periods = periods;
            }
            if let Some(show_bounds) = show_bounds {
                config.show_forecast_bounds = show_bounds;
            }
            let mode = if sequential {
                LoadMode::Sequential
            } else {
                LoadMode::Isolated
            };

            let options = PipelineOptions::from_config(&config, mode);
            let session = setup_session(&config.base_url, options)?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Status { base_url } => {
            let config = Config::load_or_default(&config_path)?;
            let base_url = base_url.unwrap_or(config.base_url);
            let client = BackendClient::new(base_url.as_str())?;
            match client.status().await {
                Ok(message) => {
                    crate::print_cmd_success!("Backend reachable", "{} says: {}", base_url, message);
                    Ok(())
                }
                Err(e) => {
                    crate::print_cmd_error!("Backend unreachable", &e.to_string());
                    Err(e.into())
                }
            }
        }
        Command::Configure {
            base_url,
            periods,
            show_bounds,
        } => {
            let mut config = Config::load_or_default(&config_path)?;
            if let Some(base_url) = base_url {
                url::Url::parse(&base_url)
                    .map_err(|e| format!("Invalid base URL {}: {}", base_url, e))?;
                config.base_url = base_url;
            }
            if let Some(periods) = periods {
                config.forecast_periods = periods;
            }
            if let Some(show_bounds) = show_bounds {
                config.show_forecast_bounds = show_bounds;
            }
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            crate::print_cmd_success!(
                "Configuration saved",
                "{} (base URL {}, {} periods)",
                config_path.display(),
                config.base_url,
                config.forecast_periods
            );
            Ok(())
        }
        Command::Reset => {
            crate::print_cmd_info!("Clearing dashboard configuration file...", "");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
