pub mod cli;
pub mod commands;
pub mod error;
pub mod line;
pub mod logging;
pub mod tui;

pub use cli::{Cli, RunMode};
pub use error::AppError;

use ragchat_core::{ApiClient, AppConfig};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

pub async fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    if let Some(url) = cli.base_url.as_deref() {
        config = config.with_base_url(url)?;
    }
    if let Some(path) = cli.log_file.as_deref() {
        config = config.with_log_file(path);
    }

    logging::init_tracing(cli.mode, &config)?;
    info!("Starting ragchat");
    debug!(
        mode = ?cli.mode,
        config = ?cli.config,
        base_url = config.base_url.as_str(),
        "CLI arguments parsed"
    );

    let backend = Arc::new(ApiClient::new(config.base_url.clone()));

    info!(mode = ?cli.mode, "Running client in selected mode");
    match cli.mode {
        RunMode::Tui => tui::run_tui(backend).await?,
        RunMode::Line => line::run(backend).await?,
    }
    info!("Client execution finished");
    Ok(())
}
