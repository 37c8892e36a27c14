//! tracing subscriber setup
//!
//! The TUI owns stdout, so in that mode every log line goes to a file.

use crate::cli::RunMode;
use crate::error::AppError;
use ragchat_core::AppConfig;
use std::fs::OpenOptions;
use std::sync::{Mutex, Once};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

pub fn init_tracing(mode: RunMode, config: &AppConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    match mode {
        RunMode::Tui => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.log_file)
                .map_err(|source| AppError::LogFile {
                    path: config.log_file.clone(),
                    source,
                })?;
            INIT.call_once(|| {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_level(true)
                    .init();
            });
        }
        RunMode::Line => {
            INIT.call_once(|| {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_level(true)
                    .init();
            });
        }
    }
    Ok(())
}
