//! Tracing subscriber setup.
//!
//! The app runs without a console on Windows, so events go to a log file
//! next to the config. Stderr is used when the file cannot be opened.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::model::constants::LOG_FILE_NAME;

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(
            "lang_indicator=info"
                .parse()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        )
        .from_env_lossy()
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(log_dir: Option<&Path>) {
    let file = log_dir.and_then(|dir| {
        fs::create_dir_all(dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE_NAME))
            .ok()
    });

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());
    let result = match file {
        Some(file) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
