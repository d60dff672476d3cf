//! Log file setup
//!
//! The terminal belongs to the UI, so diagnostics go to a file. If no log
//! file can be opened, logging is disabled instead of writing to the screen.

use crate::config::Config;
use std::{
    fs::{self, File, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE_NAME: &str = "user-details-tui.log";

/// Install the global subscriber. Returns the log path when one was opened.
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (log_file, init_warnings) = open_log_file(Config::log_dir_candidates());

    let Some((log_path, file)) = log_file else {
        tracing_subscriber::registry().with(env_filter).init();
        return None;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();

    tracing::debug!(path = %log_path.display(), "Logging initialized");
    for warning in init_warnings {
        tracing::warn!("{warning}");
    }
    Some(log_path)
}

/// Open the log file in the first usable directory, collecting a warning
/// for each one that failed
pub fn open_log_file(dirs: Vec<PathBuf>) -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for dir in dirs {
        if let Err(e) = fs::create_dir_all(&dir) {
            warnings.push(format!("Failed to create log dir {}: {e}", dir.display()));
            continue;
        }

        let candidate = dir.join(LOG_FILE_NAME);
        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}
