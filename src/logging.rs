// src/logging.rs

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_error::ErrorLayer;
use tracing_subscriber::{self, EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

lazy_static! {
    /// App-specific level override, e.g. `A11Y_RS_ANALYZER_LOGLEVEL=debug`.
    pub static ref LOG_LEVEL_ENV: String = format!("{}_LOGLEVEL", env!("CARGO_CRATE_NAME").to_uppercase());
}

const LOG_FILE_NAME: &str = concat!(env!("CARGO_PKG_NAME"), ".log");
const DEFAULT_DIRECTIVE: &str = concat!(env!("CARGO_CRATE_NAME"), "=info");

/// Platform directories for this client; shared with the config loader.
pub fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "a11y-rs", env!("CARGO_PKG_NAME"))
}

fn log_directory() -> PathBuf {
    project_directory()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(".data"))
}

/// `RUST_LOG` wins over the app-specific variable; both unset means info for this crate only.
fn filter_directive(rust_log: Option<String>, app_level: Option<String>) -> String {
    let set = |d: &String| !d.trim().is_empty();
    rust_log
        .filter(set)
        .or(app_level.filter(set))
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Creates the log file, truncating what an earlier run left behind.
///
/// Each run starts with an empty log, so the file only ever describes the
/// current session and never grows across runs.
fn open_session_log(directory: &Path) -> Result<(File, PathBuf)> {
    std::fs::create_dir_all(directory)?;
    let path = directory.join(LOG_FILE_NAME);
    let file = File::create(&path)?;
    Ok((file, path))
}

/// Routes tracing output to the session log file and returns its path.
///
/// Nothing is written to stdout or stderr: the terminal belongs to the UI.
pub fn initialize_logging() -> Result<PathBuf> {
    let (log_file, log_path) = open_session_log(&log_directory())?;

    let directive = filter_directive(std::env::var("RUST_LOG").ok(), std::env::var(LOG_LEVEL_ENV.as_str()).ok());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_takes_precedence_over_app_level() {
        assert_eq!(filter_directive(Some("warn".into()), Some("debug".into())), "warn");
        assert_eq!(filter_directive(None, Some("debug".into())), "debug");
        assert_eq!(filter_directive(None, None), "a11y_rs_analyzer=info");
        assert_eq!(filter_directive(Some("  ".into()), Some("trace".into())), "trace");
        assert_eq!(filter_directive(Some("  ".into()), None), "a11y_rs_analyzer=info");
    }

    #[test]
    fn level_variable_is_named_after_the_crate() {
        assert_eq!(LOG_LEVEL_ENV.as_str(), "A11Y_RS_ANALYZER_LOGLEVEL");
    }

    #[test]
    fn each_session_starts_with_an_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data");

        let (_, path) = open_session_log(&nested).unwrap();
        std::fs::write(&path, "previous session\n").unwrap();

        let (_, reopened) = open_session_log(&nested).unwrap();

        assert_eq!(reopened, path);
        assert_eq!(reopened.file_name().unwrap(), "a11y-rs-analyzer.log");
        assert!(std::fs::read_to_string(&reopened).unwrap().is_empty());
    }
}
