// src/config.rs

use color_eyre::eyre::{Result, WrapErr, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

use crate::logging::project_directory;

/// Env var naming the analyzer base URL, read at build time and at runtime.
pub const BASE_URL_ENV: &str = "A11Y_ANALYZER_BASE_URL";

const BUILD_BASE_URL: Option<&str> = option_env!("A11Y_ANALYZER_BASE_URL");
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Optional settings read from `config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    base_url: Option<String>,
    start_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    /// Directory the file browser opens in.
    pub start_dir: PathBuf,
}

impl Config {
    /// Resolves the configuration: build default, then the config file, then the environment.
    pub fn load() -> Result<Self> {
        let file_path = project_directory().map(|dirs| dirs.config_dir().join("config.toml"));
        let env_base_url = std::env::var(BASE_URL_ENV).ok();
        Self::resolve(file_path.as_deref(), env_base_url)
    }

    fn resolve(file_path: Option<&Path>, env_base_url: Option<String>) -> Result<Self> {
        let file_config = match file_path {
            Some(path) if path.exists() => read_file_config(path)?,
            _ => FileConfig::default(),
        };

        let raw_base_url = env_base_url
            .filter(|v| !v.trim().is_empty())
            .or(file_config.base_url)
            .unwrap_or_else(|| BUILD_BASE_URL.unwrap_or(DEFAULT_BASE_URL).to_string());

        let start_dir = match file_config.start_dir {
            Some(dir) => dir,
            None => std::env::current_dir().wrap_err("Could not determine the current directory")?,
        };

        Ok(Self { base_url: parse_base_url(&raw_base_url)?, start_dir })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Could not read config file {}", path.display()))?;
    toml::from_str(&raw).wrap_err_with(|| format!("Invalid config file {}", path.display()))
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).wrap_err_with(|| format!("Invalid analyzer base URL '{}'", raw))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("Analyzer base URL must use http or https, got '{}'", raw);
    }
    Ok(url)
}
