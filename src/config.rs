//! CLI settings
//!
//! Priority: CLI flags > `SQLKIT_*` environment variables > config file >
//! defaults. The first existing file among `/etc/sqlkit/sqlkit.toml`,
//! `<user config dir>/sqlkit/sqlkit.toml` and `./sqlkit.toml` is used.

use crate::executor::OutputFormat;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "SQLKIT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub format: OutputFormat,
    /// Appended to every printed statement
    #[serde(default = "default_terminator")]
    pub terminator: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub history_file: Option<PathBuf>,
}

fn default_terminator() -> String { ";".to_string() }
fn default_log_level() -> String { "warn".to_string() }

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            terminator: default_terminator(),
            log_level: default_log_level(),
            history_file: None,
        }
    }
}

impl Settings {
    /// Candidate config files, in lookup order.
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/sqlkit/sqlkit.toml")];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("sqlkit").join("sqlkit.toml"));
        }
        paths.push(PathBuf::from("./sqlkit.toml"));
        paths
    }

    /// Load from the default locations and the `SQLKIT_*` environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_paths(), ENV_PREFIX)
    }

    /// Load using the first existing file in `paths`, then the environment
    /// variables under `env_prefix`.
    pub fn load_from(paths: &[PathBuf], env_prefix: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = paths.iter().find(|p| p.exists()) {
            tracing::debug!(path = %path.display(), "loading config file");
            builder = builder.add_source(File::from(path.as_path()));
        }

        builder = builder.add_source(Environment::with_prefix(env_prefix).prefix_separator("_"));

        builder.build()?.try_deserialize()
    }

    /// Where the shell keeps its history: the configured file, else
    /// `~/.sqlkit_history`.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".sqlkit_history")))
    }

    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        terminator: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(terminator) = terminator {
            self.terminator = terminator.to_string();
        }
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
        self
    }
}
