//! Shared configuration loader for the scopetok tools.
//!
//! `defaults/scopetok.default.toml` is embedded into every binary so that the documented
//! defaults and runtime behavior stay in sync. Applications layer user files and flag
//! overrides on top via [`Loader`] before deserializing into [`ScopetokConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use log::{LevelFilter, ParseLevelError};
use scopetok_parser::golang::lexing::LexerOptions;
use scopetok_parser::golang::token::RenderMode;
use scopetok_parser::Granularity;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/scopetok.default.toml");

/// Location of the per-user configuration file, relative to the home directory.
pub const USER_CONFIG_PATH: &str = ".config/scopetok/config.toml";

/// The per-user configuration file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(USER_CONFIG_PATH))
}

/// Top-level configuration consumed by the scopetok binaries.
#[derive(Debug, Clone, Deserialize)]
pub struct ScopetokConfig {
    pub lexer: LexerOptions,
    pub scope: ScopeConfig,
    pub output: OutputConfig,
    pub suggester: SuggesterConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScopeConfig {
    pub granularity: Granularity,
}

/// How token windows are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub mode: RenderMode,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `[a, b, c]`
    Text,
    /// A JSON array of the same items.
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggesterConfig {
    pub static_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// A `log` level name, matched case-insensitively.
    pub level: String,
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ParseLevelError> {
        self.level.parse()
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer the per-user configuration file when there is one.
    pub fn with_user_file(self) -> Self {
        match user_config_path() {
            Some(path) => self.with_optional_file(path),
            None => self,
        }
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, such as a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ScopetokConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
