//! Configuration for student-record
//!
//! Centralized configuration with sensible defaults.

use tracing_subscriber::EnvFilter;

use crate::error::{RecordError, Result};

/// Main configuration for a run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Input Configuration
    // -------------------------------------------------------------------------
    /// How malformed or missing input is treated
    pub input_mode: InputMode,

    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// Default filter directive, used when `RUST_LOG` is unset
    pub log_filter: String,
}

/// Input handling strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Failed fields keep their defaults and the run continues
    #[default]
    Permissive,

    /// The first failed field aborts the read with an error
    Strict,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Permissive,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the log filter is a usable directive
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(RecordError::Config("log filter is empty".to_string()));
        }
        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            RecordError::Config(format!("invalid log filter '{}': {}", self.log_filter, e))
        })?;
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the input mode
    pub fn input_mode(mut self, mode: InputMode) -> Self {
        self.config.input_mode = mode;
        self
    }

    /// Shorthand for `input_mode(InputMode::Strict)` when `strict` is true
    pub fn strict(self, strict: bool) -> Self {
        if strict {
            self.input_mode(InputMode::Strict)
        } else {
            self.input_mode(InputMode::Permissive)
        }
    }

    /// Set the default log filter directive
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
