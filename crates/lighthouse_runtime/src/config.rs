//! Configuration for the terminal front end.
//!
//! Every field has a default, so an empty or partial TOML file is valid.
//! Command-line flags are applied on top with the `with_*` builders.

use std::fs;
use std::path::Path;

use lighthouse_foundation::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Narrowest wrap width that still fits a word or two per line.
const MIN_WRAP_WIDTH: usize = 20;

/// Front-end settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Prompt shown before each command.
    pub prompt: String,

    /// Whether to print the title banner.
    pub show_banner: bool,

    /// Column at which messages are wrapped. Zero disables wrapping.
    pub wrap_width: usize,

    /// Longest command accepted; extra characters are dropped.
    pub max_input_len: usize,

    /// Number of history entries the line editor keeps.
    pub history_size: usize,

    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_banner: true,
            wrap_width: 60,
            max_input_len: 50,
            history_size: 200,
            log_filter: "warn".to_string(),
        }
    }
}

impl GameConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the text is not valid TOML or names
    /// an unknown field.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::config(e.to_string()))?;
        Ok(config.sanitized())
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Enables or disables the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Sets the wrap width.
    #[must_use]
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self.sanitized()
    }

    /// Sets the input length limit.
    #[must_use]
    pub fn with_max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = len;
        self.sanitized()
    }

    /// Sets the history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self.sanitized()
    }

    /// Sets the default log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Replaces values that would make the game unplayable.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.wrap_width != 0 && self.wrap_width < MIN_WRAP_WIDTH {
            warn!(wrap_width = self.wrap_width, "wrap width too narrow, using {MIN_WRAP_WIDTH}");
            self.wrap_width = MIN_WRAP_WIDTH;
        }
        if self.max_input_len == 0 {
            warn!("max_input_len of 0 would reject every command, using the default");
            self.max_input_len = defaults.max_input_len;
        }
        if self.history_size == 0 {
            warn!("history_size of 0 is not allowed, using the default");
            self.history_size = defaults.history_size;
        }
        self
    }
}
