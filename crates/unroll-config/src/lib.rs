//! Configuration for `unroll`.
//!
//! The expansion ceiling and the accepted list grammar are configuration,
//! not semantics. A crate that needs longer lists drops an `unroll.toml`
//! (or `unroll.yaml`) next to its `Cargo.toml`; the macros pick it up at
//! expansion time.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use unroll_config::UnrollConfig;
//!
//! let config = UnrollConfig::from_toml_str(r#"
//!     max_elements = 128
//!     trailing_comma = false
//! "#).unwrap();
//!
//! assert_eq!(config.max_elements, 128);
//! assert!(!config.trailing_comma);
//! ```
//!
//! Fall back to defaults when the file is missing:
//!
//! ```
//! use unroll_config::{UnrollConfig, DEFAULT_MAX_ELEMENTS};
//!
//! let config = UnrollConfig::load("unroll.toml").unwrap_or_default();
//! assert_eq!(config.max_elements, DEFAULT_MAX_ELEMENTS);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of elements a single invocation may carry.
pub const DEFAULT_MAX_ELEMENTS: usize = 64;

/// Largest ceiling a configuration may request.
///
/// Expansion recurses once per element, so the ceiling also bounds the
/// recursion depth of the expander.
pub const HARD_MAX_ELEMENTS: usize = 1024;

/// File names probed by [`UnrollConfig::discover`], in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["unroll.toml", "unroll.yaml", "unroll.yml"];

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Expansion configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct UnrollConfig {
    /// Maximum number of elements per invocation.
    pub max_elements: usize,

    /// Whether a single trailing comma after the last element is accepted.
    pub trailing_comma: bool,
}

impl Default for UnrollConfig {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
            trailing_comma: true,
        }
    }
}

impl UnrollConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` are read as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, doesn't parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Looks for a configuration file in `dir`.
    ///
    /// The first of [`CONFIG_FILE_NAMES`] that exists is loaded. A
    /// directory without any of them yields the default configuration.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Self::load(candidate);
            }
        }
        Ok(Self::default())
    }

    /// Discovers configuration for the crate currently being compiled.
    ///
    /// Reads `CARGO_MANIFEST_DIR`, which cargo sets for both build
    /// scripts and proc-macro expansion. Outside cargo the defaults apply.
    pub fn from_manifest_dir() -> Result<Self, ConfigError> {
        match std::env::var_os("CARGO_MANIFEST_DIR") {
            Some(dir) => Self::discover(dir),
            None => Ok(Self::default()),
        }
    }

    /// Checks that the ceiling is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_elements == 0 || self.max_elements > HARD_MAX_ELEMENTS {
            return Err(ConfigError::Invalid(format!(
                "max_elements must be between 1 and {}, got {}",
                HARD_MAX_ELEMENTS, self.max_elements
            )));
        }
        Ok(())
    }

    /// Sets the element ceiling.
    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements;
        self
    }

    /// Sets whether a trailing comma is accepted.
    pub fn with_trailing_comma(mut self, allowed: bool) -> Self {
        self.trailing_comma = allowed;
        self
    }
}
