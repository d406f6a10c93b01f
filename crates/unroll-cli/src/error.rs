//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;
use unroll_config::ConfigError;
use unroll_core::ExpandError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("input is not valid Rust tokens: {0}")]
    Lex(String),

    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, CliError>;
