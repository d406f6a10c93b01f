//! `expand` and `count` subcommands.

use std::path::Path;

use proc_macro2::TokenStream;
use tracing::{debug, info};
use unroll_config::UnrollConfig;
use unroll_core::{applications, expand_for_each, Arity, ElementList};

use crate::error::Result;

/// Resolves the configuration for a run.
///
/// An explicit file wins; otherwise `unroll.toml`/`unroll.yaml` is
/// looked up in `dir`. `max_elements` overrides whatever was loaded.
pub fn resolve_config(
    explicit: Option<&Path>,
    dir: &Path,
    max_elements: Option<usize>,
) -> Result<UnrollConfig> {
    let mut config = match explicit {
        Some(path) => UnrollConfig::load(path)?,
        None => UnrollConfig::discover(dir)?,
    };
    if let Some(max) = max_elements {
        config = config.with_max_elements(max);
    }
    config.validate()?;
    debug!(?config, "resolved configuration");
    Ok(config)
}

/// Expands a `for_each!` body and renders one application per line.
pub fn expand(body: TokenStream, config: &UnrollConfig) -> Result<String> {
    let expansion = expand_for_each(body, config)?;
    let lines: Vec<String> = applications(expansion)
        .iter()
        .map(|application| application.to_string())
        .collect();
    info!(applications = lines.len(), "expanded");
    Ok(lines.join("\n"))
}

/// Counts the elements of a list.
pub fn count(body: TokenStream, config: &UnrollConfig) -> Result<usize> {
    let list = ElementList::from_tokens(body, config)?;
    let arity = Arity::of(list.elements(), config.max_elements)?;
    info!(%arity, "counted");
    Ok(arity.get())
}
