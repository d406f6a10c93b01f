//! Entry points used by the proc macros and the CLI.

use proc_macro2::TokenStream;
use unroll_config::UnrollConfig;

use crate::arity::Arity;
use crate::error::Result;
use crate::invocation::{ElementList, Invocation};
use crate::ladder::Ladder;

/// Expands a `for_each!` body: `transformation, e1, ..., eN`.
pub fn expand_for_each(input: TokenStream, config: &UnrollConfig) -> Result<TokenStream> {
    config.validate()?;
    let invocation = Invocation::from_tokens(input, config)?;
    Ladder::new(config).expand(&invocation)
}

/// Expands a `count!` body to its arity as a `usize` literal.
pub fn expand_count(input: TokenStream, config: &UnrollConfig) -> Result<TokenStream> {
    config.validate()?;
    let list = ElementList::from_tokens(input, config)?;
    let arity = Arity::of(list.elements(), config.max_elements)?;
    Ok(arity.to_literal())
}
