//! Arity counting.

use std::fmt;

use proc_macro2::{Literal, Span, TokenStream, TokenTree};

use crate::error::{ExpandError, Result};
use crate::invocation::Element;

/// Number of elements in an invocation, already checked against the
/// configured ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arity(usize);

impl Arity {
    pub const ZERO: Arity = Arity(0);

    /// Counts `elements`, failing when no rule covers that many.
    ///
    /// The error span is the first element past the ceiling.
    pub fn of(elements: &[Element], max: usize) -> Result<Arity> {
        let found = elements.len();
        if found > max {
            let span = elements
                .get(max)
                .map(Element::span)
                .unwrap_or_else(Span::call_site);
            return Err(ExpandError::TooManyElements { found, max, span });
        }
        Ok(Arity(found))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// The arity of the tail once the head element is consumed.
    pub fn predecessor(self) -> Option<Arity> {
        self.0.checked_sub(1).map(Arity)
    }

    /// `N` as a `usize`-suffixed literal token.
    pub fn to_literal(self) -> TokenStream {
        TokenTree::Literal(Literal::usize_suffixed(self.0)).into()
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
