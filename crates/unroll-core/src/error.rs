//! Error types for expansion

use proc_macro2::{Span, TokenStream};
use thiserror::Error;
use unroll_config::ConfigError;

/// Everything that can stop an invocation from expanding.
///
/// Every variant becomes a `compile_error!` at the invocation site; the
/// span points at the tokens responsible.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// The invocation has no transformation before the first comma.
    #[error("expected a transformation macro path before the element list")]
    MissingTransformation { span: Span },

    /// Two commas with nothing between them.
    #[error("element {index} is empty")]
    EmptyElement { index: usize, span: Span },

    /// A trailing comma while `trailing_comma = false`.
    #[error("trailing comma after the last element is not accepted")]
    TrailingComma { span: Span },

    /// More elements than any expansion rule covers.
    #[error("no expansion rule for {found} elements; `for_each!` accepts at most {max}")]
    TooManyElements { found: usize, max: usize, span: Span },

    /// The transformation did not parse as a path.
    #[error(transparent)]
    Parse(#[from] syn::Error),

    #[error("invalid unroll configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ExpandError {
    /// Span the diagnostic is reported at.
    pub fn span(&self) -> Span {
        match self {
            ExpandError::MissingTransformation { span }
            | ExpandError::EmptyElement { span, .. }
            | ExpandError::TrailingComma { span }
            | ExpandError::TooManyElements { span, .. } => *span,
            ExpandError::Parse(err) => err.span(),
            ExpandError::Config(_) => Span::call_site(),
        }
    }

    /// Renders the error as a `compile_error!` invocation.
    pub fn to_compile_error(self) -> TokenStream {
        syn::Error::from(self).to_compile_error()
    }
}

impl From<ExpandError> for syn::Error {
    fn from(err: ExpandError) -> Self {
        match err {
            ExpandError::Parse(inner) => inner,
            other => syn::Error::new(other.span(), other.to_string()),
        }
    }
}

/// Result type alias for expansion
pub type Result<T> = std::result::Result<T, ExpandError>;
