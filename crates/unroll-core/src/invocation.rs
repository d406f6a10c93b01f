//! Parsing of `transformation, element, ...` token lists.
//!
//! Elements are split at top-level commas only. A comma inside `()`, `[]`
//! or `{}` sits inside a single token tree and stays with its element,
//! so `(a, b)` is one element. Angle brackets are not groups: write
//! `(HashMap<K, V>)` to pass a generic type as one element.

use std::fmt;
use std::mem;

use proc_macro2::{Span, TokenStream, TokenTree};
use syn::parse::Parser;
use syn::Path;
use unroll_config::UnrollConfig;

use crate::error::{ExpandError, Result};

/// One opaque list element.
#[derive(Clone)]
pub struct Element {
    tokens: TokenStream,
    span: Span,
}

impl Element {
    /// Tokens of the element, exactly as written.
    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    /// Span of the element's first token.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element")
            .field(&self.tokens.to_string())
            .finish()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens)
    }
}

/// An ordered list of elements, as accepted by `count!`.
#[derive(Debug, Clone, Default)]
pub struct ElementList {
    elements: Vec<Element>,
    trailing_comma: Option<Span>,
}

impl ElementList {
    /// Splits `input` into elements.
    ///
    /// An empty stream is the empty list. A single trailing comma is
    /// accepted when the configuration allows it.
    pub fn from_tokens(input: TokenStream, config: &UnrollConfig) -> Result<Self> {
        Self::from_segments(split_top_level(input), config)
    }

    fn from_segments(segments: Vec<Segment>, config: &UnrollConfig) -> Result<Self> {
        let count = segments.len();
        let mut elements = Vec::with_capacity(count);
        let mut trailing_comma = None;

        for (position, segment) in segments.into_iter().enumerate() {
            let is_last = position + 1 == count;
            match segment.first_span() {
                Some(span) => elements.push(Element {
                    tokens: segment.tokens,
                    span,
                }),
                None if is_last => {
                    // Empty tail: either the whole list is empty, or the
                    // previous comma was a trailing one.
                    if let Some(comma) = segment.leading_comma {
                        if !config.trailing_comma {
                            return Err(ExpandError::TrailingComma { span: comma });
                        }
                        trailing_comma = Some(comma);
                    }
                }
                None => {
                    return Err(ExpandError::EmptyElement {
                        index: position + 1,
                        span: segment.leading_comma.unwrap_or_else(Span::call_site),
                    });
                }
            }
        }

        Ok(Self {
            elements,
            trailing_comma,
        })
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Span of the accepted trailing comma, if one was written.
    pub fn trailing_comma(&self) -> Option<Span> {
        self.trailing_comma
    }
}

/// A parsed `for_each!` body: the transformation path and its elements.
#[derive(Debug, Clone)]
pub struct Invocation {
    transformation: Path,
    list: ElementList,
}

impl Invocation {
    /// Parses `transformation [, element]* [,]`.
    pub fn from_tokens(input: TokenStream, config: &UnrollConfig) -> Result<Self> {
        let mut segments = split_top_level(input).into_iter();
        let head = match segments.next() {
            Some(head) if !head.tokens.is_empty() => head,
            Some(head) => {
                return Err(ExpandError::MissingTransformation {
                    span: head.trailing_span().unwrap_or_else(Span::call_site),
                })
            }
            None => {
                return Err(ExpandError::MissingTransformation {
                    span: Span::call_site(),
                })
            }
        };

        let transformation = Path::parse_mod_style.parse2(head.tokens)?;

        let rest: Vec<Segment> = segments.collect();
        let list = if rest.is_empty() {
            ElementList::default()
        } else {
            ElementList::from_segments(rest, config)?
        };

        Ok(Self {
            transformation,
            list,
        })
    }

    /// The macro applied to every element.
    pub fn transformation(&self) -> &Path {
        &self.transformation
    }

    pub fn elements(&self) -> &[Element] {
        self.list.elements()
    }

    pub fn list(&self) -> &ElementList {
        &self.list
    }
}

/// Renders a path the way it was written, without token spacing.
pub fn path_display(path: &Path) -> String {
    let mut out = String::new();
    if path.leading_colon.is_some() {
        out.push_str("::");
    }
    for (i, segment) in path.segments.iter().enumerate() {
        if i > 0 {
            out.push_str("::");
        }
        out.push_str(&segment.ident.to_string());
    }
    out
}

/// Tokens between two top-level commas.
struct Segment {
    tokens: TokenStream,
    leading_comma: Option<Span>,
    trailing_comma: Option<Span>,
}

impl Segment {
    fn first_span(&self) -> Option<Span> {
        self.tokens.clone().into_iter().next().map(|tt| tt.span())
    }

    fn trailing_span(&self) -> Option<Span> {
        self.trailing_comma.or(self.leading_comma)
    }
}

fn split_top_level(input: TokenStream) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = TokenStream::new();
    let mut leading_comma = None;

    for tt in input {
        if let TokenTree::Punct(punct) = &tt {
            if punct.as_char() == ',' {
                segments.push(Segment {
                    tokens: mem::replace(&mut current, TokenStream::new()),
                    leading_comma,
                    trailing_comma: Some(punct.span()),
                });
                leading_comma = Some(punct.span());
                continue;
            }
        }
        current.extend(std::iter::once(tt));
    }

    segments.push(Segment {
        tokens: current,
        leading_comma,
        trailing_comma: None,
    });
    segments
}
