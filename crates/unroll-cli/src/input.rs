//! Reading invocation text and turning it into a macro body.

use std::io::Read;
use std::path::{Path, PathBuf};

use proc_macro2::{Delimiter, TokenStream, TokenTree};
use tracing::debug;

use crate::error::{CliError, Result};

/// Where the invocation text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Expr(String),
    File(PathBuf),
    Stdin,
}

impl Source {
    pub fn new(expr: Option<String>, file: Option<PathBuf>) -> Self {
        match (expr, file) {
            (Some(expr), _) => Source::Expr(expr),
            (None, Some(path)) => Source::File(path),
            (None, None) => Source::Stdin,
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            Source::Expr(expr) => Ok(expr.clone()),
            Source::File(path) => read_file(path),
            Source::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(CliError::Stdin)?;
                Ok(text)
            }
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Tokenizes `text` and, if it is a whole `macro_name!(...)` call,
/// returns just the arguments.
///
/// Both `a, b` and `unroll::for_each!(a, b);` yield `a, b`.
pub fn parse_body(text: &str, macro_name: &str) -> Result<TokenStream> {
    let tokens: TokenStream = text
        .parse()
        .map_err(|err: proc_macro2::LexError| CliError::Lex(err.to_string()))?;
    Ok(unwrap_call(tokens, macro_name))
}

fn unwrap_call(tokens: TokenStream, macro_name: &str) -> TokenStream {
    let mut trees: Vec<TokenTree> = tokens.clone().into_iter().collect();
    if matches!(trees.last(), Some(TokenTree::Punct(p)) if p.as_char() == ';') {
        trees.pop();
    }

    let body = match trees.as_slice() {
        [path @ .., TokenTree::Ident(name), TokenTree::Punct(bang), TokenTree::Group(args)]
            if name == macro_name
                && bang.as_char() == '!'
                && args.delimiter() != Delimiter::None
                && is_path_prefix(path) =>
        {
            args.stream()
        }
        _ => return tokens,
    };

    debug!(macro_name, "unwrapped macro call");
    body
}

/// `a::b::` or `::a::` or nothing.
fn is_path_prefix(trees: &[TokenTree]) -> bool {
    trees.iter().all(|tt| match tt {
        TokenTree::Ident(_) => true,
        TokenTree::Punct(p) => p.as_char() == ':',
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_source_selection() {
        assert_eq!(
            Source::new(Some("a".into()), Some("f.rs".into())),
            Source::Expr("a".into())
        );
        assert_eq!(Source::new(None, Some("f.rs".into())), Source::File("f.rs".into()));
        assert_eq!(Source::new(None, None), Source::Stdin);
    }

    #[test]
    fn test_bare_body_is_kept() {
        let body = parse_body("square, 1, 2", "for_each").unwrap();
        assert_eq!(body.to_string(), "square , 1 , 2");
    }

    #[test]
    fn test_whole_call_is_unwrapped() {
        let body = parse_body("unroll::for_each!(square, 1, 2);", "for_each").unwrap();
        assert_eq!(body.to_string(), "square , 1 , 2");

        let body = parse_body("for_each! { square, 3 }", "for_each").unwrap();
        assert_eq!(body.to_string(), "square , 3");
    }

    #[test]
    fn test_other_macro_is_not_unwrapped() {
        let body = parse_body("count!(a, b)", "for_each").unwrap();
        assert_eq!(body.to_string(), "count ! (a , b)");
    }

    #[test]
    fn test_lex_error() {
        let err = parse_body("square, (1", "for_each").unwrap_err();
        assert!(matches!(err, CliError::Lex(_)));
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "for_each!(t, a)").unwrap();

        let text = Source::File(file.path().to_path_buf()).read().unwrap();
        assert_eq!(text, "for_each!(t, a)");
    }

    #[test]
    fn test_read_missing_file() {
        let err = Source::File("no/such/file.rs".into()).read().unwrap_err();
        assert!(err.to_string().starts_with("could not read no/such/file.rs"));
    }
}
