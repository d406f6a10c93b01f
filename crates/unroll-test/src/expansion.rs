//! Reading expanded output back into applications.
//!
//! The reader is strict: anything at the top level other than
//! `path ! { ... }` is an error. A pending rule call or a stray separator
//! in an expansion therefore fails the test instead of slipping through.

use proc_macro2::{Delimiter, TokenStream, TokenTree};

/// One `path! { element }` in an expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Macro path without whitespace, e.g. `std::stringify`.
    pub path: String,
    /// Element tokens as printed by `proc_macro2`.
    pub element: String,
}

/// Splits `expansion` into applications, rejecting any other token shape.
pub fn read_applications(expansion: &TokenStream) -> Result<Vec<Application>, String> {
    let mut out = Vec::new();
    let mut path = String::new();
    let mut saw_bang = false;

    for tt in expansion.clone() {
        match tt {
            TokenTree::Ident(ident) if !saw_bang => path.push_str(&ident.to_string()),
            TokenTree::Punct(punct) if !saw_bang && punct.as_char() == ':' => path.push(':'),
            TokenTree::Punct(punct) if !saw_bang && punct.as_char() == '!' => {
                if path.is_empty() {
                    return Err("`!` without a macro path".to_string());
                }
                saw_bang = true;
            }
            TokenTree::Group(group) if saw_bang && group.delimiter() == Delimiter::Brace => {
                out.push(Application {
                    path: std::mem::take(&mut path),
                    element: group.stream().to_string(),
                });
                saw_bang = false;
            }
            other => return Err(format!("unexpected token `{other}` in expansion")),
        }
    }

    if !path.is_empty() || saw_bang {
        return Err(format!("incomplete application `{path}` at end of expansion"));
    }
    Ok(out)
}

/// Asserts that `expansion` is exactly `path! { e }` for each of
/// `elements`, in order.
///
/// Expected elements are given as source text and normalized through
/// the tokenizer, so `"(1, 2)"` matches however the tokens print.
///
/// # Panics
///
/// Panics when the expansion has any other shape.
pub fn assert_applications(expansion: &TokenStream, path: &str, elements: &[&str]) {
    let actual = match read_applications(expansion) {
        Ok(actual) => actual,
        Err(msg) => panic!("malformed expansion `{expansion}`: {msg}"),
    };

    let expected: Vec<Application> = elements
        .iter()
        .map(|element| Application {
            path: path.replace(' ', ""),
            element: normalize(element),
        })
        .collect();

    assert_eq!(actual, expected, "expansion `{expansion}` differs");
}

fn normalize(source: &str) -> String {
    match source.parse::<TokenStream>() {
        Ok(tokens) => tokens.to_string(),
        Err(err) => panic!("expected element `{source}` is not valid tokens: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> TokenStream {
        source.parse().unwrap()
    }

    #[test]
    fn test_reads_applications() {
        let apps = read_applications(&tokens("sq! { 1 } a::b! { (x, y) }")).unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].path, "sq");
        assert_eq!(apps[1].path, "a::b");
        assert_eq!(apps[1].element, tokens("(x, y)").to_string());
    }

    #[test]
    fn test_rejects_separators() {
        assert!(read_applications(&tokens("sq! { 1 }, sq! { 2 }")).is_err());
    }

    #[test]
    fn test_rejects_parenthesized_call() {
        assert!(read_applications(&tokens("for_each!(sq, 1)")).is_err());
    }

    #[test]
    fn test_rejects_dangling_path() {
        assert!(read_applications(&tokens("sq! { 1 } sq")).is_err());
    }

    #[test]
    fn test_assert_applications() {
        assert_applications(&tokens("sq! { 1 } sq! { 2 }"), "sq", &["1", "2"]);
        assert_applications(&TokenStream::new(), "sq", &[]);
    }

    #[test]
    #[should_panic]
    fn test_assert_applications_detects_reorder() {
        assert_applications(&tokens("sq! { 2 } sq! { 1 }"), "sq", &["1", "2"]);
    }
}
