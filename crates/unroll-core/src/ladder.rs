//! The expansion ladder.
//!
//! Rule N applies the transformation to the head element and hands the
//! tail to rule N-1; rule 0 emits nothing. Every step forces the tail
//! rule to completion before appending it, so the emitted fragment holds
//! only transformation applications and never a pending rule call.

use proc_macro2::{Delimiter, TokenStream, TokenTree};
use quote::quote;
use syn::Path;
use tracing::{debug, trace};
use unroll_config::UnrollConfig;

use crate::arity::Arity;
use crate::error::Result;
use crate::invocation::{path_display, Element, Invocation};

/// One rung of the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    arity: Arity,
}

impl Rule {
    pub fn new(arity: Arity) -> Self {
        Self { arity }
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Expands this rule.
    ///
    /// `elements.len()` must equal the rule's arity; [`Ladder::expand`]
    /// only ever selects the matching rule.
    pub fn expand(self, transformation: &Path, elements: &[Element]) -> TokenStream {
        debug_assert_eq!(elements.len(), self.arity.get());
        match (self.arity.predecessor(), elements) {
            (Some(next), [head, tail @ ..]) => {
                trace!(rule = self.arity.get(), element = %head, "applying transformation");
                let mut out = apply(transformation, head);
                out.extend(Rule::new(next).force(transformation, tail));
                out
            }
            _ => TokenStream::new(),
        }
    }

    /// Runs this rule to completion and returns its concrete tokens.
    fn force(self, transformation: &Path, elements: &[Element]) -> TokenStream {
        self.expand(transformation, elements)
    }
}

/// `transformation! { element }`.
///
/// Braces make the application valid in item, impl-item, statement and
/// expression position without a trailing semicolon.
fn apply(transformation: &Path, element: &Element) -> TokenStream {
    let tokens = element.tokens();
    quote! { #transformation ! { #tokens } }
}

/// Selects and runs the rule matching an invocation's arity.
#[derive(Debug, Clone)]
pub struct Ladder {
    max_elements: usize,
}

impl Ladder {
    pub fn new(config: &UnrollConfig) -> Self {
        Self {
            max_elements: config.max_elements,
        }
    }

    /// Highest arity with a rule.
    pub fn max_elements(&self) -> usize {
        self.max_elements
    }

    /// Counts `elements` and picks the rule of that arity.
    ///
    /// Fails with [`TooManyElements`](crate::ExpandError::TooManyElements)
    /// when the ladder does not reach that high.
    pub fn rule(&self, elements: &[Element]) -> Result<Rule> {
        Arity::of(elements, self.max_elements).map(Rule::new)
    }

    /// Expands `invocation` into its concatenated applications.
    pub fn expand(&self, invocation: &Invocation) -> Result<TokenStream> {
        let rule = self.rule(invocation.elements())?;
        debug!(
            transformation = %path_display(invocation.transformation()),
            arity = rule.arity().get(),
            max_elements = self.max_elements,
            "expanding for_each"
        );
        let out = rule.expand(invocation.transformation(), invocation.elements());
        debug_assert_eq!(applications(out.clone()).len(), rule.arity().get());
        Ok(out)
    }
}

/// Splits an expansion back into its individual applications.
///
/// Each application ends with the brace group that follows `!`.
pub fn applications(expansion: TokenStream) -> Vec<TokenStream> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    let mut after_bang = false;

    for tt in expansion {
        let closes = after_bang
            && matches!(&tt, TokenTree::Group(group) if group.delimiter() == Delimiter::Brace);
        after_bang = matches!(&tt, TokenTree::Punct(punct) if punct.as_char() == '!');
        current.push(tt);
        if closes {
            out.push(current.drain(..).collect());
        }
    }
    if !current.is_empty() {
        out.push(current.into_iter().collect());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpandError;
    use unroll_config::HARD_MAX_ELEMENTS;

    fn invocation(tokens: TokenStream) -> Invocation {
        Invocation::from_tokens(tokens, &UnrollConfig::default()).unwrap()
    }

    #[test]
    fn test_rule_zero_is_empty() {
        let inv = invocation(quote!(square));
        let out = Rule::new(Arity::ZERO).expand(inv.transformation(), inv.elements());
        assert!(out.is_empty());
    }

    #[test]
    fn test_rule_one_is_single_application() {
        let inv = invocation(quote!(square, 7));
        let out = Ladder::new(&UnrollConfig::default()).expand(&inv).unwrap();
        assert_eq!(out.to_string(), quote!(square! { 7 }).to_string());
    }

    #[test]
    fn test_rule_n_concatenates_in_order() {
        let inv = invocation(quote!(square, 1, 2, 3));
        let out = Ladder::new(&UnrollConfig::default()).expand(&inv).unwrap();
        assert_eq!(
            out.to_string(),
            quote!(square! { 1 } square! { 2 } square! { 3 }).to_string()
        );
    }

    #[test]
    fn test_ladder_rule_lookup() {
        let ladder = Ladder::new(&UnrollConfig::new().with_max_elements(2));
        assert_eq!(ladder.max_elements(), 2);
        assert_eq!(ladder.rule(&[]).unwrap().arity(), Arity::ZERO);

        let inv = invocation(quote!(t, a, b));
        assert_eq!(ladder.rule(inv.elements()).unwrap().arity().get(), 2);

        let narrow = Ladder::new(&UnrollConfig::new().with_max_elements(1));
        assert!(matches!(
            narrow.rule(inv.elements()),
            Err(ExpandError::TooManyElements { found: 2, max: 1, .. })
        ));
    }

    #[test]
    fn test_ladder_expand_goes_through_rule_selection() {
        let inv = invocation(quote!(t, a, b, c));
        let ladder = Ladder::new(&UnrollConfig::new().with_max_elements(3));
        let rule = ladder.rule(inv.elements()).unwrap();
        assert_eq!(
            ladder.expand(&inv).unwrap().to_string(),
            rule.expand(inv.transformation(), inv.elements()).to_string()
        );

        let narrow = Ladder::new(&UnrollConfig::new().with_max_elements(2));
        let err = narrow.expand(&inv).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no expansion rule for 3 elements; `for_each!` accepts at most 2"
        );
    }

    #[test]
    fn test_hard_ceiling_expansion() {
        let source: TokenStream = unroll_test::numbered_invocation("t", HARD_MAX_ELEMENTS)
            .parse()
            .unwrap();
        let config = UnrollConfig::new().with_max_elements(HARD_MAX_ELEMENTS);
        let inv = Invocation::from_tokens(source, &config).unwrap();
        let out = Ladder::new(&config).expand(&inv).unwrap();
        assert_eq!(applications(out).len(), HARD_MAX_ELEMENTS);
    }

    #[test]
    fn test_applications_split() {
        let expansion = quote!(square! { 1 } a::b! { (2, 3) } square! {});
        let parts: Vec<String> = applications(expansion).iter().map(|p| p.to_string()).collect();
        assert_eq!(
            parts,
            vec![
                quote!(square! { 1 }).to_string(),
                quote!(a::b! { (2, 3) }).to_string(),
                quote!(square! {}).to_string(),
            ]
        );
    }

    #[test]
    fn test_applications_of_empty_expansion() {
        assert!(applications(TokenStream::new()).is_empty());
    }
}
