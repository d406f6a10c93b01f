//! Procedural macros for `unroll`.
//!
//! Use them through the `unroll` crate, which re-exports both.

use proc_macro::TokenStream;
use unroll_config::UnrollConfig;
use unroll_core::ExpandError;

type Expander =
    fn(proc_macro2::TokenStream, &UnrollConfig) -> unroll_core::Result<proc_macro2::TokenStream>;

/// Applies a macro to every element of a list.
///
/// `for_each!(t, e1, e2, ..., eN)` expands to
/// `t! { e1 } t! { e2 } ... t! { eN }`.
///
/// `t` is a path to any function-like macro. Elements are split at
/// top-level commas and passed through untouched. The list holds at most
/// 64 elements unless the invoking crate's `unroll.toml` raises
/// `max_elements`.
///
/// # Configuration changes
///
/// `unroll.toml`/`unroll.yaml` is read while the macro expands, and cargo
/// does not know about it. Editing it does not trigger a rebuild on its
/// own, so a lowered `max_elements` or `trailing_comma = false` only takes
/// effect after some other change recompiles the crate. Crates that keep a
/// config file should register it from `build.rs`:
///
/// ```ignore
/// fn main() {
///     println!("cargo:rerun-if-changed=unroll.toml");
///     println!("cargo:rerun-if-changed=unroll.yaml");
/// }
/// ```
///
/// # Example
///
/// ```ignore
/// macro_rules! getter {
///     ($name:ident) => {
///         pub fn $name(&self) -> &str { stringify!($name) }
///     };
/// }
///
/// impl Loader {
///     for_each!(getter, initialize, load_from_file, destroy);
/// }
/// ```
#[proc_macro]
pub fn for_each(input: TokenStream) -> TokenStream {
    expand_with(input, unroll_core::expand_for_each)
}

/// Counts the elements of a list at compile time.
///
/// `count!(a, b, c)` expands to `3usize`, so it works in `const` items
/// and array lengths.
#[proc_macro]
pub fn count(input: TokenStream) -> TokenStream {
    expand_with(input, unroll_core::expand_count)
}

fn expand_with(input: TokenStream, expand: Expander) -> TokenStream {
    UnrollConfig::from_manifest_dir()
        .map_err(ExpandError::from)
        .and_then(|config| expand(input.into(), &config))
        .unwrap_or_else(ExpandError::to_compile_error)
        .into()
}
