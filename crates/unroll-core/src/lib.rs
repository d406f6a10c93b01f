//! Token-level engine behind `unroll::for_each!`.
//!
//! Given `transformation, e1, ..., eN` this crate produces
//! `transformation! { e1 } ... transformation! { eN }`:
//!
//! - [`invocation`] - splits the input into a transformation path and
//!   opaque elements
//! - [`arity`] - counts the elements and enforces the configured ceiling
//! - [`ladder`] - the recursive expansion rules
//!
//! The crate works on `proc_macro2` streams so it runs both inside the
//! proc macro and in ordinary programs such as the `unroll` CLI.
//!
//! # Example
//!
//! ```
//! use quote::quote;
//! use unroll_config::UnrollConfig;
//! use unroll_core::expand_for_each;
//!
//! let out = expand_for_each(quote!(square, 1, 2), &UnrollConfig::default()).unwrap();
//! assert_eq!(out.to_string(), quote!(square! { 1 } square! { 2 }).to_string());
//! ```

pub mod arity;
pub mod dispatch;
pub mod error;
pub mod invocation;
pub mod ladder;

pub use arity::Arity;
pub use dispatch::{expand_count, expand_for_each};
pub use error::{ExpandError, Result};
pub use invocation::{Element, ElementList, Invocation};
pub use ladder::{applications, Ladder, Rule};
