//! Unroll - compile-time iteration over macro argument lists
//!
//! `for_each!` applies a macro to every element of a list and emits the
//! results in place, in order, with no runtime cost.
//!
//! # Example
//!
//! ```rust
//! use unroll::{count, for_each};
//!
//! macro_rules! square_const {
//!     ($name:ident = $x:expr) => {
//!         const $name: u32 = $x * $x;
//!     };
//! }
//!
//! for_each!(square_const, ONE = 1, TWO = 2, THREE = 3);
//!
//! assert_eq!([ONE, TWO, THREE], [1, 4, 9]);
//! assert_eq!(count!(ONE, TWO, THREE), 3);
//! ```
//!
//! Lists hold at most [`MAX_ELEMENTS`] elements; longer lists fail to
//! compile. A crate can raise the ceiling with an `unroll.toml` next to
//! its `Cargo.toml`:
//!
//! ```toml
//! max_elements = 128
//! ```
//!
//! The file is read during macro expansion and is not a tracked build
//! input. Add a `build.rs` so cargo recompiles the crate when it changes:
//!
//! ```no_run
//! // build.rs
//! fn main() {
//!     println!("cargo:rerun-if-changed=unroll.toml");
//!     println!("cargo:rerun-if-changed=unroll.yaml");
//! }
//! ```

// User-facing macros
pub use unroll_macros::{count, for_each};

/// Configuration types, for tools that read `unroll.toml` themselves.
pub use unroll_config::{UnrollConfig, HARD_MAX_ELEMENTS};

/// Default ceiling on the number of elements per invocation.
pub const MAX_ELEMENTS: usize = unroll_config::DEFAULT_MAX_ELEMENTS;

pub mod prelude {
    pub use super::{count, for_each};
}
