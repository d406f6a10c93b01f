//! Shared test fixtures for unroll crates.
//!
//! This crate only depends on `proc-macro2`, so every other crate in the
//! workspace can use it as a dev-dependency without cycles.
//!
//! - [`elements`] - generated element lists of any length
//! - [`expansion`] - strict reading of expanded output back into
//!   `(path, element)` applications
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! unroll-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use unroll_test::{numbered_elements, assert_applications};
//! ```

pub mod elements;
pub mod expansion;

pub use elements::{numbered, numbered_elements, numbered_invocation};
pub use expansion::{assert_applications, read_applications, Application};
