//! # cc-core
//!
//! Core definitions shared by every crate of the workspace: the error enum,
//! the `Result` alias, and the `ensure!` / `ensure_post!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `ensure_post!` macros.
pub mod errors;

pub use errors::{Error, Result};
