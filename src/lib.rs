//! Trim oversized assertion failure output to a readable size.
//!
//! A test runner that rewrites assertions can end up rendering failure
//! explanations hundreds of lines long (think of the diff between two large
//! collections). This crate implements the display-side policy for that
//! output: keep everything when the user asked for it (`-vv` and up) or when
//! running on CI, otherwise cut the explanation down to a character budget
//! and append a summary of how many lines were hidden.

pub mod ci;
pub mod config;
pub mod truncate;

pub use ci::{CI_MARKER_VARS, running_on_ci};
pub use config::RunOptions;
pub use truncate::{
    DEFAULT_TRUNCATION_LENGTH, TRUNCATION_USAGE_MSG, should_truncate, truncate_explanation,
    truncate_if_required,
};
