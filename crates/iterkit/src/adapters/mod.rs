//! Small checked iterator adapters.
//!
//! - `SizedCallbackIter`: declare a length for an iterator, optionally verify it
//!   and observe each item.
//! - `zip_strict` / `zip_strict_many`: zip that refuses ragged inputs.
//!
//! Fallible adapters yield `Result` items and end after their first error.

mod sized;
mod zip;

pub use sized::SizedCallbackIter;
pub use zip::{zip_strict, zip_strict_many, ZipStrict, ZipStrictMany};

use std::fmt;

/// Errors surfaced by the checked adapters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamError {
    /// A strict sized iterator produced a different number of items than declared.
    LengthMismatch { expected: usize, actual: usize },
    /// An element (or its key) repeated an earlier one.
    Duplicate { name: String, element: String },
    /// Zipped iterables ran out at different points.
    UnequalLengths,
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::LengthMismatch { expected, actual } => write!(
                f,
                "expected iterator to return {} items, but it returned {}",
                expected, actual
            ),
            StreamError::Duplicate { name, element } => write!(f, "duplicate {name}: {element}"),
            StreamError::UnequalLengths => write!(f, "iterables have different lengths"),
        }
    }
}

impl std::error::Error for StreamError {}
