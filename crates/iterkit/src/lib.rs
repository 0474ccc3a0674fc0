//! Iterator utilities: minimal-change product enumeration and streaming
//! duplicate detection.
//!
//! - [`gray`]: every tuple of a mixed-radix product, adjacent tuples differing
//!   by one unit in one coordinate.
//! - [`unique`]: `(element, is_first_occurrence)` labels in a single pass,
//!   including elements that cannot be hashed.
//! - [`adapters`]: checked length and zip helpers.
//!
//! Everything here is a pull-based iterator over owned state. Dropping an
//! adapter part-way is always fine.

pub mod adapters;
pub mod ext;
pub mod gray;
pub mod unique;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::adapters::{zip_strict, zip_strict_many, SizedCallbackIter, StreamError};
    pub use crate::ext::IterKitExt;
    pub use crate::gray::{gray_product, Change, GrayProduct, RadixError};
    pub use crate::unique::{
        is_unique_everseen, is_unique_everseen_by_key, no_duplicates, no_duplicates_by_key,
        Admit, DuplicateGate, Seen, SeenCfg, TryHash, Value,
    };
}
