//! PyO3 bindings for selected `iterkit` iterators.
//!
//! Notes
//! - Keep bindings thin: each Python iterator wraps the Rust state machine and
//!   pulls exactly one element from the Python source per `__next__`.
//! - Python decides hashability at runtime; `common::PyKey` maps a failing
//!   `hash()` onto the classifier's linear-scan store.

mod common;
mod gray;
mod unique;

use pyo3::prelude::*;

#[pymodule]
fn iterkit_native(_py: Python, m: &PyModule) -> PyResult<()> {
    gray::register(m)?;
    unique::register(m)?;
    m.add("__version__", iterkit::VERSION)?;
    Ok(())
}
