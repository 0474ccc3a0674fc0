use std::hash::Hasher;

use iterkit::unique::{TryHash, Unhashable};
use pyo3::prelude::*;

/// A Python object used as a classifier key.
///
/// Equality calls `==`; an exception while comparing counts as "not equal".
/// Hashing calls `hash()`; any exception marks the key unhashable.
pub struct PyKey(pub PyObject);

impl PartialEq for PyKey {
    fn eq(&self, other: &Self) -> bool {
        Python::with_gil(|py| {
            self.0
                .bind(py)
                .eq(other.0.bind(py))
                .unwrap_or(false)
        })
    }
}

impl TryHash for PyKey {
    fn try_hash<H: Hasher>(&self, state: &mut H) -> Result<(), Unhashable> {
        Python::with_gil(|py| match self.0.bind(py).hash() {
            Ok(h) => {
                state.write_isize(h);
                Ok(())
            }
            Err(_) => Err(Unhashable),
        })
    }
}

/// Apply the optional Python `key` callable to `element`.
pub fn derive_key(py: Python<'_>, key: &Option<PyObject>, element: &Bound<'_, PyAny>) -> PyResult<PyKey> {
    let k = match key {
        Some(f) => f.call1(py, (element.clone(),))?,
        None => element.clone().unbind(),
    };
    Ok(PyKey(k))
}
