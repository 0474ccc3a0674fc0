//! First-occurrence classifier bindings.

use iterkit::unique::{Admit, DuplicateGate, Seen};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyIterator;

use crate::common::{derive_key, PyKey};

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<UniqueEverseenIter>()?;
    m.add_class::<NoDuplicatesIter>()?;
    m.add_function(wrap_pyfunction!(is_unique_everseen, m)?)?;
    m.add_function(wrap_pyfunction!(no_duplicates, m)?)?;
    Ok(())
}

/// Yields `(element, is_first_occurrence)` pairs.
#[pyclass(module = "iterkit_native")]
pub struct UniqueEverseenIter {
    source: Py<PyIterator>,
    key: Option<PyObject>,
    seen: Seen<PyKey>,
}

#[pymethods]
impl UniqueEverseenIter {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(mut slf: PyRefMut<'_, Self>, py: Python<'_>) -> PyResult<Option<(PyObject, bool)>> {
        let mut source = slf.source.bind(py).clone();
        let Some(element) = source.next().transpose()? else {
            return Ok(None);
        };
        let key = derive_key(py, &slf.key, &element)?;
        let first = slf.seen.insert(key);
        Ok(Some((element.unbind(), first)))
    }
}

/// Passes elements through; raises `ValueError` at the first duplicate and is
/// exhausted from then on.
#[pyclass(module = "iterkit_native")]
pub struct NoDuplicatesIter {
    source: Py<PyIterator>,
    key: Option<PyObject>,
    gate: DuplicateGate<PyKey>,
    name: String,
}

#[pymethods]
impl NoDuplicatesIter {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(mut slf: PyRefMut<'_, Self>, py: Python<'_>) -> PyResult<Option<PyObject>> {
        if slf.gate.is_closed() {
            return Ok(None);
        }
        let mut source = slf.source.bind(py).clone();
        let Some(element) = source.next().transpose()? else {
            return Ok(None);
        };
        let key = derive_key(py, &slf.key, &element)?;
        match slf.gate.admit(key) {
            Admit::First => Ok(Some(element.unbind())),
            Admit::Duplicate => Err(PyValueError::new_err(format!(
                "duplicate {}: {}",
                slf.name,
                element.repr()?
            ))),
            Admit::Closed => Ok(None),
        }
    }
}

#[pyfunction]
#[pyo3(signature = (iterable, key=None))]
fn is_unique_everseen(iterable: &Bound<'_, PyAny>, key: Option<PyObject>) -> PyResult<UniqueEverseenIter> {
    Ok(UniqueEverseenIter {
        source: iterable.iter()?.unbind(),
        key,
        seen: Seen::new(),
    })
}

#[pyfunction]
#[pyo3(signature = (iterable, key=None, name="item".to_string()))]
fn no_duplicates(
    iterable: &Bound<'_, PyAny>,
    key: Option<PyObject>,
    name: String,
) -> PyResult<NoDuplicatesIter> {
    Ok(NoDuplicatesIter {
        source: iterable.iter()?.unbind(),
        key,
        gate: DuplicateGate::new(),
        name,
    })
}
