//! Gray-walk bindings.

use iterkit::gray::GrayProduct;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyTuple;

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<GrayProductIter>()?;
    m.add_function(wrap_pyfunction!(gray_product, m)?)?;
    Ok(())
}

/// Iterator of index tuples in mixed-radix reflected Gray order.
#[pyclass(module = "iterkit_native")]
pub struct GrayProductIter {
    inner: GrayProduct,
}

#[pymethods]
impl GrayProductIter {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(mut slf: PyRefMut<'_, Self>, py: Python<'_>) -> Option<Py<PyTuple>> {
        let digits = slf.inner.next_digits()?;
        Some(PyTuple::new_bound(py, digits).unbind())
    }

    /// Exact remaining count, or 0 when it does not fit in `usize`.
    fn __length_hint__(&self) -> usize {
        self.inner.size_hint().1.unwrap_or(0)
    }
}

/// Enumerate all index tuples for `radices`; negative radices raise `ValueError`.
#[pyfunction]
fn gray_product(radices: Vec<i64>) -> PyResult<GrayProductIter> {
    let inner = GrayProduct::new(&radices).map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok(GrayProductIter { inner })
}
