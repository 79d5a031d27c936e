#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_counts<'py>(raw_counts: &Bound<'py, PyAny>) -> PyResult<Vec<(u32, i64)>> {
    // 1-D numpy int64 frequency vector: outcomes implied as 0..n.
    if let Ok(arr_ro) = raw_counts.extract::<PyReadonlyArray1<i64>>() {
        if let Ok(slice) = arr_ro.as_slice() {
            return Ok(slice.iter().enumerate().map(|(i, &f)| (i as u32, f)).collect());
        }
    }

    // Explicit (outcome, frequency) pairs.
    if let Ok(pairs) = raw_counts.extract::<Vec<(u32, i64)>>() {
        return Ok(pairs);
    }

    // Bare frequency sequence: outcomes implied as 0..n.
    let freqs: Vec<i64> = raw_counts.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a sequence of (outcome, frequency) pairs, a 1-D numpy.ndarray of int64 \
             frequencies, or a sequence of int frequencies",
        )
    })?;
    Ok(freqs.iter().enumerate().map(|(i, &f)| (i as u32, f)).collect())
}

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_probabilities<'py>(raw_probs: &Bound<'py, PyAny>) -> PyResult<Vec<f64>> {
    if let Ok(arr_ro) = raw_probs.extract::<PyReadonlyArray1<f64>>() {
        if let Ok(slice) = arr_ro.as_slice() {
            return Ok(slice.to_vec());
        }
    }

    raw_probs.extract::<Vec<f64>>().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray or sequence of float64 probabilities")
    })
}
