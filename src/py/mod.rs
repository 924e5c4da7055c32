use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::TransformError;

mod tile;
mod transform;

impl From<TransformError> for PyErr {
    fn from(err: TransformError) -> PyErr {
        match err {
            TransformError::Convergence { .. } => PyRuntimeError::new_err(err.to_string()),
            TransformError::OutOfRange(_) | TransformError::UnknownSystem(_) => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}

/// Register all Python-visible functions and types.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform::transform, m)?)?;
    m.add_function(wrap_pyfunction!(transform::wgs84_to_gcj02, m)?)?;
    m.add_function(wrap_pyfunction!(transform::gcj02_to_wgs84, m)?)?;
    m.add_function(wrap_pyfunction!(transform::gcj02_to_wgs84_exact, m)?)?;
    m.add_function(wrap_pyfunction!(transform::gcj02_to_bd09, m)?)?;
    m.add_function(wrap_pyfunction!(transform::bd09_to_gcj02, m)?)?;
    m.add_function(wrap_pyfunction!(transform::wgs84_to_bd09, m)?)?;
    m.add_function(wrap_pyfunction!(transform::bd09_to_wgs84, m)?)?;
    m.add_function(wrap_pyfunction!(transform::wgs84_to_web_mercator, m)?)?;
    m.add_function(wrap_pyfunction!(transform::web_mercator_to_wgs84, m)?)?;
    m.add_function(wrap_pyfunction!(transform::bd09_to_bd09_mercator, m)?)?;
    m.add_function(wrap_pyfunction!(transform::bd09_mercator_to_bd09, m)?)?;
    m.add_function(wrap_pyfunction!(transform::bd09_mercator_to_wgs84, m)?)?;
    m.add_function(wrap_pyfunction!(tile::wgs84_to_tile, m)?)?;
    m.add_function(wrap_pyfunction!(tile::tile_to_wgs84, m)?)?;
    m.add_function(wrap_pyfunction!(tile::tile_bounds_wgs84, m)?)?;
    m.add_function(wrap_pyfunction!(tile::tile_to_web_mercator, m)?)?;
    m.add_function(wrap_pyfunction!(tile::tile_bounds_web_mercator, m)?)?;
    m.add_function(wrap_pyfunction!(tile::haversine_distance, m)?)?;
    Ok(())
}
