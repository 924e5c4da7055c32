//! PyO3 bindings for single-point datum and projection transforms.

use pyo3::prelude::*;

use crate::datum::{self, Gcj02Inverse};
use crate::pipeline::Pipeline;
use crate::proj::{baidu_mercator, mercator};

/// Transform one point between two named coordinate systems.
///
/// Args:
///     src: Source system ("wgs84", "gcj02", "bd09", "EPSG:3857", "bd09mc").
///     dst: Destination system, same names as `src`.
///     x: Longitude in degrees or easting in metres.
///     y: Latitude in degrees or northing in metres.
///     exact: Use the bisection inverse for GCJ02 -> WGS84.
///
/// Returns:
///     Tuple (x, y) in the destination system.
#[pyfunction]
#[pyo3(signature = (src, dst, x, y, exact=false))]
pub fn transform(src: &str, dst: &str, x: f64, y: f64, exact: bool) -> PyResult<(f64, f64)> {
    let mut pipeline = Pipeline::from_names(src, dst)?;
    if exact {
        pipeline = pipeline.with_exact_inverse(Gcj02Inverse::default());
    }
    Ok(pipeline.transform(x, y)?)
}

#[pyfunction]
pub fn wgs84_to_gcj02(lon: f64, lat: f64) -> (f64, f64) {
    datum::wgs84_to_gcj02(lon, lat)
}

/// Approximate GCJ02 -> WGS84 (1–2 m error).
#[pyfunction]
pub fn gcj02_to_wgs84(lon: f64, lat: f64) -> (f64, f64) {
    datum::gcj02_to_wgs84(lon, lat)
}

/// GCJ02 -> WGS84 by bisection. Raises RuntimeError if it fails to converge.
#[pyfunction]
#[pyo3(signature = (lon, lat, tolerance=1e-6, max_iterations=100))]
pub fn gcj02_to_wgs84_exact(
    lon: f64,
    lat: f64,
    tolerance: f64,
    max_iterations: usize,
) -> PyResult<(f64, f64)> {
    let inverse = Gcj02Inverse {
        tolerance,
        max_iterations,
        ..Gcj02Inverse::default()
    };
    Ok(inverse.solve(lon, lat)?)
}

#[pyfunction]
pub fn gcj02_to_bd09(lon: f64, lat: f64) -> (f64, f64) {
    datum::gcj02_to_bd09(lon, lat)
}

#[pyfunction]
pub fn bd09_to_gcj02(lon: f64, lat: f64) -> (f64, f64) {
    datum::bd09_to_gcj02(lon, lat)
}

#[pyfunction]
pub fn wgs84_to_bd09(lon: f64, lat: f64) -> (f64, f64) {
    datum::wgs84_to_bd09(lon, lat)
}

#[pyfunction]
pub fn bd09_to_wgs84(lon: f64, lat: f64) -> (f64, f64) {
    datum::bd09_to_wgs84(lon, lat)
}

#[pyfunction]
pub fn wgs84_to_web_mercator(lon: f64, lat: f64) -> (f64, f64) {
    mercator::wgs84_to_web_mercator(lon, lat)
}

/// Web Mercator -> WGS84. Values with |x| beyond the extent come back unchanged.
#[pyfunction]
pub fn web_mercator_to_wgs84(x: f64, y: f64) -> (f64, f64) {
    mercator::web_mercator_to_wgs84(x, y)
}

#[pyfunction]
pub fn bd09_to_bd09_mercator(lon: f64, lat: f64) -> PyResult<(f64, f64)> {
    Ok(baidu_mercator::bd09_to_bd09_mercator(lon, lat)?)
}

#[pyfunction]
pub fn bd09_mercator_to_bd09(x: f64, y: f64) -> PyResult<(f64, f64)> {
    Ok(baidu_mercator::bd09_mercator_to_bd09(x, y)?)
}

#[pyfunction]
pub fn bd09_mercator_to_wgs84(x: f64, y: f64) -> PyResult<(f64, f64)> {
    Ok(baidu_mercator::bd09_mercator_to_wgs84(x, y)?)
}
