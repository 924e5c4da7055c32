//! GCJ02 <-> BD09: a fixed shift plus a small polar warp.
//!
//! The warp terms are evaluated on the shifted point in one direction and the
//! unshifted point in the other, so a round trip leaves a residual of up to
//! ~1e-6° (about 0.1 m).

use std::f64::consts::PI;

use super::gcj02::{gcj02_to_wgs84, gcj02_to_wgs84_exact, wgs84_to_gcj02};
use crate::error::TransformError;

const X_PI: f64 = PI * 3000.0 / 180.0;
const SHIFT_LON: f64 = 0.0065;
const SHIFT_LAT: f64 = 0.006;

/// BD09 -> GCJ02.
pub fn bd09_to_gcj02(lon: f64, lat: f64) -> (f64, f64) {
    let x = lon - SHIFT_LON;
    let y = lat - SHIFT_LAT;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    (z * theta.cos(), z * theta.sin())
}

/// GCJ02 -> BD09.
pub fn gcj02_to_bd09(lon: f64, lat: f64) -> (f64, f64) {
    let z = (lon * lon + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lon) + 0.000003 * (lon * X_PI).cos();
    (z * theta.cos() + SHIFT_LON, z * theta.sin() + SHIFT_LAT)
}

/// BD09 -> WGS84 through GCJ02, using the approximate GCJ02 inverse.
pub fn bd09_to_wgs84(lon: f64, lat: f64) -> (f64, f64) {
    let (lon, lat) = bd09_to_gcj02(lon, lat);
    gcj02_to_wgs84(lon, lat)
}

/// BD09 -> WGS84 through GCJ02, using the bisection inverse.
pub fn bd09_to_wgs84_exact(lon: f64, lat: f64) -> Result<(f64, f64), TransformError> {
    let (lon, lat) = bd09_to_gcj02(lon, lat);
    gcj02_to_wgs84_exact(lon, lat)
}

/// WGS84 -> BD09 through GCJ02.
pub fn wgs84_to_bd09(lon: f64, lat: f64) -> (f64, f64) {
    let (lon, lat) = wgs84_to_gcj02(lon, lat);
    gcj02_to_bd09(lon, lat)
}
