//! WGS84 <-> GCJ02.
//!
//! The forward direction is a closed-form warp: an empirical offset in
//! "metres" evaluated around (105°E, 35°N), scaled to degrees with the
//! Krasovsky radii of curvature. It has no closed-form inverse, so two are
//! offered: a one-step correction (~1–2 m) and a bisection, finished with
//! fixed-point updates, that runs until the forward image matches the target
//! to a tolerance.

use std::f64::consts::PI;

use crate::error::TransformError;
use crate::proj::ellipsoid::KRASOVSKY_1940;

/// Rough bounding box the offset applies in; everything else is left as-is.
const CHINA_LON: (f64, f64) = (72.004, 137.8347);
const CHINA_LAT: (f64, f64) = (0.8293, 55.8271);

/// True unless the point lies strictly inside the GCJ02 bounding box.
pub fn is_outside_china(lon: f64, lat: f64) -> bool {
    !(lon > CHINA_LON.0 && lon < CHINA_LON.1 && lat > CHINA_LAT.0 && lat < CHINA_LAT.1)
}

/// Raw offsets `(dlat, dlon)` for a point relative to (105°E, 35°N).
fn offset(x: f64, y: f64) -> (f64, f64) {
    let abs_x = x.abs().sqrt();
    let x_pi = x * PI;
    let y_pi = y * PI;

    let d = 20.0 * (6.0 * x_pi).sin() + 20.0 * (2.0 * x_pi).sin();
    let mut lat = d;
    let mut lon = d;

    lat += 20.0 * y_pi.sin() + 40.0 * (y_pi / 3.0).sin();
    lon += 20.0 * x_pi.sin() + 40.0 * (x_pi / 3.0).sin();

    lat += 160.0 * (y_pi / 12.0).sin() + 320.0 * (y_pi / 30.0).sin();
    lon += 150.0 * (x_pi / 12.0).sin() + 300.0 * (x_pi / 30.0).sin();

    lat *= 2.0 / 3.0;
    lon *= 2.0 / 3.0;

    lat += -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * abs_x;
    lon += 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * abs_x;

    (lat, lon)
}

/// WGS84 -> GCJ02. Identity outside China.
pub fn wgs84_to_gcj02(lon: f64, lat: f64) -> (f64, f64) {
    if is_outside_china(lon, lat) {
        return (lon, lat);
    }
    let (d_lat, d_lon) = offset(lon - 105.0, lat - 35.0);
    let phi = lat / 180.0 * PI;

    let m = KRASOVSKY_1940.meridian_radius(phi);
    let n = KRASOVSKY_1940.prime_vertical_radius(phi);

    let d_lat = (d_lat * 180.0) / (m * PI);
    let d_lon = (d_lon * 180.0) / (n * phi.cos() * PI);
    (lon + d_lon, lat + d_lat)
}

/// GCJ02 -> WGS84, first-order correction `2·p - forward(p)`.
///
/// Not a true inverse: expect 1–2 m of error. Use [`gcj02_to_wgs84_exact`]
/// when that matters.
pub fn gcj02_to_wgs84(lon: f64, lat: f64) -> (f64, f64) {
    let (mg_lon, mg_lat) = wgs84_to_gcj02(lon, lat);
    (lon * 2.0 - mg_lon, lat * 2.0 - mg_lat)
}

/// Tunables for the bisection inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gcj02Inverse {
    /// Stop once the forward image is within this many degrees on both axes.
    pub tolerance: f64,
    /// Half-width of the initial search box around the target (degrees).
    pub initial_span: f64,
    /// Give up with [`TransformError::Convergence`] after this many steps.
    pub max_iterations: usize,
}

impl Default for Gcj02Inverse {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            initial_span: 0.01,
            max_iterations: 100,
        }
    }
}

impl Gcj02Inverse {
    pub fn new(tolerance: f64, initial_span: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            initial_span,
            max_iterations,
        }
    }

    /// Find the WGS84 point whose GCJ02 image is `(lon, lat)`.
    ///
    /// Each axis is bisected independently, which relies on the forward
    /// transform increasing monotonically along both axes near the target.
    /// Near the sine-term ripples one axis can settle on the wrong half and
    /// the bracket collapses before the residual drops under `tolerance`, so
    /// the remaining step budget goes to fixed-point updates
    /// `w -= forward(w) - target`. The closest point seen is returned once
    /// its residual is under `tolerance` on both axes.
    pub fn solve(&self, lon: f64, lat: f64) -> Result<(f64, f64), TransformError> {
        let residual = |w_lon: f64, w_lat: f64| {
            let (gcj_lon, gcj_lat) = wgs84_to_gcj02(w_lon, w_lat);
            (gcj_lon - lon, gcj_lat - lat)
        };

        let (mut lon_lo, mut lon_hi) = (lon - self.initial_span, lon + self.initial_span);
        let (mut lat_lo, mut lat_hi) = (lat - self.initial_span, lat + self.initial_span);
        let mut guess = (lon, lat);
        let mut steps = 0;

        while steps < self.max_iterations {
            steps += 1;
            let mid = ((lon_lo + lon_hi) / 2.0, (lat_lo + lat_hi) / 2.0);
            if mid == guess && steps > 1 {
                // bracket collapsed to a single float
                break;
            }
            guess = mid;

            let (d_lon, d_lat) = residual(mid.0, mid.1);
            if d_lon.abs() < self.tolerance && d_lat.abs() < self.tolerance {
                break;
            }

            if d_lat > 0.0 {
                lat_hi = mid.1;
            } else {
                lat_lo = mid.1;
            }
            if d_lon > 0.0 {
                lon_hi = mid.0;
            } else {
                lon_lo = mid.0;
            }
        }

        // NaN on either axis must never count as converged
        let max_abs = |(d_lon, d_lat): (f64, f64)| {
            if d_lon.abs() >= d_lat.abs() || d_lon.is_nan() {
                d_lon.abs()
            } else {
                d_lat.abs()
            }
        };
        let mut best = guess;
        let mut best_err = max_abs(residual(guess.0, guess.1));

        let mut w = guess;
        while steps < self.max_iterations && best_err >= self.tolerance * 1e-3 {
            steps += 1;
            let (d_lon, d_lat) = residual(w.0, w.1);
            w = (w.0 - d_lon, w.1 - d_lat);
            let err = max_abs(residual(w.0, w.1));
            if err < best_err {
                best = w;
                best_err = err;
            }
        }

        if best_err < self.tolerance {
            Ok(best)
        } else {
            Err(TransformError::Convergence {
                iterations: self.max_iterations,
                lon,
                lat,
            })
        }
    }
}

/// GCJ02 -> WGS84 by bisection with the default [`Gcj02Inverse`] settings.
pub fn gcj02_to_wgs84_exact(lon: f64, lat: f64) -> Result<(f64, f64), TransformError> {
    Gcj02Inverse::default().solve(lon, lat)
}
