//! Web Mercator (EPSG:3857, spherical) in the degree-scaled form tile
//! services publish:
//!   forward: x = λ·R/180, y = ln(tan((90 + φ)·π/360)) / (π/180) · R/180
//!   inverse: λ = x/R·180, φ = 2·atan(exp(y/R·π)) - π/2
//! with R = 20037508.34, the half-width of the full extent.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::TransformError;
use crate::proj::Projection;

/// Half-width of the Web Mercator square (metres).
pub const WEB_MERCATOR_EXTENT: f64 = 20_037_508.34;

/// WGS84 degrees -> Web Mercator metres.
pub fn wgs84_to_web_mercator(lon: f64, lat: f64) -> (f64, f64) {
    let x = lon * WEB_MERCATOR_EXTENT / 180.0;
    let y = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0);
    (x, y * WEB_MERCATOR_EXTENT / 180.0)
}

/// Web Mercator metres -> WGS84 degrees.
///
/// An `x` outside `[-R, R]` (or NaN) is not a Web Mercator coordinate and is
/// handed back untouched.
pub fn web_mercator_to_wgs84(x: f64, y: f64) -> (f64, f64) {
    if !(-WEB_MERCATOR_EXTENT..=WEB_MERCATOR_EXTENT).contains(&x) {
        return (x, y);
    }
    let lon = x / WEB_MERCATOR_EXTENT * 180.0;
    let lat = y / WEB_MERCATOR_EXTENT * 180.0;
    let lat = (2.0 * (lat * PI / 180.0).exp().atan() - FRAC_PI_2).to_degrees();
    (lon, lat)
}

/// Web Mercator projection (EPSG:3857).
#[derive(Clone, Copy, Debug, Default)]
pub struct WebMercator;

impl WebMercator {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for WebMercator {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), TransformError> {
        Ok(wgs84_to_web_mercator(lon, lat))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        Ok(web_mercator_to_wgs84(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_web_mercator_origin() {
        let (x, y) = wgs84_to_web_mercator(0.0, 0.0);
        assert_relative_eq!(x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_web_mercator_roundtrip() {
        let cases: &[(f64, f64)] = &[
            (0.0, 0.0),
            (10.0, 45.0),
            (-73.9857, 40.7484), // NYC
            (139.6917, 35.6895), // Tokyo
            (121.4737, 31.2304), // Shanghai
            (-180.0, 0.0),
            (180.0, 0.0),
        ];
        for &(lon, lat) in cases {
            let (x, y) = wgs84_to_web_mercator(lon, lat);
            let (lon2, lat2) = web_mercator_to_wgs84(x, y);
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_web_mercator_extent() {
        let (x, _) = wgs84_to_web_mercator(180.0, 0.0);
        assert_relative_eq!(x, WEB_MERCATOR_EXTENT, epsilon = 1e-6);
        // The square is bounded at ≈85.0511°
        let (_, y) = wgs84_to_web_mercator(0.0, 85.051_128_779_806_59);
        assert_relative_eq!(y, WEB_MERCATOR_EXTENT, epsilon = 0.01);
    }

    #[test]
    fn test_inverse_passthrough_outside_extent() {
        let (x, y) = web_mercator_to_wgs84(30_000_000.0, 0.0);
        assert_eq!((x, y), (30_000_000.0, 0.0));
        let (x, y) = web_mercator_to_wgs84(-20_037_509.0, 123.0);
        assert_eq!((x, y), (-20_037_509.0, 123.0));
        let (x, _) = web_mercator_to_wgs84(f64::NAN, 0.0);
        assert!(x.is_nan());
    }

    #[test]
    fn test_projection_trait() {
        let proj = WebMercator::new();
        let (x, y) = proj.forward(116.404, 39.915).unwrap();
        let (lon, lat) = proj.inverse(x, y).unwrap();
        assert_relative_eq!(lon, 116.404, epsilon = 1e-9);
        assert_relative_eq!(lat, 39.915, epsilon = 1e-9);
    }
}
