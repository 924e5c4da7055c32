pub mod baidu_mercator;
pub mod common;
pub mod ellipsoid;
pub mod mercator;

use crate::error::TransformError;

/// Trait for plane projections supporting forward and inverse transforms.
///
/// Unlike general-purpose projection libraries, both sides use the units the
/// map providers publish: degrees on the sphere, metres on the plane.
pub trait Projection: Send + Sync {
    /// Forward: (lon_deg, lat_deg) -> (x, y)
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), TransformError>;

    /// Inverse: (x, y) -> (lon_deg, lat_deg)
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError>;
}
