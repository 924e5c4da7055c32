#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod datum;
pub mod error;
pub mod pipeline;
pub mod proj;
pub mod tile;
#[cfg(feature = "python")]
mod py;

pub use datum::{
    bd09_to_gcj02, bd09_to_wgs84, bd09_to_wgs84_exact, gcj02_to_bd09, gcj02_to_wgs84,
    gcj02_to_wgs84_exact, is_outside_china, wgs84_to_bd09, wgs84_to_gcj02,
};
pub use error::TransformError;
pub use proj::baidu_mercator::{
    bd09_mercator_to_bd09, bd09_mercator_to_wgs84, bd09_to_bd09_mercator, wgs84_to_bd09_mercator,
};
pub use proj::mercator::{web_mercator_to_wgs84, wgs84_to_web_mercator};
pub use tile::{
    haversine_distance_meters, tile_bounds_web_mercator, tile_bounds_wgs84, tile_to_web_mercator,
    tile_to_wgs84, wgs84_to_tile,
};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
