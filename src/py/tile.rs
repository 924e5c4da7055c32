//! PyO3 bindings for slippy-tile helpers.

use pyo3::prelude::*;

use crate::tile;

#[pyfunction]
pub fn wgs84_to_tile(lon: f64, lat: f64, zoom: u32) -> (i64, i64) {
    tile::wgs84_to_tile(lon, lat, zoom)
}

#[pyfunction]
pub fn tile_to_wgs84(zoom: u32, x: i64, y: i64) -> (f64, f64) {
    tile::tile_to_wgs84(zoom, x, y)
}

/// Returns (min_lon, min_lat, max_lon, max_lat).
#[pyfunction]
pub fn tile_bounds_wgs84(zoom: u32, x: i64, y: i64) -> [f64; 4] {
    tile::tile_bounds_wgs84(zoom, x, y).to_array()
}

#[pyfunction]
pub fn tile_to_web_mercator(zoom: f64, x: f64, y: f64) -> (f64, f64) {
    tile::tile_to_web_mercator(zoom, x, y)
}

/// Returns (min_x, min_y, max_x, max_y) in metres.
#[pyfunction]
pub fn tile_bounds_web_mercator(zoom: f64, x: f64, y: f64) -> [f64; 4] {
    tile::tile_bounds_web_mercator(zoom, x, y).to_array()
}

/// Great-circle distance in metres.
#[pyfunction]
pub fn haversine_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    tile::haversine_distance_meters(lon1, lat1, lon2, lat2)
}
