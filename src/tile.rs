//! Slippy-map tile addressing (z/x/y) and great-circle distance.
//!
//! Tiles follow the usual power-of-two pyramid: x grows east from -180°,
//! y grows south from the top of the Web Mercator square.

use std::f64::consts::PI;

use crate::proj::ellipsoid::MEAN_EARTH_RADIUS;
use crate::proj::mercator::WEB_MERCATOR_EXTENT;

/// Axis-aligned box spanned by a tile's top-left corner (x, y) and the
/// top-left corner of its diagonal neighbour (x+1, y+1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl TileBounds {
    fn from_corners(top_left: (f64, f64), bottom_right: (f64, f64)) -> Self {
        Self {
            min_x: top_left.0,
            min_y: bottom_right.1,
            max_x: bottom_right.0,
            max_y: top_left.1,
        }
    }

    /// `[min_x, min_y, max_x, max_y]`.
    pub fn to_array(self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    #[cfg(test)]
    fn center(&self) -> (f64, f64) {
        ((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }
}

/// Tile corner (x, y) at `zoom` in Web Mercator metres. Fractional tile
/// coordinates address points inside a tile.
pub fn tile_to_web_mercator(zoom: f64, x: f64, y: f64) -> (f64, f64) {
    let res = WEB_MERCATOR_EXTENT * 2.0 / 2f64.powf(zoom);
    (x * res - WEB_MERCATOR_EXTENT, -y * res + WEB_MERCATOR_EXTENT)
}

/// Web Mercator bounds of tile (x, y).
pub fn tile_bounds_web_mercator(zoom: f64, x: f64, y: f64) -> TileBounds {
    TileBounds::from_corners(
        tile_to_web_mercator(zoom, x, y),
        tile_to_web_mercator(zoom, x + 1.0, y + 1.0),
    )
}

/// Tile containing a WGS84 point. Floors, so points on a tile edge belong to
/// the tile east/south of it.
pub fn wgs84_to_tile(lon: f64, lat: f64, zoom: u32) -> (i64, i64) {
    let n = 2f64.powi(zoom as i32);
    let phi = lat * PI / 180.0;
    let x = ((lon + 180.0) / 360.0 * n).floor();
    let y = ((1.0 - (phi.tan() + 1.0 / phi.cos()).ln() / PI) / 2.0 * n).floor();
    (x as i64, y as i64)
}

/// WGS84 position of tile corner (x, y).
pub fn tile_to_wgs84(zoom: u32, x: i64, y: i64) -> (f64, f64) {
    let size = 2f64.powi(zoom as i32);
    let n = PI - 2.0 * PI * y as f64 / size;
    let lon = x as f64 / size * 360.0 - 180.0;
    let lat = (0.5 * (n.exp() - (-n).exp())).atan().to_degrees();
    (lon, lat)
}

/// WGS84 bounds of tile (x, y).
pub fn tile_bounds_wgs84(zoom: u32, x: i64, y: i64) -> TileBounds {
    TileBounds::from_corners(tile_to_wgs84(zoom, x, y), tile_to_wgs84(zoom, x + 1, y + 1))
}

/// Haversine distance in metres on a sphere of radius 6 371 km.
pub fn haversine_distance_meters(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * MEAN_EARTH_RADIUS * a.sqrt().atan2((1.0 - a).sqrt())
}
