//! Pipeline: system-to-system transform chain.
//!
//! Every supported system is a datum (WGS84, GCJ02, BD09) optionally viewed
//! through a plane projection. A point is unprojected to degrees in its
//! datum, moved across datums, then projected onto the target plane.

use std::fmt;
use std::str::FromStr;

use crate::datum::{self, Gcj02Inverse};
use crate::error::TransformError;
use crate::proj::baidu_mercator::BaiduMercator;
use crate::proj::mercator::WebMercator;
use crate::proj::Projection;

/// Geodetic datum a coordinate is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Datum {
    Wgs84,
    Gcj02,
    Bd09,
}

/// A named coordinate system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoordSystem {
    /// WGS84 degrees (EPSG:4326).
    Wgs84,
    /// GCJ02 degrees.
    Gcj02,
    /// BD09 degrees.
    Bd09,
    /// Web Mercator metres over WGS84 (EPSG:3857).
    WebMercator,
    /// The provider's Mercator metres over BD09.
    Bd09Mercator,
}

impl CoordSystem {
    pub fn datum(self) -> Datum {
        match self {
            CoordSystem::Wgs84 | CoordSystem::WebMercator => Datum::Wgs84,
            CoordSystem::Gcj02 => Datum::Gcj02,
            CoordSystem::Bd09 | CoordSystem::Bd09Mercator => Datum::Bd09,
        }
    }

    /// Plane projection, `None` for geographic systems.
    fn projection(self) -> Option<&'static dyn Projection> {
        match self {
            CoordSystem::WebMercator => Some(&WebMercator),
            CoordSystem::Bd09Mercator => Some(&BaiduMercator),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CoordSystem::Wgs84 => "wgs84",
            CoordSystem::Gcj02 => "gcj02",
            CoordSystem::Bd09 => "bd09",
            CoordSystem::WebMercator => "webmercator",
            CoordSystem::Bd09Mercator => "bd09mc",
        }
    }
}

impl fmt::Display for CoordSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoordSystem {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "wgs84" | "epsg:4326" => Ok(CoordSystem::Wgs84),
            "gcj02" => Ok(CoordSystem::Gcj02),
            "bd09" | "bd09ll" => Ok(CoordSystem::Bd09),
            "webmercator" | "epsg:3857" | "webmc" => Ok(CoordSystem::WebMercator),
            "bd09mc" | "bd09mercator" => Ok(CoordSystem::Bd09Mercator),
            _ => Err(TransformError::UnknownSystem(s.to_string())),
        }
    }
}

/// A fixed source/destination pair.
#[derive(Clone, Copy, Debug)]
pub struct Pipeline {
    src: CoordSystem,
    dst: CoordSystem,
    /// When set, GCJ02 -> WGS84 uses the bisection inverse.
    inverse: Option<Gcj02Inverse>,
}

impl Pipeline {
    pub fn new(src: CoordSystem, dst: CoordSystem) -> Self {
        log::trace!("pipeline {src} -> {dst} via {:?} -> {:?}", src.datum(), dst.datum());
        Self {
            src,
            dst,
            inverse: None,
        }
    }

    /// Build from system names such as `"wgs84"` or `"EPSG:3857"`.
    pub fn from_names(src: &str, dst: &str) -> Result<Self, TransformError> {
        Ok(Self::new(src.parse()?, dst.parse()?))
    }

    /// Solve GCJ02 -> WGS84 by bisection instead of the one-step correction.
    pub fn with_exact_inverse(mut self, inverse: Gcj02Inverse) -> Self {
        self.inverse = Some(inverse);
        self
    }

    pub fn src(&self) -> CoordSystem {
        self.src
    }

    pub fn dst(&self) -> CoordSystem {
        self.dst
    }

    /// Transform one point from `src` to `dst`.
    pub fn transform(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        if self.src == self.dst {
            return Ok((x, y));
        }

        // Step 1: src coords -> degrees in the src datum
        let (lon, lat) = match self.src.projection() {
            Some(proj) => proj.inverse(x, y)?,
            None => (x, y),
        };

        // Step 2: across datums
        let (lon, lat) = self.shift_datum(lon, lat)?;

        // Step 3: degrees -> dst coords
        match self.dst.projection() {
            Some(proj) => proj.forward(lon, lat),
            None => Ok((lon, lat)),
        }
    }

    fn shift_datum(&self, lon: f64, lat: f64) -> Result<(f64, f64), TransformError> {
        match (self.src.datum(), self.dst.datum()) {
            (Datum::Wgs84, Datum::Gcj02) => Ok(datum::wgs84_to_gcj02(lon, lat)),
            (Datum::Wgs84, Datum::Bd09) => Ok(datum::wgs84_to_bd09(lon, lat)),
            (Datum::Gcj02, Datum::Wgs84) => self.gcj02_to_wgs84(lon, lat),
            (Datum::Gcj02, Datum::Bd09) => Ok(datum::gcj02_to_bd09(lon, lat)),
            (Datum::Bd09, Datum::Gcj02) => Ok(datum::bd09_to_gcj02(lon, lat)),
            (Datum::Bd09, Datum::Wgs84) => {
                let (lon, lat) = datum::bd09_to_gcj02(lon, lat);
                self.gcj02_to_wgs84(lon, lat)
            }
            _ => Ok((lon, lat)),
        }
    }

    fn gcj02_to_wgs84(&self, lon: f64, lat: f64) -> Result<(f64, f64), TransformError> {
        match &self.inverse {
            Some(inverse) => inverse.solve(lon, lat),
            None => Ok(datum::gcj02_to_wgs84(lon, lat)),
        }
    }
}

/// Transform one point between two named systems.
pub fn transform(
    src: CoordSystem,
    dst: CoordSystem,
    x: f64,
    y: f64,
) -> Result<(f64, f64), TransformError> {
    Pipeline::new(src, dst).transform(x, y)
}
