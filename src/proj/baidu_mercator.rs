//! BD09 Mercator, the map provider's own plane, reached from BD09 degrees
//! through a piecewise polynomial fit rather than a closed-form projection.
//!
//! Both directions share `common::apply_band`; they differ only in which
//! band table is consulted and how the band is chosen:
//!   degrees -> metres: lon wrapped into [-180, 180], lat clamped to ±74,
//!                      band picked by latitude (`LL_BANDS`)
//!   metres -> degrees: band picked by |y| (`MC_BANDS`)

use crate::datum;
use crate::error::TransformError;
use crate::proj::common::{apply_band, clamp_into, wrap_into, Band, BandTable};
use crate::proj::Projection;

/// Latitude limit of the provider's plane.
const MAX_LAT: f64 = 74.0;

static LL_BANDS: [Band; 6] = [
    Band {
        threshold: 75.0,
        coeffs: [
            -0.0015702102444, 111320.7020616939, 1704480524535203.0, -10338987376042340.0,
            26112667856603880.0, -35149669176653700.0, 26595700718403920.0,
            -10725012454188240.0, 1800819912950474.0, 82.5,
        ],
    },
    Band {
        threshold: 60.0,
        coeffs: [
            0.0008277824516172526, 111320.7020463578, 647795574.6671607, -4082003173.641316,
            10774905663.51142, -15171875531.51559, 12053065338.62167, -5124939663.577472,
            913311935.9512032, 67.5,
        ],
    },
    Band {
        threshold: 45.0,
        coeffs: [
            0.00337398766765, 111320.7020202162, 4481351.045890365, -23393751.19931662,
            79682215.47186455, -115964993.2797253, 97236711.15602145, -43661946.33752821,
            8477230.501135234, 52.5,
        ],
    },
    Band {
        threshold: 30.0,
        coeffs: [
            0.00220636496208, 111320.7020209128, 51751.86112841131, 3796837.749470245,
            992013.7397791013, -1221952.21711287, 1340652.697009075, -620943.6990984312,
            144416.9293806241, 37.5,
        ],
    },
    Band {
        threshold: 15.0,
        coeffs: [
            -0.0003441963504368392, 111320.7020576856, 278.2353980772752, 2485758.690035394,
            6070.750963243378, 54821.18345352118, 9540.606633304236, -2710.55326746645,
            1405.483844121726, 22.5,
        ],
    },
    Band {
        threshold: 0.0,
        coeffs: [
            -0.0003218135878613132, 111320.7020701615, 0.00369383431289, 823725.6402795718,
            0.46104986909093, 2351.343141331292, 1.58060784298199, 8.77738589078284,
            0.37238884252424, 7.45,
        ],
    },
];

static MC_BANDS: [Band; 6] = [
    Band {
        threshold: 12890594.86,
        coeffs: [
            1.410526172116255e-8, 0.00000898305509648872, -1.9939833816331, 200.9824383106796,
            -187.2403703815547, 91.6087516669843, -23.38765649603339, 2.57121317296198,
            -0.03801003308653, 17337981.2,
        ],
    },
    Band {
        threshold: 8362377.87,
        coeffs: [
            -7.435856389565537e-9, 0.000008983055097726239, -0.78625201886289, 96.32687599759846,
            -1.85204757529826, -59.36935905485877, 47.40033549296737, -16.50741931063887,
            2.28786674699375, 10260144.86,
        ],
    },
    Band {
        threshold: 5591021.0,
        coeffs: [
            -3.030883460898826e-8, 0.00000898305509983578, 0.30071316287616, 59.74293618442277,
            7.357984074871, -25.38371002664745, 13.45380521110908, -3.29883767235584,
            0.32710905363475, 6856817.37,
        ],
    },
    Band {
        threshold: 3481989.83,
        coeffs: [
            -1.981981304930552e-8, 0.000008983055099779535, 0.03278182852591, 40.31678527705744,
            0.65659298677277, -4.44255534477492, 0.85341911805263, 0.12923347998204,
            -0.04625736007561, 4482777.06,
        ],
    },
    Band {
        threshold: 1678043.12,
        coeffs: [
            3.09191371068437e-9, 0.000008983055096812155, 0.00006995724062, 23.10934304144901,
            -0.00023663490511, -0.6321817810242, -0.00663494467273, 0.03430082397953,
            -0.00466043876332, 2555164.4,
        ],
    },
    Band {
        threshold: 0.0,
        coeffs: [
            2.890871144776878e-9, 0.000008983055095805407, -3.068298e-8, 7.47137025468032,
            -0.00000353937994, -0.02145144861037, -0.00001234426596, 0.00010322952773,
            -0.00000323890364, 826088.5,
        ],
    },
];

/// Which way a point is travelling through the fit; each direction owns one
/// band table and one selection rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandDirection {
    /// BD09 degrees -> metres, selected by latitude.
    LatLngToMeters,
    /// Metres -> BD09 degrees, selected by |y|.
    MetersToLatLng,
}

impl BandDirection {
    pub fn table(self) -> BandTable {
        match self {
            BandDirection::LatLngToMeters => BandTable::new(&LL_BANDS),
            BandDirection::MetersToLatLng => BandTable::new(&MC_BANDS),
        }
    }

    /// Pick the band for `key` (signed latitude or |y|).
    ///
    /// Southern latitudes miss the first pass and fall through to the
    /// negated pass, which walks up from the 0° band; every negative
    /// latitude therefore lands in the equatorial band, as the provider's
    /// own encoder does.
    pub fn select(self, key: f64) -> Result<&'static Band, TransformError> {
        let table = self.table();
        let band = match self {
            BandDirection::LatLngToMeters => {
                table.at_least(key).or_else(|| table.at_most_negated(key))
            }
            BandDirection::MetersToLatLng => table.at_least(key),
        };
        band.ok_or_else(|| TransformError::OutOfRange(format!("no {self:?} band for {key}")))
    }
}

/// BD09 degrees -> BD09 Mercator metres.
pub fn bd09_to_bd09_mercator(lon: f64, lat: f64) -> Result<(f64, f64), TransformError> {
    if !lon.is_finite() || !lat.is_finite() {
        return Err(TransformError::OutOfRange(format!(
            "non-finite BD09 coordinate ({lon}, {lat})"
        )));
    }
    let lon = wrap_into(lon, -180.0, 180.0);
    let lat = clamp_into(lat, -MAX_LAT, MAX_LAT);
    let band = BandDirection::LatLngToMeters.select(lat)?;
    Ok(apply_band(lon, lat, band))
}

/// BD09 Mercator metres -> BD09 degrees.
///
/// Only the band lookup uses |y|; the fit itself keeps the input's signs.
pub fn bd09_mercator_to_bd09(x: f64, y: f64) -> Result<(f64, f64), TransformError> {
    let band = BandDirection::MetersToLatLng.select(y.abs())?;
    Ok(apply_band(x, y, band))
}

/// BD09 Mercator metres -> WGS84 degrees.
pub fn bd09_mercator_to_wgs84(x: f64, y: f64) -> Result<(f64, f64), TransformError> {
    let (lon, lat) = bd09_mercator_to_bd09(x, y)?;
    Ok(datum::bd09_to_wgs84(lon, lat))
}

/// WGS84 degrees -> BD09 Mercator metres.
pub fn wgs84_to_bd09_mercator(lon: f64, lat: f64) -> Result<(f64, f64), TransformError> {
    let (lon, lat) = datum::wgs84_to_bd09(lon, lat);
    bd09_to_bd09_mercator(lon, lat)
}

/// The provider's Mercator plane over BD09 degrees.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaiduMercator;

impl BaiduMercator {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for BaiduMercator {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), TransformError> {
        bd09_to_bd09_mercator(lon, lat)
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        bd09_mercator_to_bd09(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_point_shanghai() {
        let (x, y) = bd09_to_bd09_mercator(121.431863, 31.027647).unwrap();
        assert_relative_eq!(x, 13_517_880.239, epsilon = 1.0);
        assert_relative_eq!(y, 3_614_113.325, epsilon = 1.0);
    }

    #[test]
    fn test_reference_point_beijing() {
        let (x, y) = bd09_to_bd09_mercator(116.404, 39.915).unwrap();
        assert_relative_eq!(x, 12_958_175.0, epsilon = 1.0);
        assert_relative_eq!(y, 4_825_923.77, epsilon = 1.0);
    }

    #[test]
    fn test_roundtrip_northern_hemisphere() {
        let cases: &[(f64, f64)] = &[
            (121.431863, 31.027647),
            (116.404, 39.915),
            (126.63, 45.75),
            (113.27, 23.13),
            (87.62, 43.82),
            (-73.99, 40.75),
            (10.0, 65.0),
        ];
        for &(lon, lat) in cases {
            let (x, y) = bd09_to_bd09_mercator(lon, lat).unwrap();
            let (lon2, lat2) = bd09_mercator_to_bd09(x, y).unwrap();
            assert_relative_eq!(lon2, lon, epsilon = 5e-5);
            assert_relative_eq!(lat2, lat, epsilon = 5e-5);
        }
    }

    #[test]
    fn test_southern_latitudes_use_equatorial_band() {
        let equatorial = &LL_BANDS[5];
        for lat in [-0.5, -20.0, -33.5, -60.0] {
            let band = BandDirection::LatLngToMeters.select(lat).unwrap();
            assert!(std::ptr::eq(band, equatorial), "lat {lat}");
        }
        let (x, y) = bd09_to_bd09_mercator(-73.9, -33.5).unwrap();
        assert_relative_eq!(x, -8_226_599.883, epsilon = 1e-2);
        assert_relative_eq!(y, -3_937_658.768, epsilon = 1e-2);
    }

    #[test]
    fn test_latitude_clamped_and_longitude_wrapped() {
        let clamped = bd09_to_bd09_mercator(100.0, 89.0).unwrap();
        let at_limit = bd09_to_bd09_mercator(100.0, 74.0).unwrap();
        assert_relative_eq!(clamped.1, at_limit.1);

        let wrapped = bd09_to_bd09_mercator(100.0 + 360.0, 30.0).unwrap();
        let plain = bd09_to_bd09_mercator(100.0, 30.0).unwrap();
        assert_relative_eq!(wrapped.0, plain.0, epsilon = 1e-6);
    }

    #[test]
    fn test_huge_longitude_wraps_without_hanging() {
        let edge = bd09_to_bd09_mercator(180.0, 30.0).unwrap();
        for lon in [1e17, 1e20, -1e20] {
            let (x, y) = bd09_to_bd09_mercator(lon, 30.0).unwrap();
            assert!(x.abs() <= edge.0.abs() + 1e-6, "{lon} -> {x}");
            assert_relative_eq!(y, edge.1);
        }
    }

    #[test]
    fn test_meters_band_is_symmetric() {
        let (lon, lat) = bd09_mercator_to_bd09(13_517_880.0, 3_614_113.0).unwrap();
        let (lon_n, lat_n) = bd09_mercator_to_bd09(-13_517_880.0, -3_614_113.0).unwrap();
        assert_relative_eq!(lon, -lon_n);
        assert_relative_eq!(lat, -lat_n);
        assert!(lon > 0.0 && lat > 0.0);
    }

    #[test]
    fn test_nan_is_out_of_range() {
        assert!(matches!(
            bd09_mercator_to_bd09(0.0, f64::NAN),
            Err(TransformError::OutOfRange(_))
        ));
        assert!(matches!(
            bd09_to_bd09_mercator(f64::NAN, 30.0),
            Err(TransformError::OutOfRange(_))
        ));
        assert!(matches!(
            bd09_to_bd09_mercator(120.0, f64::INFINITY),
            Err(TransformError::OutOfRange(_))
        ));
        assert!(BandDirection::LatLngToMeters.select(f64::NAN).is_err());
    }

    #[test]
    fn test_mercator_to_wgs84_composition() {
        let (x, y) = bd09_to_bd09_mercator(121.431863, 31.027647).unwrap();
        let (lon, lat) = bd09_mercator_to_wgs84(x, y).unwrap();
        let (bd_lon, bd_lat) = bd09_mercator_to_bd09(x, y).unwrap();
        let expected = datum::bd09_to_wgs84(bd_lon, bd_lat);
        assert_eq!((lon, lat), expected);
        // BD09 sits a few hundred metres off WGS84 in Shanghai
        assert!((lon - 121.431863).abs() < 0.02);
        assert!((lat - 31.027647).abs() < 0.02);
    }

    #[test]
    fn test_wgs84_to_bd09_mercator_roundtrip() {
        let (x, y) = wgs84_to_bd09_mercator(121.4737, 31.2304).unwrap();
        let (lon, lat) = bd09_mercator_to_wgs84(x, y).unwrap();
        // Two approximate inverses stacked: a few metres at most
        assert_relative_eq!(lon, 121.4737, epsilon = 1e-4);
        assert_relative_eq!(lat, 31.2304, epsilon = 1e-4);
    }

    #[test]
    fn test_projection_trait() {
        let proj = BaiduMercator::new();
        let (x, y) = proj.forward(116.404, 39.915).unwrap();
        let (lon, lat) = proj.inverse(x, y).unwrap();
        assert_relative_eq!(lon, 116.404, epsilon = 1e-5);
        assert_relative_eq!(lat, 39.915, epsilon = 1e-5);
    }
}
