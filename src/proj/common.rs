//! Common helpers for projection math (band tables, polynomial evaluation,
//! longitude wrapping, latitude clamping).

/// One row of a piecewise polynomial fit.
///
/// `coeffs[0..2]` is the linear term for the x axis, `coeffs[2..9]` the
/// degree-6 polynomial for the y axis and `coeffs[9]` its normaliser.
#[derive(Clone, Copy, Debug)]
pub struct Band {
    pub threshold: f64,
    pub coeffs: [f64; 10],
}

/// Bands ordered by strictly descending threshold.
#[derive(Clone, Copy, Debug)]
pub struct BandTable {
    pub bands: &'static [Band],
}

impl BandTable {
    pub const fn new(bands: &'static [Band]) -> Self {
        Self { bands }
    }

    /// First band, most extreme first, whose threshold is `<= value`.
    pub fn at_least(&self, value: f64) -> Option<&'static Band> {
        self.bands.iter().find(|b| value >= b.threshold)
    }

    /// Southern-hemisphere pass: walks from the smallest threshold up and
    /// returns the first band with `value <= -threshold`.
    pub fn at_most_negated(&self, value: f64) -> Option<&'static Band> {
        self.bands.iter().rev().find(|b| value <= -b.threshold)
    }
}

/// Evaluate `Σ c[i]·t^i` using Horner's scheme.
pub fn polyval(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

/// Apply a band's fit to a point. Output signs follow input signs so one
/// band serves all four quadrants.
pub fn apply_band(x: f64, y: f64, band: &Band) -> (f64, f64) {
    let f = &band.coeffs;
    let out_x = f[0] + f[1] * x.abs();
    let out_y = polyval(&f[2..9], y.abs() / f[9]);
    (
        if x < 0.0 { -out_x } else { out_x },
        if y < 0.0 { -out_y } else { out_y },
    )
}

/// Wrap `value` into `[min, max]` by whole periods of `max - min`.
///
/// Non-finite input is returned unchanged.
pub fn wrap_into(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() || (min..=max).contains(&value) {
        return value;
    }
    let wrapped = min + (value - min).rem_euclid(max - min);
    // Overshooting above lands on `max`, not `min`.
    if value > max && wrapped == min {
        max
    } else {
        wrapped
    }
}

/// Clamp `value` into `[min, max]`. NaN stays NaN.
pub fn clamp_into(value: f64, min: f64, max: f64) -> f64 {
    value.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    static TEST_BANDS: [Band; 3] = [
        Band { threshold: 20.0, coeffs: [0.0; 10] },
        Band { threshold: 10.0, coeffs: [1.0; 10] },
        Band { threshold: 0.0, coeffs: [2.0; 10] },
    ];

    #[test]
    fn test_polyval() {
        // 1 + 2t + 3t²
        assert_relative_eq!(polyval(&[1.0, 2.0, 3.0], 2.0), 17.0);
        assert_relative_eq!(polyval(&[5.0], 100.0), 5.0);
        assert_relative_eq!(polyval(&[], 3.0), 0.0);
    }

    #[test]
    fn test_band_at_least() {
        let table = BandTable::new(&TEST_BANDS);
        assert_relative_eq!(table.at_least(25.0).unwrap().threshold, 20.0);
        assert_relative_eq!(table.at_least(20.0).unwrap().threshold, 20.0);
        assert_relative_eq!(table.at_least(15.0).unwrap().threshold, 10.0);
        assert_relative_eq!(table.at_least(0.0).unwrap().threshold, 0.0);
        assert!(table.at_least(-1.0).is_none());
        assert!(table.at_least(f64::NAN).is_none());
    }

    #[test]
    fn test_band_at_most_negated_hits_smallest_first() {
        let table = BandTable::new(&TEST_BANDS);
        assert_relative_eq!(table.at_most_negated(-25.0).unwrap().threshold, 0.0);
        assert!(table.at_most_negated(1.0).is_none());
    }

    #[test]
    fn test_apply_band_mirrors_signs() {
        let mut coeffs = [0.0; 10];
        coeffs[1] = 2.0;
        coeffs[3] = 1.0;
        coeffs[9] = 1.0;
        let band = Band { threshold: 0.0, coeffs };
        let (x, y) = apply_band(3.0, 4.0, &band);
        assert_relative_eq!(x, 6.0);
        assert_relative_eq!(y, 4.0);
        let (x, y) = apply_band(-3.0, -4.0, &band);
        assert_relative_eq!(x, -6.0);
        assert_relative_eq!(y, -4.0);
    }

    #[test]
    fn test_wrap_into() {
        assert_relative_eq!(wrap_into(190.0, -180.0, 180.0), -170.0);
        assert_relative_eq!(wrap_into(-190.0, -180.0, 180.0), 170.0);
        assert_relative_eq!(wrap_into(900.0, -180.0, 180.0), 180.0);
        assert_relative_eq!(wrap_into(180.0, -180.0, 180.0), 180.0);
        assert_relative_eq!(wrap_into(12.5, -180.0, 180.0), 12.5);
        assert!(wrap_into(f64::INFINITY, -180.0, 180.0).is_infinite());
    }

    #[test]
    fn test_wrap_into_far_out_of_range() {
        assert_relative_eq!(wrap_into(-540.0, -180.0, 180.0), -180.0);
        assert_relative_eq!(wrap_into(3.6e6 + 10.0, -180.0, 180.0), 10.0, epsilon = 1e-6);
        for value in [1e17, 1e20, -1e20, f64::MAX, f64::MIN] {
            let wrapped = wrap_into(value, -180.0, 180.0);
            assert!((-180.0..=180.0).contains(&wrapped), "{value} -> {wrapped}");
        }
    }

    #[test]
    fn test_clamp_into() {
        assert_relative_eq!(clamp_into(80.0, -74.0, 74.0), 74.0);
        assert_relative_eq!(clamp_into(-80.0, -74.0, 74.0), -74.0);
        assert_relative_eq!(clamp_into(31.0, -74.0, 74.0), 31.0);
        assert!(clamp_into(f64::NAN, -74.0, 74.0).is_nan());
    }
}
