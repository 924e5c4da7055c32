/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// First eccentricity squared
    pub e2: f64,
}

impl Ellipsoid {
    /// Build from the semi-major axis and the published eccentricity squared.
    ///
    /// GCJ02 ships `e2` as a literal rather than deriving it from a flattening,
    /// so the literal is kept as-is.
    pub const fn new(a: f64, e2: f64) -> Self {
        Self { a, e2 }
    }

    /// `1 - e²·sin²φ` for a latitude in radians.
    fn w2(&self, phi: f64) -> f64 {
        let s = phi.sin();
        1.0 - self.e2 * s * s
    }

    /// Meridian radius of curvature M(φ) = a(1-e²) / (1-e²sin²φ)^(3/2).
    pub fn meridian_radius(&self, phi: f64) -> f64 {
        let w2 = self.w2(phi);
        (self.a * (1.0 - self.e2)) / (w2 * w2.sqrt())
    }

    /// Prime-vertical radius of curvature N(φ) = a / sqrt(1-e²sin²φ).
    pub fn prime_vertical_radius(&self, phi: f64) -> f64 {
        self.a / self.w2(phi).sqrt()
    }
}

/// Krasovsky 1940, the ellipsoid the GCJ02 offsets are scaled against.
pub const KRASOVSKY_1940: Ellipsoid = Ellipsoid::new(6_378_245.0, 0.006_693_421_622_965_943_23);

/// Mean Earth radius used for great-circle distances (metres).
pub const MEAN_EARTH_RADIUS: f64 = 6_371_000.0;
