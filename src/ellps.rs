use crate::internal::*;

/// An ellipsoid of revolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::new(6_378_137.0, 1. / 298.257_222_100_882_7)
    }
}

/// The tolerance below which a flattening counts as zero, i.e. the
/// ellipsoid counts as a sphere
const SPHERE_TOLERANCE: f64 = 1e-10;

impl Ellipsoid {
    /// User defined ellipsoid
    #[must_use]
    pub fn new(semimajor_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        }
    }

    /// Predefined ellipsoid, or one given as a string formatted
    /// (a, rf) tuple, e.g. "6378137, 298.25"
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        // Is it one of the few builtins?
        if let Some(index) = ELLIPSOID_LIST.iter().position(|ellps| ellps.0 == name) {
            let e = ELLIPSOID_LIST[index];
            // EPSG convention: zero reciproque flattening indicates zero flattening
            let f = if e.2 != 0.0 { 1.0 / e.2 } else { e.2 };
            return Ok(Ellipsoid::new(e.1, f));
        }

        // The "semimajor, reciproque-flattening" form, e.g. "6378137, 298.3"
        let a_and_rf = name.split(',').collect::<Vec<_>>();
        if a_and_rf.len() == 2_usize {
            if let (Ok(a), Ok(rf)) = (
                a_and_rf[0].trim().parse::<f64>(),
                a_and_rf[1].trim().parse::<f64>(),
            ) {
                let f = if rf != 0.0 { 1.0 / rf } else { rf };
                return Ok(Ellipsoid::new(a, f));
            }
        }

        Err(Error::NotFound(
            String::from(name),
            String::from(": Ellipsoid::named()"),
        ))
    }

    // ----- Geometry ------------------------------------------------------------------

    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The first eccentricity squared, *e² = f(2 - f)*
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// The first eccentricity
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    /// Is this ellipsoid effectively a sphere?
    #[must_use]
    pub fn is_sphere(&self) -> bool {
        self.f.abs() < SPHERE_TOLERANCE
    }

    /// The builtin identifier of this ellipsoid, or its "semimajor,
    /// reciproque-flattening" definition when it matches no builtin.
    /// Round-trips through [`Ellipsoid::named`].
    #[must_use]
    pub fn spec(&self) -> String {
        for (name, a, rf) in ELLIPSOID_LIST {
            let f = if rf != 0.0 { 1.0 / rf } else { rf };
            if self.a == a && self.f == f {
                return name.to_string();
            }
        }
        if self.f == 0.0 {
            return format!("{}, 0", self.a);
        }
        format!("{}, {}", self.a, 1.0 / self.f)
    }

    /// Tolerant comparison: equal semimajor axes and flattenings at the
    /// 1e-10 relative level
    #[must_use]
    pub fn is_equivalent_to(&self, other: &Ellipsoid) -> bool {
        use float_eq::float_eq;
        float_eq!(self.a, other.a, rmax <= SPHERE_TOLERANCE)
            && float_eq!(self.f, other.f, rmax <= SPHERE_TOLERANCE)
    }
}

/// Builtin ellipsoids: (identifier, semimajor axis, reciproque flattening)
#[rustfmt::skip]
const ELLIPSOID_LIST: [(&str, f64, f64); 9] = [
    ("GRS80",   6_378_137.0,   298.257_222_100_882_7),
    ("WGS84",   6_378_137.0,   298.257_223_563),
    ("intl",    6_378_388.0,   297.0),
    ("Helmert", 6_378_200.0,   298.3),
    ("clrk66",  6_378_206.4,   294.978_698_2),
    ("clrk80",  6_378_249.145, 293.465),
    ("bessel",  6_377_397.155, 299.152_812_8),
    ("krass",   6_378_245.0,   298.3),
    ("sphere",  6_370_997.0,   0.0),
];

// ----- T E S T S ---------------------------------------------------------------------
