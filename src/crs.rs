//! The engine's view of a coordinate reference system.
//!
//! The full CRS/datum object model lives outside this crate. What the
//! operation engine needs from a CRS is deliberately small: its nature
//! (geographic, geocentric, projected, vertical), its axis count and order,
//! its native unit, and its ellipsoid. [`Crs`] carries exactly that.
//!
//! CRS instances live in an arena owned by the [`Context`](crate::Context);
//! operations refer to them through copyable [`CrsHandle`]s and never own
//! them. The arena never drops a CRS as long as the context lives, so a
//! handle obtained from a context remains valid for that context's lifetime.

use crate::internal::*;

/// Arena identifier of a CRS node. Operations store handles, not CRSs.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct CrsHandle(uuid::Uuid);

impl CrsHandle {
    pub fn new() -> Self {
        CrsHandle(uuid::Uuid::new_v4())
    }
}

impl Default for CrsHandle {
    fn default() -> Self {
        CrsHandle(uuid::Uuid::new_v4())
    }
}

/// The nature of a CRS, as far as operation modelling is concerned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrsKind {
    Geographic2D,
    Geographic3D,
    Geocentric,
    Projected,
    Vertical,
}

impl CrsKind {
    pub fn is_geographic(&self) -> bool {
        matches!(self, CrsKind::Geographic2D | CrsKind::Geographic3D)
    }

    pub fn is_geocentric(&self) -> bool {
        *self == CrsKind::Geocentric
    }

    pub fn is_vertical(&self) -> bool {
        *self == CrsKind::Vertical
    }

    pub fn axis_count(&self) -> usize {
        match self {
            CrsKind::Geographic2D | CrsKind::Projected => 2,
            CrsKind::Geographic3D | CrsKind::Geocentric => 3,
            CrsKind::Vertical => 1,
        }
    }
}

/// A coordinate reference system, reduced to what the operation engine
/// consumes: kind, datum identity, ellipsoid, native angular unit and
/// geographic axis order.
#[derive(Clone, Debug)]
pub struct Crs {
    pub name: String,
    pub kind: CrsKind,
    pub datum: String,
    pub ellipsoid: Ellipsoid,
    /// The native unit of the horizontal axes: angular for geographic CRS,
    /// linear for the rest
    pub unit: Unit,
    /// Geographic convention: latitude before longitude? The registry
    /// default for geographic CRS is true
    pub latitude_first: bool,
}

impl Crs {
    pub fn geographic2d(name: &str, datum: &str, ellipsoid: Ellipsoid) -> Crs {
        Crs {
            name: name.to_string(),
            kind: CrsKind::Geographic2D,
            datum: datum.to_string(),
            ellipsoid,
            unit: units::DEGREE,
            latitude_first: true,
        }
    }

    pub fn geographic3d(name: &str, datum: &str, ellipsoid: Ellipsoid) -> Crs {
        Crs {
            kind: CrsKind::Geographic3D,
            ..Crs::geographic2d(name, datum, ellipsoid)
        }
    }

    pub fn geocentric(name: &str, datum: &str, ellipsoid: Ellipsoid) -> Crs {
        Crs {
            name: name.to_string(),
            kind: CrsKind::Geocentric,
            datum: datum.to_string(),
            ellipsoid,
            unit: units::METRE,
            latitude_first: false,
        }
    }

    pub fn projected(name: &str, datum: &str, ellipsoid: Ellipsoid) -> Crs {
        Crs {
            kind: CrsKind::Projected,
            ..Crs::geocentric(name, datum, ellipsoid)
        }
    }

    pub fn vertical(name: &str, datum: &str) -> Crs {
        Crs {
            name: name.to_string(),
            kind: CrsKind::Vertical,
            datum: datum.to_string(),
            ellipsoid: Ellipsoid::default(),
            unit: units::METRE,
            latitude_first: false,
        }
    }

    pub fn axis_count(&self) -> usize {
        self.kind.axis_count()
    }

    /// Fuzzy equivalence, as used when checking that concatenation members
    /// chain: same kind, equivalent ellipsoid, and a name or datum match
    /// tolerant of punctuation and case
    pub fn is_equivalent_to(&self, other: &Crs) -> bool {
        if self.kind != other.kind {
            return false;
        }
        if self.kind != CrsKind::Vertical && !self.ellipsoid.is_equivalent_to(&other.ellipsoid) {
            return false;
        }
        is_equivalent_name(&self.name, &other.name) || is_equivalent_name(&self.datum, &other.datum)
    }
}

/// Do two optional CRS handles resolve to equivalent CRS nodes?
/// Two absent CRSs count as equivalent; an absent vs. a present one does not.
pub(crate) fn handles_equivalent(
    ctx: &dyn Context,
    a: Option<CrsHandle>,
    b: Option<CrsHandle>,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            if a == b {
                return true;
            }
            let (Ok(a), Ok(b)) = (ctx.crs(a), ctx.crs(b)) else {
                return false;
            };
            a.is_equivalent_to(b)
        }
        _ => false,
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Minimal;

    #[test]
    fn kinds() {
        assert_eq!(CrsKind::Geographic2D.axis_count(), 2);
        assert_eq!(CrsKind::Geocentric.axis_count(), 3);
        assert!(CrsKind::Geographic3D.is_geographic());
        assert!(!CrsKind::Geocentric.is_geographic());
        assert!(CrsKind::Vertical.is_vertical());
    }

    #[test]
    fn equivalence() -> Result<(), Error> {
        let ed50 = Crs::geographic2d("ED50", "European Datum 1950", Ellipsoid::named("intl")?);
        let ed50_dialect =
            Crs::geographic2d("ED_1950", "European Datum 1950", Ellipsoid::named("intl")?);
        let wgs84 = Crs::geographic2d("WGS 84", "World Geodetic System 1984", Ellipsoid::named("WGS84")?);

        assert!(ed50.is_equivalent_to(&ed50_dialect));
        assert!(!ed50.is_equivalent_to(&wgs84));

        // A 2D and a 3D rendition of the same datum do not chain
        let ed50_3d = Crs::geographic3d("ED50", "European Datum 1950", Ellipsoid::named("intl")?);
        assert!(!ed50.is_equivalent_to(&ed50_3d));
        Ok(())
    }

    #[test]
    fn handles() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let intl = Ellipsoid::named("intl")?;
        let a = ctx.add_crs(Crs::geographic2d("ED50", "European Datum 1950", intl));
        let b = ctx.add_crs(Crs::geographic2d("ED-50", "European Datum 1950", intl));

        assert!(handles_equivalent(&ctx, Some(a), Some(a)));
        assert!(handles_equivalent(&ctx, Some(a), Some(b)));
        assert!(handles_equivalent(&ctx, None, None));
        assert!(!handles_equivalent(&ctx, Some(a), None));
        Ok(())
    }
}
