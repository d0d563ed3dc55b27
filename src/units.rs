//! Units of measure, and scalar values tagged with one.
//!
//! A [`Measure`] is the value type carried by operation parameters: a plain
//! `f64` paired with a [`Unit`], where the unit knows its conversion factor
//! to the corresponding SI base unit (metre, radian, unity, year).
//!
//! Unit factors are taken from PROJ <https://github.com/OSGeo/PROJ/blob/master/src/units.c>
//! and from the EPSG unit-of-measure table.

use crate::internal::*;

/// The broad classification of a unit: what kind of quantity it measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitType {
    Angular,
    Linear,
    Scale,
    Time,
    None,
}

/// A unit of measure: a name, a classification, and the factor converting
/// a value in this unit to the SI base unit of its class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit {
    pub name: &'static str,
    pub unit_type: UnitType,
    pub factor: f64,
}

impl Unit {
    /// The identity element for absent parameter values of this unit:
    /// 1.0 for proper scale factors (unity), 0.0 for everything else,
    /// including offset-like scale units such as ppm.
    pub fn identity(&self) -> f64 {
        if self.unit_type == UnitType::Scale && self.factor == 1.0 {
            return 1.0;
        }
        0.0
    }
}

/// The unit constants used throughout the engine
pub mod units {
    use super::Unit;
    use super::UnitType::*;

    const DEG_TO_RAD: f64 = 0.017453292519943295;
    const ARCSEC_TO_RAD: f64 = DEG_TO_RAD / 3600.0;

    #[rustfmt::skip]
    pub const METRE:  Unit = Unit { name: "metre",  unit_type: Linear, factor: 1.0 };
    #[rustfmt::skip]
    pub const FOOT:   Unit = Unit { name: "foot",   unit_type: Linear, factor: 0.3048 };
    #[rustfmt::skip]
    pub const US_FOOT: Unit = Unit { name: "US survey foot", unit_type: Linear, factor: 1200.0 / 3937.0 };

    #[rustfmt::skip]
    pub const RADIAN: Unit = Unit { name: "radian", unit_type: Angular, factor: 1.0 };
    #[rustfmt::skip]
    pub const DEGREE: Unit = Unit { name: "degree", unit_type: Angular, factor: DEG_TO_RAD };
    #[rustfmt::skip]
    pub const GRAD:   Unit = Unit { name: "grad",   unit_type: Angular, factor: 0.015707963267948967 };
    #[rustfmt::skip]
    pub const ARC_SECOND: Unit = Unit { name: "arc-second", unit_type: Angular, factor: ARCSEC_TO_RAD };

    #[rustfmt::skip]
    pub const UNITY:  Unit = Unit { name: "unity",  unit_type: Scale, factor: 1.0 };
    #[rustfmt::skip]
    pub const PARTS_PER_MILLION: Unit = Unit { name: "parts per million", unit_type: Scale, factor: 1e-6 };
    #[rustfmt::skip]
    pub const PARTS_PER_BILLION: Unit = Unit { name: "parts per billion", unit_type: Scale, factor: 1e-9 };

    #[rustfmt::skip]
    pub const YEAR:   Unit = Unit { name: "year",   unit_type: Time, factor: 1.0 };

    // Rate units: the per-year variants share the factor of their base unit
    #[rustfmt::skip]
    pub const METRE_PER_YEAR: Unit = Unit { name: "metre per year", unit_type: Linear, factor: 1.0 };
    #[rustfmt::skip]
    pub const MILLIMETRE_PER_YEAR: Unit = Unit { name: "millimetre per year", unit_type: Linear, factor: 0.001 };
    #[rustfmt::skip]
    pub const ARC_SECOND_PER_YEAR: Unit = Unit { name: "arc-second per year", unit_type: Angular, factor: ARCSEC_TO_RAD };
    #[rustfmt::skip]
    pub const PPM_PER_YEAR: Unit = Unit { name: "parts per million per year", unit_type: Scale, factor: 1e-6 };

    #[rustfmt::skip]
    pub const NONE:   Unit = Unit { name: "", unit_type: None, factor: 1.0 };
}

/// A scalar value tagged with its unit of measure.
///
/// `PartialEq` is bitwise on the value and exact on the unit: that is the
/// comparison the STRICT equivalence criterion wants. Use
/// [`Measure::is_equivalent_to`] for the tolerant comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measure {
    value: f64,
    unit: Unit,
}

/// The float-equality tolerance of the tolerant comparison criterion
pub(crate) const EQUIVALENT_TOLERANCE: f64 = 1e-10;

impl Measure {
    pub fn new(value: f64, unit: Unit) -> Measure {
        Measure { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The value converted to the SI base unit of its class
    pub fn si(&self) -> f64 {
        self.value * self.unit.factor
    }

    /// The value converted to another (commensurable) unit
    pub fn to(&self, unit: Unit) -> Measure {
        Measure::new(self.value * self.unit.factor / unit.factor, unit)
    }

    /// True if the value is the identity element for its unit class
    pub fn is_identity(&self) -> bool {
        equivalent(self.si(), self.unit.identity() * self.unit.factor)
    }

    /// The arithmetically negated measure. Negating a zero yields positive
    /// zero, so inverse parameters never carry a -0.0.
    pub fn negated(&self) -> Measure {
        if self.value == 0.0 {
            return Measure::new(0.0, self.unit);
        }
        Measure::new(-self.value, self.unit)
    }

    /// Tolerant comparison across commensurable units
    pub fn is_equivalent_to(&self, other: &Measure) -> bool {
        if self.unit.unit_type != other.unit.unit_type
            && self.unit.unit_type != UnitType::None
            && other.unit.unit_type != UnitType::None
        {
            return false;
        }
        equivalent(self.si(), other.si())
    }

    /// Tolerant comparison of two angular measures modulo a full turn.
    /// Used for azimuth-type parameters, where 350° and -10° agree.
    pub fn is_equivalent_to_modulo_360(&self, other: &Measure) -> bool {
        if self.unit.unit_type != UnitType::Angular || other.unit.unit_type != UnitType::Angular {
            return self.is_equivalent_to(other);
        }
        let turn = std::f64::consts::TAU;
        let diff = (self.si() - other.si()).rem_euclid(turn);
        diff.abs() <= EQUIVALENT_TOLERANCE || (turn - diff).abs() <= EQUIVALENT_TOLERANCE
    }
}

/// Relative float equality at the 1e-10 level, with an absolute fallback
/// around zero
pub(crate) fn equivalent(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs());
    if scale == 0.0 {
        return true;
    }
    (a - b).abs() <= EQUIVALENT_TOLERANCE * scale.max(1.0)
}

// ----- T E S T S ---------------------------------------------------------------------
