//! Coordinate operations: the things the engine models, compares, inverts
//! and compiles.
//!
//! [`CoordinateOperation`] is a closed enumeration - conversions,
//! transformations, point motion operations, concatenations and lazy
//! inverses. Operations live in a [`crate::Context`] arena and are referred
//! to by copyable [`OpHandle`]s, so a concatenation holds handles rather
//! than owning (or weakly referencing) its steps.

use crate::internal::*;
use uuid::Uuid;

pub mod concatenated;
pub mod equivalence;
pub mod gridsubst;
pub mod inverse;
pub mod single;
pub mod transformation;

pub use single::SingleOperation;

/// Identification of a coordinate operation registered in a context.
/// Copyable and cheap; the operation itself stays in the arena.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct OpHandle(Uuid);
impl OpHandle {
    pub fn new() -> Self {
        OpHandle(Uuid::new_v4())
    }
}

/// The material common to all operation subtypes: name, CRS attachments,
/// accuracy and the assorted metadata flags
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperationBase {
    pub name: String,

    source: Option<CrsHandle>,
    target: Option<CrsHandle>,
    /// Grid methods may interpolate in a third CRS
    pub interpolation: Option<CrsHandle>,

    /// For operations between epoch-bound CRSs
    pub source_epoch: Option<f64>,
    pub target_epoch: Option<f64>,

    /// Positional accuracies in metre, as stated by the registry. Several
    /// entries when the registry states several; empty when unknown.
    pub accuracy: Vec<f64>,

    /// Rough guess rather than registry material
    pub ballpark: bool,
    /// Time-dependent operations need a coordinate epoch to evaluate
    pub requires_epoch: bool,

    pub version: Option<String>,
}

impl OperationBase {
    pub fn new(name: &str) -> OperationBase {
        OperationBase {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Attach source and target CRS. They come as a pair: an operation with
    /// only one end attached is meaningless, so the setter takes both.
    pub fn set_crs(&mut self, source: CrsHandle, target: CrsHandle) {
        self.source = Some(source);
        self.target = Some(target);
    }

    pub fn source_crs(&self) -> Option<CrsHandle> {
        self.source
    }

    pub fn target_crs(&self) -> Option<CrsHandle> {
        self.target
    }
}

/// The closed set of operation subtypes
#[derive(Clone, Debug, PartialEq)]
pub enum CoordinateOperation {
    /// CRS-change by definition: projections, unit and axis changes.
    /// Exact by construction, no accuracy entries.
    Conversion(SingleOperation),
    /// CRS-change by measurement: datum shifts, grid shifts. Carries
    /// accuracy and an operation version.
    Transformation(SingleOperation),
    /// Motion of points within one CRS over time
    PointMotion(SingleOperation),
    /// A chain of operations applied in sequence
    Concatenated(ConcatenatedOperation),
    /// The as-yet-uncomputed inverse of another operation
    Inverse(InverseOperation),
}

impl CoordinateOperation {
    pub fn base(&self) -> &OperationBase {
        match self {
            CoordinateOperation::Conversion(op) => &op.base,
            CoordinateOperation::Transformation(op) => &op.base,
            CoordinateOperation::PointMotion(op) => &op.base,
            CoordinateOperation::Concatenated(op) => &op.base,
            CoordinateOperation::Inverse(op) => &op.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut OperationBase {
        match self {
            CoordinateOperation::Conversion(op) => &mut op.base,
            CoordinateOperation::Transformation(op) => &mut op.base,
            CoordinateOperation::PointMotion(op) => &mut op.base,
            CoordinateOperation::Concatenated(op) => &mut op.base,
            CoordinateOperation::Inverse(op) => &mut op.base,
        }
    }

    /// The single-operation payload, for the three subtypes that have one
    pub fn as_single(&self) -> Option<&SingleOperation> {
        match self {
            CoordinateOperation::Conversion(op) => Some(op),
            CoordinateOperation::Transformation(op) => Some(op),
            CoordinateOperation::PointMotion(op) => Some(op),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }
}

/// A chain of operations, applied first-to-last. The steps live in the
/// context arena; the concatenation holds their handles.
#[derive(Clone, Debug, PartialEq)]
pub struct ConcatenatedOperation {
    pub base: OperationBase,
    pub steps: Vec<OpHandle>,
}

/// The inverse of an operation that has no closed-form inverse: the forward
/// operation, wrapped with source and target swapped. Compiles by compiling
/// the forward pipeline under inversion.
#[derive(Clone, Debug, PartialEq)]
pub struct InverseOperation {
    pub base: OperationBase,
    pub forward: OpHandle,
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::authoring::*;

    #[test]
    fn base_crs_invariant() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let wgs84 = ctx.add_crs(Crs::geographic2d(
            "WGS 84",
            "World Geodetic System 1984",
            Ellipsoid::named("WGS84")?,
        ));
        let ed50 = ctx.add_crs(Crs::geographic2d(
            "ED50",
            "European Datum 1950",
            Ellipsoid::named("intl")?,
        ));

        let mut base = OperationBase::new("ED50 to WGS 84 (14)");
        assert!(base.source_crs().is_none() && base.target_crs().is_none());
        base.set_crs(ed50, wgs84);
        assert_eq!(base.source_crs(), Some(ed50));
        assert_eq!(base.target_crs(), Some(wgs84));
        Ok(())
    }

    #[test]
    fn handles_are_distinct() {
        assert_ne!(OpHandle::new(), OpHandle::new());
    }
}
