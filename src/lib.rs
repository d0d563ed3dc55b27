//! *A coordinate operation engine.*
//!
//! Given the description of a coordinate operation - a named method plus a
//! set of numeric parameters, as found in a geodetic registry or built
//! programmatically - `opforge` will
//!
//! - model the operation abstractly, as a method identity paired with an
//!   ordered list of parameter values,
//! - decide whether two differently parameterized descriptions are
//!   mathematically equivalent,
//! - derive the inverse operation in closed form, where the operation family
//!   defines one, and
//! - compile the description into an executable pipeline of primitive steps
//!   (`cart`, `helmert`, `molodensky`, grid shifts, axis and unit
//!   adaptations), rendered in the engine's textual pipeline notation.
//!
//! The engine is computation-only: it never applies a pipeline to actual
//! coordinates, and never performs I/O by itself. Registry tables are
//! immutable once constructed and may be shared freely between threads;
//! a [`Context`] and the operations it owns belong to a single logical
//! thread at a time.

mod context;
mod crs;
mod ellps;
mod method;
mod operation;
mod pipeline;
mod registry;
mod units;

pub use crate::context::minimal::Minimal;
pub use crate::context::Context;
pub use crate::context::GridAlternative;
pub use crate::crs::Crs;
pub use crate::crs::CrsHandle;
pub use crate::crs::CrsKind;
pub use crate::ellps::Ellipsoid;
pub use crate::method::GeneralParameterValue;
pub use crate::method::OperationMethod;
pub use crate::method::OperationParameter;
pub use crate::method::OperationParameterValue;
pub use crate::method::ParameterValue;
pub use crate::operation::concatenated::concatenate;
pub use crate::operation::equivalence::Criterion;
pub use crate::operation::gridsubst::substitute_grid_alternatives;
pub use crate::operation::inverse::approximate_inverse;
pub use crate::operation::inverse::inverse;
pub use crate::operation::ConcatenatedOperation;
pub use crate::operation::CoordinateOperation;
pub use crate::operation::InverseOperation;
pub use crate::operation::OpHandle;
pub use crate::operation::OperationBase;
pub use crate::operation::SingleOperation;
pub use crate::pipeline::compiler::compile;
pub use crate::pipeline::compiler::compile_to_text;
pub use crate::pipeline::PipelineBuilder;
pub use crate::pipeline::Step;
pub use crate::registry::MethodMapping;
pub use crate::registry::MethodRegistry;
pub use crate::registry::ParamMapping;
pub use crate::units::Measure;
pub use crate::units::Unit;
pub use crate::units::UnitType;

/// The bread-and-butter of the library: The enumeration of all error states
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("error: {0}")]
    General(&'static str),

    /// Structural misuse at construction time: parameter/declaration count
    /// mismatch, inconsistent CRS kinds, empty concatenation, and friends.
    /// Always a caller error; never retried.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A requested capability is not implemented for the given operation
    /// shape (e.g. a closed-form inverse where the family defines none).
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// The pipeline compiler met an operation it cannot render. Always
    /// propagated; never silently degraded to a partial pipeline.
    #[error("cannot compile: {0}")]
    Formatting(String),

    #[error("'{0}' not found{1}")]
    NotFound(String, String),

    #[error("syntax error: '{0}'")]
    Syntax(String),

    #[error("missing required parameter '{0}'")]
    MissingParam(String),

    #[error("cannot parse '{1}' as parameter '{0}'")]
    BadParam(String, String),
}

/// `Fwd`: Indicate that a two-way step is executed in the forward direction.
/// `Inv`: ... in the inverse direction.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Direction {
    Fwd,
    Inv,
}

pub use Direction::Fwd;
pub use Direction::Inv;

/// Preamble for authoring engine extensions and user code alike:
/// `use opforge::authoring::*` brings all engine types, the builtin
/// tables, and the ambient logging macros into scope.
pub mod authoring {
    pub use crate::ConcatenatedOperation;
    pub use crate::Context;
    pub use crate::CoordinateOperation;
    pub use crate::Criterion;
    pub use crate::Crs;
    pub use crate::CrsHandle;
    pub use crate::CrsKind;
    pub use crate::Direction;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::Fwd;
    pub use crate::GeneralParameterValue;
    pub use crate::GridAlternative;
    pub use crate::Inv;
    pub use crate::InverseOperation;
    pub use crate::Measure;
    pub use crate::MethodMapping;
    pub use crate::MethodRegistry;
    pub use crate::Minimal;
    pub use crate::OpHandle;
    pub use crate::OperationBase;
    pub use crate::OperationMethod;
    pub use crate::OperationParameter;
    pub use crate::OperationParameterValue;
    pub use crate::ParamMapping;
    pub use crate::ParameterValue;
    pub use crate::PipelineBuilder;
    pub use crate::SingleOperation;
    pub use crate::Step;
    pub use crate::Unit;
    pub use crate::UnitType;

    pub use crate::approximate_inverse;
    pub use crate::compile;
    pub use crate::compile_to_text;
    pub use crate::concatenate;
    pub use crate::inverse;
    pub use crate::substitute_grid_alternatives;

    pub use crate::operation::transformation::*;
    pub use crate::registry::builtins;
    pub use crate::registry::names::is_equivalent_name;
    pub use crate::units::units;

    // All new contexts are supposed to support these
    pub use std::collections::BTreeMap;
    pub use std::collections::BTreeSet;

    // External material
    pub use log::error;
    pub use log::info;
    pub use log::trace;
    pub use log::warn;
}

/// Preamble for crate-internal modules
pub(crate) mod internal {
    pub use std::collections::BTreeMap;
    pub use std::collections::BTreeSet;

    pub use log::error;
    pub use log::trace;
    pub use log::warn;

    pub use crate::context::Context;
    pub use crate::context::GridAlternative;
    pub use crate::crs::Crs;
    pub use crate::crs::CrsHandle;
    pub use crate::crs::CrsKind;
    pub use crate::ellps::Ellipsoid;
    pub use crate::method::GeneralParameterValue;
    pub use crate::method::OperationMethod;
    pub use crate::method::OperationParameter;
    pub use crate::method::OperationParameterValue;
    pub use crate::method::ParameterValue;
    pub use crate::operation::equivalence::Criterion;
    pub use crate::operation::ConcatenatedOperation;
    pub use crate::operation::CoordinateOperation;
    pub use crate::operation::InverseOperation;
    pub use crate::operation::OpHandle;
    pub use crate::operation::OperationBase;
    pub use crate::operation::SingleOperation;
    pub use crate::pipeline::PipelineBuilder;
    pub use crate::registry::builtins;
    pub use crate::registry::names::is_equivalent_name;
    pub use crate::registry::MethodMapping;
    pub use crate::registry::MethodRegistry;
    pub use crate::registry::ParamMapping;
    pub use crate::units::units;
    pub use crate::units::Measure;
    pub use crate::units::Unit;
    pub use crate::units::UnitType;
    pub use crate::Direction;
    pub use crate::Error;
    pub use crate::Fwd;
    pub use crate::Inv;
}
