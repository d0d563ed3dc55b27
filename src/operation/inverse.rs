//! Closed-form and generic inversion of coordinate operations.
//!
//! The families with an exact algebraic inverse (translations, offsets,
//! unit changes, axis swaps, grid shifts) get one. The rest - the full
//! Helmert repertoire among them - get a generic [`InverseOperation`]
//! wrapper, which compiles by running the forward pipeline backwards, or a
//! sign-negated approximation through [`approximate_inverse`] when the
//! caller prefers a single operation over a wrapper.
//!
//! Inverses are memoized in the context: asking twice for the inverse of
//! the same handle yields the same handle, and inverting an inverse yields
//! the original.

use crate::internal::*;
use crate::registry::builtins::codes;

/// Methods whose inverse negates every parameter value
const NEGATE_ALL_METHODS: [u32; 9] = [
    codes::GEOCENTRIC_TRANSLATIONS_GEOCENTRIC,
    codes::GEOCENTRIC_TRANSLATIONS_GEOG2D,
    codes::GEOCENTRIC_TRANSLATIONS_GEOG3D,
    codes::MOLODENSKY,
    codes::ABRIDGED_MOLODENSKY,
    codes::LONGITUDE_ROTATION,
    codes::GEOGRAPHIC2D_OFFSETS,
    codes::GEOGRAPHIC3D_OFFSETS,
    codes::VERTICAL_OFFSET,
];

/// Methods that are their own inverse, parameter-wise
const SELF_INVERSE_METHODS: [u32; 3] = [
    codes::HEIGHT_DEPTH_REVERSAL,
    codes::AXIS_ORDER_REVERSAL_2D,
    codes::AXIS_ORDER_REVERSAL_3D,
];

/// Pipeline steps that interpolate in a grid. Their inverse keeps the grid
/// and interpolates the other way; the registry has no codes for that, so
/// the inverse method is named by prefix.
const GRID_STEPS: [&str; 6] = [
    "hgridshift",
    "vgridshift",
    "xyzgridshift",
    "deformation",
    "tinshift",
    "defmodel",
];

const INVERSE_PREFIX: &str = "Inverse of ";

/// The inverse of the operation behind `handle`, memoized in the context.
///
/// Families with a closed-form inverse yield a new single operation;
/// anything else yields a generic wrapper around the forward handle.
/// Asking for the inverse of an inverse yields the forward handle back.
pub fn inverse<C: Context + ?Sized>(ctx: &mut C, handle: OpHandle) -> Result<OpHandle, Error> {
    if let Some(cached) = ctx.cached_inverse(handle) {
        return Ok(cached);
    }

    let op = ctx.operation(handle)?.clone();
    let inverted = match &op {
        CoordinateOperation::Inverse(wrapper) => {
            let forward = wrapper.forward;
            ctx.pair_inverses(handle, forward);
            return Ok(forward);
        }
        CoordinateOperation::Concatenated(concatenated) => {
            // Reverse the chain, inverting each member
            let mut steps = Vec::with_capacity(concatenated.steps.len());
            for step in concatenated.steps.iter().rev() {
                steps.push(inverse(ctx, *step)?);
            }
            CoordinateOperation::Concatenated(ConcatenatedOperation {
                base: inverted_base(&concatenated.base),
                steps,
            })
        }
        CoordinateOperation::Conversion(single) => invert_single(ctx, handle, single, |op| {
            CoordinateOperation::Conversion(op)
        })?,
        CoordinateOperation::Transformation(single) => invert_single(ctx, handle, single, |op| {
            CoordinateOperation::Transformation(op)
        })?,
        CoordinateOperation::PointMotion(single) => invert_single(ctx, handle, single, |op| {
            CoordinateOperation::PointMotion(op)
        })?,
    };

    let inverse_handle = ctx.add(inverted);
    ctx.pair_inverses(handle, inverse_handle);
    Ok(inverse_handle)
}

fn invert_single<C: Context + ?Sized>(
    ctx: &mut C,
    forward_handle: OpHandle,
    single: &SingleOperation,
    rewrap: impl FnOnce(SingleOperation) -> CoordinateOperation,
) -> Result<CoordinateOperation, Error> {
    match closed_form(ctx.registry(), single) {
        Some((method, values)) => Ok(rewrap(SingleOperation {
            base: inverted_base(&single.base),
            method,
            values,
        })),
        None => {
            trace!("'{}': no closed form inverse, wrapping", single.base.name);
            Ok(CoordinateOperation::Inverse(InverseOperation {
                base: inverted_base(&single.base),
                forward: forward_handle,
            }))
        }
    }
}

/// The base of the inverse: name prefixed (or unprefixed), ends swapped,
/// metadata carried over
fn inverted_base(base: &OperationBase) -> OperationBase {
    let mut inverted = base.clone();
    inverted.name = inverse_name(&base.name);
    if let (Some(source), Some(target)) = (base.source_crs(), base.target_crs()) {
        inverted.set_crs(target, source);
    }
    inverted.source_epoch = base.target_epoch;
    inverted.target_epoch = base.source_epoch;
    inverted
}

fn inverse_name(name: &str) -> String {
    match name.strip_prefix(INVERSE_PREFIX) {
        Some(forward_name) => forward_name.to_string(),
        None => format!("{INVERSE_PREFIX}{name}"),
    }
}

/// The closed-form inverse of a single operation, if its family has one
fn closed_form(
    registry: &MethodRegistry,
    op: &SingleOperation,
) -> Option<(OperationMethod, Vec<GeneralParameterValue>)> {
    let code = op.method.code;

    if NEGATE_ALL_METHODS.contains(&code) {
        return Some((op.method.clone(), negate_all(&op.values)));
    }

    if SELF_INVERSE_METHODS.contains(&code) {
        return Some((op.method.clone(), op.values.clone()));
    }

    if code == codes::CHANGE_OF_VERTICAL_UNIT {
        let factor = *op.measure("Unit conversion scalar", codes::UNIT_CONVERSION_SCALAR)?;
        // The degenerate zero factor has no reciprocal; its inverse keeps
        // the zero
        let reciprocal = if factor.value() == 0.0 {
            0.0
        } else {
            1.0 / factor.value()
        };
        let values = vec![GeneralParameterValue::Single(OperationParameterValue::measure(
            "Unit conversion scalar",
            codes::UNIT_CONVERSION_SCALAR,
            Measure::new(reciprocal, *factor.unit()),
        ))];
        return Some((op.method.clone(), values));
    }

    // Grid methods: same grid, interpolated the other way. Inverting an
    // already-inverted one restores the registry method.
    if let Some(forward_name) = op.method.name.strip_prefix(INVERSE_PREFIX) {
        if let Some(mapping) = registry.find_method(0, forward_name) {
            if GRID_STEPS.contains(&mapping.step) {
                return Some((OperationMethod::from_mapping(mapping), op.values.clone()));
            }
        }
    }
    if let Some(mapping) = registry.find_method(code, &op.method.name) {
        if GRID_STEPS.contains(&mapping.step) {
            let method = OperationMethod::new(
                &format!("{INVERSE_PREFIX}{}", mapping.name),
                0,
                op.method.parameters.clone(),
            );
            return Some((method, op.values.clone()));
        }
        // A no-op is its own inverse
        if mapping.step == "noop" {
            return Some((op.method.clone(), op.values.clone()));
        }
    }

    None
}

fn negate_all(values: &[GeneralParameterValue]) -> Vec<GeneralParameterValue> {
    values
        .iter()
        .map(|value| match value {
            GeneralParameterValue::Single(v) => GeneralParameterValue::Single(negate_one(v)),
            GeneralParameterValue::Group(name, members) => GeneralParameterValue::Group(
                name.clone(),
                members.iter().map(negate_one).collect(),
            ),
        })
        .collect()
}

fn negate_one(v: &OperationParameterValue) -> OperationParameterValue {
    let value = match &v.value {
        ParameterValue::Measure(m) => ParameterValue::Measure(m.negated()),
        other => other.clone(),
    };
    OperationParameterValue::new(v.parameter.clone(), value)
}

/// A sign-negated rendition of a Helmert-family operation, usable as its
/// inverse. The boolean tells whether the rendition is exact: it is when
/// every rotation term and the scale difference vanish, and only
/// approximate (to first order) otherwise. `None` for operations outside
/// the Helmert family.
pub fn approximate_inverse(
    ctx: &dyn Context,
    handle: OpHandle,
) -> Option<(CoordinateOperation, bool)> {
    let op = ctx.operation(handle).ok()?;
    let single = op.as_single()?;
    let code = single.method.code;

    let helmert_family = [
        codes::POSITION_VECTOR_GEOCENTRIC,
        codes::POSITION_VECTOR_GEOG2D,
        codes::POSITION_VECTOR_GEOG3D,
        codes::COORDINATE_FRAME_GEOCENTRIC,
        codes::COORDINATE_FRAME_GEOG2D,
        codes::COORDINATE_FRAME_GEOG3D,
        codes::TIME_DEPENDENT_POSITION_VECTOR_GEOCENTRIC,
        codes::TIME_DEPENDENT_POSITION_VECTOR_GEOG2D,
        codes::TIME_DEPENDENT_POSITION_VECTOR_GEOG3D,
        codes::TIME_DEPENDENT_COORDINATE_FRAME_GEOCENTRIC,
        codes::TIME_DEPENDENT_COORDINATE_FRAME_GEOG2D,
        codes::TIME_DEPENDENT_COORDINATE_FRAME_GEOG3D,
        codes::MOLODENSKY_BADEKAS_GEOCENTRIC,
        codes::MOLODENSKY_BADEKAS_GEOG2D,
    ];
    if !helmert_family.contains(&code) {
        return None;
    }

    let angular_and_scale = [
        codes::X_AXIS_ROTATION,
        codes::Y_AXIS_ROTATION,
        codes::Z_AXIS_ROTATION,
        codes::SCALE_DIFFERENCE,
        codes::RATE_X_AXIS_ROTATION,
        codes::RATE_Y_AXIS_ROTATION,
        codes::RATE_Z_AXIS_ROTATION,
        codes::RATE_SCALE_DIFFERENCE,
    ];
    let exact = single.singles().all(|v| {
        if !angular_and_scale.contains(&v.parameter.code) {
            return true;
        }
        match &v.value {
            ParameterValue::Measure(m) => m.is_identity(),
            _ => false,
        }
    });

    // The evaluation point and the reference epoch stay put
    let keep = [
        codes::EVALUATION_POINT_ORDINATE_1,
        codes::EVALUATION_POINT_ORDINATE_2,
        codes::EVALUATION_POINT_ORDINATE_3,
        codes::PARAMETER_REFERENCE_EPOCH,
    ];
    let values = single
        .values
        .iter()
        .map(|value| match value {
            GeneralParameterValue::Single(v) if !keep.contains(&v.parameter.code) => {
                GeneralParameterValue::Single(negate_one(v))
            }
            other => other.clone(),
        })
        .collect();

    let negated = SingleOperation {
        base: inverted_base(&single.base),
        method: single.method.clone(),
        values,
    };
    Some((CoordinateOperation::Transformation(negated), exact))
}

// ----- T E S T S ---------------------------------------------------------------------
