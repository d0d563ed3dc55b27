//! Substitution of grid files by registered alternatives.
//!
//! Registries refer to grids by their original distribution names; an
//! installation typically carries repackaged renditions (or none at all).
//! A context can register an alternative per grid name; this module rewrites
//! operations to use it. An alternative may be *reversed*: packaged with
//! source and target interchanged, in which case the substituted operation
//! is the grid-renamed inverse of the reversed one, so the advertised
//! direction stays that of the original operation.

use crate::internal::*;
use crate::operation::inverse::inverse;

/// The operation behind `handle`, with every grid file the context knows an
/// alternative for replaced by that alternative.
///
/// Infallible by design: an operation without grids, a grid without an
/// alternative, or an alternative identical to the original all yield the
/// input handle back, untouched.
pub fn substitute_grid_alternatives<C: Context + ?Sized>(
    ctx: &mut C,
    handle: OpHandle,
) -> OpHandle {
    let Ok(op) = ctx.operation(handle) else {
        return handle;
    };
    let op = op.clone();
    let Some(single) = op.as_single() else {
        return handle;
    };

    // What would change?
    let mut substitutions: Vec<(String, GridAlternative)> = Vec::new();
    for file in single.grid_filenames() {
        let Some(alternative) = ctx.grid_alternative(file) else {
            continue;
        };
        if alternative.name == file {
            continue;
        }
        trace!("substituting '{}' for '{}'", alternative.name, file);
        substitutions.push((file.to_string(), alternative));
    }
    if substitutions.is_empty() {
        return handle;
    }

    let mut substituted = single.clone();
    for value in &mut substituted.values {
        let GeneralParameterValue::Single(v) = value else {
            continue;
        };
        let ParameterValue::Filename(file) = &mut v.value else {
            continue;
        };
        if let Some((_, alternative)) = substitutions.iter().find(|(old, _)| old == file) {
            *file = alternative.name.clone();
        }
    }

    let alternatives: Vec<&str> = substitutions
        .iter()
        .map(|(_, alt)| alt.name.as_str())
        .collect();
    let name = format!("{} (using {})", single.base.name, alternatives.join(", "));

    if !substitutions.iter().any(|(_, alt)| alt.reversed) {
        substituted.base.name = name;
        return ctx.add(rewrap(&op, substituted));
    }

    // A reversed alternative maps target to source. Register the reversed
    // rendition and hand out its (grid-renamed) inverse, which runs in the
    // direction the original operation advertised.
    substituted.base.name = format!("Inverse of {name}");
    if let (Some(source), Some(target)) =
        (single.base.source_crs(), single.base.target_crs())
    {
        substituted.base.set_crs(target, source);
    }
    substituted.base.source_epoch = single.base.target_epoch;
    substituted.base.target_epoch = single.base.source_epoch;

    let reversed = ctx.add(rewrap(&op, substituted));
    inverse(ctx, reversed).unwrap_or(handle)
}

/// Keep the subtype of the original operation
fn rewrap(original: &CoordinateOperation, single: SingleOperation) -> CoordinateOperation {
    match original {
        CoordinateOperation::Conversion(_) => CoordinateOperation::Conversion(single),
        CoordinateOperation::PointMotion(_) => CoordinateOperation::PointMotion(single),
        _ => CoordinateOperation::Transformation(single),
    }
}

// ----- T E S T S ---------------------------------------------------------------------
