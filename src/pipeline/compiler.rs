//! Compilation of coordinate operations into pipeline steps.
//!
//! Every operation family maps onto a fixed skeleton of primitive steps.
//! The interesting one is the geographic-domain Helmert family: the actual
//! rotation happens in cartesian space, so the skeleton brackets the
//! `helmert` step between `cart` steps (and, for 2D CRS, a `push`/`pop`
//! pair keeping a synthetic third coordinate out of the result), with
//! `adapt` steps translating between the CRS axis conventions and the
//! internal order at both ends.
//!
//! Compilation is all-or-nothing: an operation the compiler cannot render
//! is a [`Error::Formatting`] error, never a partial pipeline.

use super::PipelineBuilder;
use crate::internal::*;
use crate::registry::builtins::codes;

/// Append the pipeline rendition of `op` to `builder`
pub fn compile(
    ctx: &dyn Context,
    op: &CoordinateOperation,
    builder: &mut PipelineBuilder,
) -> Result<(), Error> {
    match op {
        CoordinateOperation::Concatenated(concatenated) => {
            for step in &concatenated.steps {
                compile(ctx, ctx.operation(*step)?, builder)?;
            }
            Ok(())
        }
        CoordinateOperation::Inverse(wrapper) => {
            builder.start_inversion();
            compile(ctx, ctx.operation(wrapper.forward)?, builder)?;
            builder.stop_inversion();
            Ok(())
        }
        CoordinateOperation::Conversion(single)
        | CoordinateOperation::Transformation(single)
        | CoordinateOperation::PointMotion(single) => compile_single(ctx, op, single, builder),
    }
}

/// The pipeline text of `op`, simplified
pub fn compile_to_text(ctx: &dyn Context, op: &CoordinateOperation) -> Result<String, Error> {
    let mut builder = PipelineBuilder::new();
    compile(ctx, op, &mut builder)?;
    builder.simplify();
    Ok(builder.build())
}

fn compile_single(
    ctx: &dyn Context,
    op: &CoordinateOperation,
    single: &SingleOperation,
    builder: &mut PipelineBuilder,
) -> Result<(), Error> {
    // Grid methods inverted by renaming compile as the forward method
    // under an inversion bracket
    if single.method.code == 0 {
        if let Some(forward_name) = single.method.name.strip_prefix("Inverse of ") {
            if let Some(mapping) = ctx.registry().find_method(0, forward_name) {
                builder.start_inversion();
                emit(ctx, op, single, mapping, builder)?;
                builder.stop_inversion();
                return Ok(());
            }
        }
    }

    let Some(mapping) = ctx.registry().find_method(single.method.code, &single.method.name)
    else {
        warn!("cannot compile '{}': unknown method", single.base.name);
        return Err(Error::Formatting(format!(
            "unknown method '{}'",
            single.method.name
        )));
    };
    emit(ctx, op, single, mapping, builder)
}

fn emit(
    ctx: &dyn Context,
    op: &CoordinateOperation,
    single: &SingleOperation,
    mapping: &MethodMapping,
    builder: &mut PipelineBuilder,
) -> Result<(), Error> {
    match mapping.step {
        "helmert" => emit_helmert(ctx, op, single, mapping, builder),
        "molodensky" => emit_molodensky(ctx, op, single, mapping, builder),
        "geogoffset" => {
            emit_plain(single, mapping, builder);
            Ok(())
        }
        "affine" => {
            emit_affine(single, mapping, builder);
            Ok(())
        }
        "cart" => emit_cart(ctx, op, mapping, builder),
        "axisswap" | "noop" => {
            builder.add_step(mapping.step);
            emit_flags(mapping, builder);
            Ok(())
        }
        "hgridshift" | "vgridshift" | "xyzgridshift" | "deformation" | "tinshift"
        | "defmodel" => emit_gridshift(single, mapping, builder),
        "lcc" | "merc" | "webmerc" | "omerc" => emit_projection(ctx, op, single, mapping, builder),
        _ => Err(Error::Formatting(format!(
            "method '{}' has no pipeline rendition",
            mapping.name
        ))),
    }
}

/// The step name, the stated parameters rendered in the step's
/// conventional units, and the mapping's flags
fn emit_plain(single: &SingleOperation, mapping: &MethodMapping, builder: &mut PipelineBuilder) {
    builder.add_step(mapping.step);
    emit_params(single, mapping, builder);
    emit_flags(mapping, builder);
}

/// Affine matrix elements are bare numbers: a unit conversion scalar of
/// 0.3048 enters the matrix as 0.3048, not as a ppm offset
fn emit_affine(single: &SingleOperation, mapping: &MethodMapping, builder: &mut PipelineBuilder) {
    builder.add_step(mapping.step);
    for param in mapping.params {
        let Some(measure) = single.measure(param.name, param.code) else {
            continue;
        };
        builder.add_param_real(param.step_key, measure.si());
    }
    emit_flags(mapping, builder);
}

fn emit_params(single: &SingleOperation, mapping: &MethodMapping, builder: &mut PipelineBuilder) {
    for param in mapping.params {
        let Some(measure) = single.measure(param.name, param.code) else {
            continue;
        };
        builder.add_param_real(param.step_key, conventional(measure, param.unit_type));
    }
}

/// The value in the unit the step vocabulary expects: metre for linear
/// terms, arc-seconds for angular ones, ppm for scale differences, years
/// for epochs
fn conventional(measure: &Measure, unit_type: UnitType) -> f64 {
    match unit_type {
        UnitType::Linear => measure.si(),
        UnitType::Angular => measure.to(units::ARC_SECOND).value(),
        UnitType::Scale => measure.to(units::PARTS_PER_MILLION).value(),
        UnitType::Time => measure.to(units::YEAR).value(),
        UnitType::None => measure.value(),
    }
}

fn emit_flags(mapping: &MethodMapping, builder: &mut PipelineBuilder) {
    for flag in mapping.step_flags {
        match flag.split_once('=') {
            Some((key, value)) => builder.add_param(key, value),
            None => builder.add_flag(flag),
        }
    }
}

/// The axis-and-unit adaptor spec of a geographic CRS, in the vocabulary
/// of the `adapt` step
fn axis_spec(crs: &Crs) -> String {
    let order = if crs.latitude_first { "neuf" } else { "enuf" };
    if crs.unit == units::DEGREE {
        return format!("{order}_deg");
    }
    order.to_string()
}

fn end_crs<'a>(
    ctx: &'a dyn Context,
    op: &CoordinateOperation,
    mapping: &MethodMapping,
) -> Result<(&'a Crs, &'a Crs), Error> {
    let (Some(source), Some(target)) = (op.base().source_crs(), op.base().target_crs()) else {
        return Err(Error::Formatting(format!(
            "'{}' needs source and target CRS to compile",
            mapping.name
        )));
    };
    Ok((ctx.crs(source)?, ctx.crs(target)?))
}

/// Which geographic dimensionality does a Helmert-family registry method
/// operate in - or is it geocentric?
fn helmert_geographic_dimension(code: u32) -> Option<usize> {
    const GEOG2D: [u32; 6] = [
        codes::GEOCENTRIC_TRANSLATIONS_GEOG2D,
        codes::POSITION_VECTOR_GEOG2D,
        codes::COORDINATE_FRAME_GEOG2D,
        codes::TIME_DEPENDENT_POSITION_VECTOR_GEOG2D,
        codes::TIME_DEPENDENT_COORDINATE_FRAME_GEOG2D,
        codes::MOLODENSKY_BADEKAS_GEOG2D,
    ];
    const GEOG3D: [u32; 5] = [
        codes::GEOCENTRIC_TRANSLATIONS_GEOG3D,
        codes::POSITION_VECTOR_GEOG3D,
        codes::COORDINATE_FRAME_GEOG3D,
        codes::TIME_DEPENDENT_POSITION_VECTOR_GEOG3D,
        codes::TIME_DEPENDENT_COORDINATE_FRAME_GEOG3D,
    ];
    if GEOG2D.contains(&code) {
        return Some(2);
    }
    if GEOG3D.contains(&code) {
        return Some(3);
    }
    None
}

fn emit_helmert(
    ctx: &dyn Context,
    op: &CoordinateOperation,
    single: &SingleOperation,
    mapping: &MethodMapping,
    builder: &mut PipelineBuilder,
) -> Result<(), Error> {
    let Some(dimension) = helmert_geographic_dimension(mapping.code) else {
        // Geocentric domain: the helmert step does it all
        emit_plain(single, mapping, builder);
        return Ok(());
    };

    let (source, target) = end_crs(ctx, op, mapping)?;

    // From the CRS axis convention to the internal one
    builder.start_inversion();
    builder.add_step("adapt");
    builder.add_param("to", &axis_spec(source));
    builder.stop_inversion();

    // 2D CRS have no height to feed the cartesian conversion; stash a
    // synthetic one and drop it on the way out
    if dimension == 2 {
        builder.add_step("push");
        builder.add_flag("v_3");
    }

    builder.add_step("cart");
    builder.add_param("ellps", &source.ellipsoid.spec());

    emit_plain(single, mapping, builder);

    builder.start_inversion();
    builder.add_step("cart");
    builder.add_param("ellps", &target.ellipsoid.spec());
    builder.stop_inversion();

    if dimension == 2 {
        builder.add_step("pop");
        builder.add_flag("v_3");
    }

    builder.add_step("adapt");
    builder.add_param("to", &axis_spec(target));
    Ok(())
}

/// A pure geographic/geocentric conversion: the cart bracket of the
/// Helmert skeleton with nothing in between. The ellipsoid is the one of
/// the geographic end, whichever side it sits on.
fn emit_cart(
    ctx: &dyn Context,
    op: &CoordinateOperation,
    mapping: &MethodMapping,
    builder: &mut PipelineBuilder,
) -> Result<(), Error> {
    let (source, target) = end_crs(ctx, op, mapping)?;

    if source.kind.is_geographic() && target.kind.is_geocentric() {
        builder.start_inversion();
        builder.add_step("adapt");
        builder.add_param("to", &axis_spec(source));
        builder.stop_inversion();
        builder.add_step("cart");
        builder.add_param("ellps", &source.ellipsoid.spec());
        return Ok(());
    }
    if source.kind.is_geocentric() && target.kind.is_geographic() {
        builder.start_inversion();
        builder.add_step("cart");
        builder.add_param("ellps", &target.ellipsoid.spec());
        builder.stop_inversion();
        builder.add_step("adapt");
        builder.add_param("to", &axis_spec(target));
        return Ok(());
    }
    Err(Error::Formatting(format!(
        "'{}' needs a geographic and a geocentric end",
        mapping.name
    )))
}

fn emit_molodensky(
    ctx: &dyn Context,
    op: &CoordinateOperation,
    single: &SingleOperation,
    mapping: &MethodMapping,
    builder: &mut PipelineBuilder,
) -> Result<(), Error> {
    let (source, target) = end_crs(ctx, op, mapping)?;

    builder.start_inversion();
    builder.add_step("adapt");
    builder.add_param("to", &axis_spec(source));
    builder.stop_inversion();

    builder.add_step("molodensky");
    builder.add_param("ellps", &source.ellipsoid.spec());
    for param in mapping.params {
        let Some(measure) = single.measure(param.name, param.code) else {
            continue;
        };
        // The molodensky step takes its shifts in metre and the flattening
        // difference as a bare number
        builder.add_param_real(param.step_key, conventional(measure, param.unit_type));
    }
    emit_flags(mapping, builder);

    builder.add_step("adapt");
    builder.add_param("to", &axis_spec(target));
    Ok(())
}

fn emit_gridshift(
    single: &SingleOperation,
    mapping: &MethodMapping,
    builder: &mut PipelineBuilder,
) -> Result<(), Error> {
    let files = single.grid_filenames();
    if files.is_empty() {
        return Err(Error::Formatting(format!(
            "'{}': no grid file stated",
            single.base.name
        )));
    }
    builder.add_step(mapping.step);
    let key = mapping
        .params
        .first()
        .map(|param| param.step_key)
        .unwrap_or("grids");
    builder.add_param(key, &files.join(","));
    emit_flags(mapping, builder);
    Ok(())
}

fn emit_projection(
    ctx: &dyn Context,
    op: &CoordinateOperation,
    single: &SingleOperation,
    mapping: &MethodMapping,
    builder: &mut PipelineBuilder,
) -> Result<(), Error> {
    let (source, _) = end_crs(ctx, op, mapping)?;

    builder.start_inversion();
    builder.add_step("adapt");
    builder.add_param("to", &axis_spec(source));
    builder.stop_inversion();

    builder.add_step(mapping.step);
    // Web Mercator is defined on its own sphere; the rest project the
    // source ellipsoid
    if mapping.step != "webmerc" {
        builder.add_param("ellps", &source.ellipsoid.spec());
    }
    for param in mapping.params {
        let Some(measure) = single.measure(param.name, param.code) else {
            continue;
        };
        // Projection angles go in degrees, scale factors as bare numbers
        let value = match param.unit_type {
            UnitType::Angular => measure.to(units::DEGREE).value(),
            UnitType::Scale => measure.si(),
            _ => measure.si(),
        };
        builder.add_param_real(param.step_key, value);
    }
    emit_flags(mapping, builder);
    Ok(())
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::authoring::*;

    fn geodetic_pair(ctx: &mut Minimal) -> (CrsHandle, CrsHandle) {
        let intl = Ellipsoid::named("intl").unwrap();
        let grs80 = Ellipsoid::named("GRS80").unwrap();
        let ed50 = ctx.add_crs(Crs::geographic2d("ED50", "European Datum 1950", intl));
        let etrs89 = ctx.add_crs(Crs::geographic2d(
            "ETRS89",
            "European Terrestrial Reference System 1989",
            grs80,
        ));
        (ed50, etrs89)
    }

    #[test]
    fn geographic_helmert_skeleton() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let (ed50, etrs89) = geodetic_pair(&mut ctx);
        let op = create_position_vector(
            &ctx,
            ed50,
            etrs89,
            [
                Measure::new(-87.0, units::METRE),
                Measure::new(-96.0, units::METRE),
                Measure::new(-120.0, units::METRE),
            ],
            [Measure::new(0.0, units::ARC_SECOND); 3],
            Measure::new(0.0, units::PARTS_PER_MILLION),
            None,
        )?;

        let text = compile_to_text(&ctx, &op)?;
        assert_eq!(
            text,
            "adapt inv to=neuf_deg | push v_3 | cart ellps=intl | \
             helmert x=-87 y=-96 z=-120 rx=0 ry=0 rz=0 s=0 convention=position_vector | \
             cart inv ellps=GRS80 | pop v_3 | adapt to=neuf_deg"
        );
        Ok(())
    }

    #[test]
    fn geocentric_helmert_is_bare() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let intl = Ellipsoid::named("intl")?;
        let grs80 = Ellipsoid::named("GRS80")?;
        let a = ctx.add_crs(Crs::geocentric("ED50 XYZ", "European Datum 1950", intl));
        let b = ctx.add_crs(Crs::geocentric("ETRS89 XYZ", "ETRS89", grs80));
        let m = |v| Measure::new(v, units::METRE);

        let op = create_geocentric_translations(&ctx, a, b, m(-87.0), m(-96.0), m(-120.0), None)?;
        assert_eq!(compile_to_text(&ctx, &op)?, "helmert x=-87 y=-96 z=-120");
        Ok(())
    }

    #[test]
    fn molodensky_and_units() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let (ed50, etrs89) = geodetic_pair(&mut ctx);
        let m = |v| Measure::new(v, units::METRE);

        let op = create_abridged_molodensky(
            &ctx, ed50, etrs89,
            m(-87.0), m(-96.0), m(-120.0),
            Measure::new(-251.0, units::METRE),
            -1.41927e-5,
            None,
        )?;
        let text = compile_to_text(&ctx, &op)?;
        assert!(text.contains("molodensky ellps=intl dx=-87 dy=-96 dz=-120 da=-251"));
        assert!(text.ends_with("abridged | adapt to=neuf_deg"));
        Ok(())
    }

    #[test]
    fn vertical_unit_change_takes_the_bare_factor() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let feet = ctx.add_crs(Crs::vertical("NAVD88 height (ft)", "NAVD88"));
        let metres = ctx.add_crs(Crs::vertical("NAVD88 height", "NAVD88"));

        let op = create_change_of_vertical_unit(
            &ctx, feet, metres,
            Measure::new(0.3048, units::UNITY),
        )?;
        // The matrix element is the factor itself, not a ppm offset
        assert_eq!(compile_to_text(&ctx, &op)?, "affine s33=0.3048");
        Ok(())
    }

    #[test]
    fn geographic_geocentric_is_a_bare_cart() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let grs80 = Ellipsoid::named("GRS80")?;
        let geographic = ctx.add_crs(Crs::geographic2d("ETRS89", "ETRS89", grs80));
        let geocentric = ctx.add_crs(Crs::geocentric("ETRS89 XYZ", "ETRS89", grs80));

        let onward = create_conversion(
            &ctx, "to geocentric", geographic, geocentric, 9602, "", Vec::new(),
        )?;
        assert_eq!(
            compile_to_text(&ctx, &onward)?,
            "adapt inv to=neuf_deg | cart ellps=GRS80"
        );

        // ... and stated the other way round, the bracket flips
        let back = create_conversion(
            &ctx, "to geographic", geocentric, geographic, 9602, "", Vec::new(),
        )?;
        assert_eq!(
            compile_to_text(&ctx, &back)?,
            "cart inv ellps=GRS80 | adapt to=neuf_deg"
        );
        Ok(())
    }

    #[test]
    fn grids_and_inverse_grids() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let (ed50, etrs89) = geodetic_pair(&mut ctx);
        let op = create_ntv2(&ctx, ed50, etrs89, "ca_nrc_ntv2_0.tif", None)?;
        assert_eq!(compile_to_text(&ctx, &op)?, "hgridshift grids=ca_nrc_ntv2_0.tif");

        // The grid-renamed inverse compiles under an inversion bracket
        let forward = ctx.add(op);
        let backward = inverse(&mut ctx, forward)?;
        let backward = ctx.operation(backward)?.clone();
        assert_eq!(
            compile_to_text(&ctx, &backward)?,
            "hgridshift inv grids=ca_nrc_ntv2_0.tif"
        );
        Ok(())
    }

    #[test]
    fn generic_inverse_runs_the_pipeline_backwards() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let (ed50, etrs89) = geodetic_pair(&mut ctx);
        let op = create_position_vector(
            &ctx,
            ed50,
            etrs89,
            [Measure::new(-87.0, units::METRE); 3],
            [Measure::new(0.5, units::ARC_SECOND); 3],
            Measure::new(1.0, units::PARTS_PER_MILLION),
            None,
        )?;
        let forward = ctx.add(op);
        let forward_text = compile_to_text(&ctx, ctx.operation(forward)?)?;

        let backward = inverse(&mut ctx, forward)?;
        let backward_text = compile_to_text(&ctx, &ctx.operation(backward)?.clone())?;

        // Same steps, mirrored, directions toggled
        assert_eq!(
            forward_text.split(" | ").count(),
            backward_text.split(" | ").count()
        );
        assert!(backward_text.starts_with("adapt inv to=neuf_deg"));
        assert!(backward_text.contains("helmert inv"));
        Ok(())
    }

    #[test]
    fn unknown_method_is_a_formatting_error() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let (ed50, etrs89) = geodetic_pair(&mut ctx);
        let op = create_conversion(
            &ctx,
            "flat earth",
            ed50,
            etrs89,
            0,
            "flat earth transformation",
            Vec::new(),
        )?;
        match compile_to_text(&ctx, &op) {
            Err(Error::Formatting(complaint)) => {
                assert!(complaint.contains("flat earth transformation"))
            }
            other => panic!("expected a formatting error, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn concatenation_compiles_to_a_joined_pipeline() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let (ed50, etrs89) = geodetic_pair(&mut ctx);
        let ballpark = create_ballpark_geographic_offset(&ctx, ed50, etrs89)?;
        let grid = create_ntv2(&ctx, etrs89, etrs89, "x.tif", None)?;
        let ballpark = ctx.add(ballpark);
        let grid = ctx.add(grid);

        let chain = concatenate(&ctx, None, &[ballpark, grid])?;
        // The ballpark noop simplifies away
        assert_eq!(compile_to_text(&ctx, &chain)?, "hgridshift grids=x.tif");
        Ok(())
    }

    #[test]
    fn projections() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let grs80 = Ellipsoid::named("GRS80")?;
        let nad83 = ctx.add_crs(Crs::geographic2d("NAD83", "NAD83", grs80));
        let plane = ctx.add_crs(Crs::projected("Maryland State Plane", "NAD83", grs80));

        let values = [
            (8821, "Latitude of false origin", 37.66666666666666, units::DEGREE),
            (8822, "Longitude of false origin", -77.0, units::DEGREE),
            (8823, "Latitude of 1st standard parallel", 38.3, units::DEGREE),
            (8824, "Latitude of 2nd standard parallel", 39.45, units::DEGREE),
            (8826, "Easting at false origin", 400000.0, units::METRE),
            (8827, "Northing at false origin", 0.0, units::METRE),
        ]
        .iter()
        .map(|(code, name, v, unit)| {
            GeneralParameterValue::Single(OperationParameterValue::measure(
                name,
                *code,
                Measure::new(*v, *unit),
            ))
        })
        .collect();
        let op = create_conversion(
            &ctx, "Maryland CS2000", nad83, plane, 9802, "", values,
        )?;

        let text = compile_to_text(&ctx, &op)?;
        assert!(text.starts_with("adapt inv to=neuf_deg | lcc ellps=GRS80"));
        assert!(text.contains("lat_1=38.3"));
        assert!(text.contains("x_0=400000"));
        Ok(())
    }
}
