//! Constructors for the transformation repertoire.
//!
//! Each constructor resolves the proper registry method from the kinds of
//! the source and target CRS (a position vector transformation between two
//! geocentric CRSs is a different registry method than the same
//! transformation between two 2D geographic CRSs), checks that the given
//! measures carry units of the declared class, and assembles a fully
//! populated [`CoordinateOperation`]. The operation is returned, not
//! registered: the caller decides which context it goes into.

use crate::internal::*;
use crate::registry::builtins::codes;

/// The domain a Helmert-family method operates in, derived from the CRS
/// kinds at both ends
#[derive(Clone, Copy, Debug, PartialEq)]
enum HelmertDomain {
    Geocentric,
    Geographic2D,
    Geographic3D,
}

fn helmert_domain(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
) -> Result<HelmertDomain, Error> {
    let source = ctx.crs(source)?;
    let target = ctx.crs(target)?;
    match (source.kind, target.kind) {
        (CrsKind::Geocentric, CrsKind::Geocentric) => Ok(HelmertDomain::Geocentric),
        (CrsKind::Geographic2D, CrsKind::Geographic2D) => Ok(HelmertDomain::Geographic2D),
        (CrsKind::Geographic3D, CrsKind::Geographic3D) => Ok(HelmertDomain::Geographic3D),
        (s, t) => Err(Error::InvalidOperation(format!(
            "no Helmert domain between a {s:?} and a {t:?} CRS"
        ))),
    }
}

fn expect_unit(name: &str, m: &Measure, expected: UnitType) -> Result<(), Error> {
    let given = m.unit().unit_type;
    if given != expected && expected != UnitType::None {
        return Err(Error::InvalidOperation(format!(
            "parameter '{name}': expected a {expected:?} unit, got {given:?}"
        )));
    }
    Ok(())
}

fn base(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    accuracy: Option<f64>,
) -> Result<OperationBase, Error> {
    let name = format!("{} to {}", ctx.crs(source)?.name, ctx.crs(target)?.name);
    let mut base = OperationBase::new(&name);
    base.set_crs(source, target);
    base.accuracy = accuracy.into_iter().collect();
    Ok(base)
}

/// Assemble the value list from (mapping-param, measure) pairs, validating
/// unit classes along the way
fn values_from(
    mapping: &MethodMapping,
    measures: &[Measure],
) -> Result<Vec<GeneralParameterValue>, Error> {
    if mapping.params.len() != measures.len() {
        return Err(Error::InvalidOperation(format!(
            "'{}': {} parameters declared, {} values given",
            mapping.name,
            mapping.params.len(),
            measures.len()
        )));
    }
    let mut values = Vec::with_capacity(measures.len());
    for (param, measure) in mapping.params.iter().zip(measures.iter()) {
        expect_unit(param.name, measure, param.unit_type)?;
        values.push(GeneralParameterValue::Single(
            OperationParameterValue::measure(param.name, param.code, *measure),
        ));
    }
    Ok(values)
}

fn transformation(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    accuracy: Option<f64>,
    mapping: &MethodMapping,
    measures: &[Measure],
) -> Result<CoordinateOperation, Error> {
    let op = SingleOperation::new(
        base(ctx, source, target, accuracy)?,
        OperationMethod::from_mapping(mapping),
        values_from(mapping, measures)?,
    )?;
    Ok(CoordinateOperation::Transformation(op))
}

fn mapping_for(code: u32) -> Result<&'static MethodMapping, Error> {
    crate::registry::default_registry()
        .find_method(code, "")
        .ok_or(Error::NotFound(code.to_string(), ": no such builtin method".to_string()))
}

// ----- T R A N S L A T I O N S   &   H E L M E R T S ---------------------------------

pub fn create_geocentric_translations(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    x: Measure,
    y: Measure,
    z: Measure,
    accuracy: Option<f64>,
) -> Result<CoordinateOperation, Error> {
    let code = match helmert_domain(ctx, source, target)? {
        HelmertDomain::Geocentric => codes::GEOCENTRIC_TRANSLATIONS_GEOCENTRIC,
        HelmertDomain::Geographic2D => codes::GEOCENTRIC_TRANSLATIONS_GEOG2D,
        HelmertDomain::Geographic3D => codes::GEOCENTRIC_TRANSLATIONS_GEOG3D,
    };
    transformation(ctx, source, target, accuracy, mapping_for(code)?, &[x, y, z])
}

#[allow(clippy::too_many_arguments)]
pub fn create_position_vector(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    translation: [Measure; 3],
    rotation: [Measure; 3],
    scale: Measure,
    accuracy: Option<f64>,
) -> Result<CoordinateOperation, Error> {
    let code = match helmert_domain(ctx, source, target)? {
        HelmertDomain::Geocentric => codes::POSITION_VECTOR_GEOCENTRIC,
        HelmertDomain::Geographic2D => codes::POSITION_VECTOR_GEOG2D,
        HelmertDomain::Geographic3D => codes::POSITION_VECTOR_GEOG3D,
    };
    let mut measures = Vec::from(translation);
    measures.extend(rotation);
    measures.push(scale);
    transformation(ctx, source, target, accuracy, mapping_for(code)?, &measures)
}

#[allow(clippy::too_many_arguments)]
pub fn create_coordinate_frame(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    translation: [Measure; 3],
    rotation: [Measure; 3],
    scale: Measure,
    accuracy: Option<f64>,
) -> Result<CoordinateOperation, Error> {
    let code = match helmert_domain(ctx, source, target)? {
        HelmertDomain::Geocentric => codes::COORDINATE_FRAME_GEOCENTRIC,
        HelmertDomain::Geographic2D => codes::COORDINATE_FRAME_GEOG2D,
        HelmertDomain::Geographic3D => codes::COORDINATE_FRAME_GEOG3D,
    };
    let mut measures = Vec::from(translation);
    measures.extend(rotation);
    measures.push(scale);
    transformation(ctx, source, target, accuracy, mapping_for(code)?, &measures)
}

#[allow(clippy::too_many_arguments)]
pub fn create_time_dependent_position_vector(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    translation: [Measure; 3],
    rotation: [Measure; 3],
    scale: Measure,
    translation_rate: [Measure; 3],
    rotation_rate: [Measure; 3],
    scale_rate: Measure,
    reference_epoch: Measure,
    accuracy: Option<f64>,
) -> Result<CoordinateOperation, Error> {
    let code = match helmert_domain(ctx, source, target)? {
        HelmertDomain::Geocentric => codes::TIME_DEPENDENT_POSITION_VECTOR_GEOCENTRIC,
        HelmertDomain::Geographic2D => codes::TIME_DEPENDENT_POSITION_VECTOR_GEOG2D,
        HelmertDomain::Geographic3D => codes::TIME_DEPENDENT_POSITION_VECTOR_GEOG3D,
    };
    time_dependent(
        ctx, source, target, accuracy, code,
        translation, rotation, scale,
        translation_rate, rotation_rate, scale_rate, reference_epoch,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn create_time_dependent_coordinate_frame(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    translation: [Measure; 3],
    rotation: [Measure; 3],
    scale: Measure,
    translation_rate: [Measure; 3],
    rotation_rate: [Measure; 3],
    scale_rate: Measure,
    reference_epoch: Measure,
    accuracy: Option<f64>,
) -> Result<CoordinateOperation, Error> {
    let code = match helmert_domain(ctx, source, target)? {
        HelmertDomain::Geocentric => codes::TIME_DEPENDENT_COORDINATE_FRAME_GEOCENTRIC,
        HelmertDomain::Geographic2D => codes::TIME_DEPENDENT_COORDINATE_FRAME_GEOG2D,
        HelmertDomain::Geographic3D => codes::TIME_DEPENDENT_COORDINATE_FRAME_GEOG3D,
    };
    time_dependent(
        ctx, source, target, accuracy, code,
        translation, rotation, scale,
        translation_rate, rotation_rate, scale_rate, reference_epoch,
    )
}

#[allow(clippy::too_many_arguments)]
fn time_dependent(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    accuracy: Option<f64>,
    code: u32,
    translation: [Measure; 3],
    rotation: [Measure; 3],
    scale: Measure,
    translation_rate: [Measure; 3],
    rotation_rate: [Measure; 3],
    scale_rate: Measure,
    reference_epoch: Measure,
) -> Result<CoordinateOperation, Error> {
    let mut measures = Vec::from(translation);
    measures.extend(rotation);
    measures.push(scale);
    measures.extend(translation_rate);
    measures.extend(rotation_rate);
    measures.push(scale_rate);
    measures.push(reference_epoch);
    let mut op = transformation(ctx, source, target, accuracy, mapping_for(code)?, &measures)?;
    op.base_mut().requires_epoch = true;
    Ok(op)
}

#[allow(clippy::too_many_arguments)]
pub fn create_molodensky_badekas(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    translation: [Measure; 3],
    rotation: [Measure; 3],
    scale: Measure,
    evaluation_point: [Measure; 3],
    accuracy: Option<f64>,
) -> Result<CoordinateOperation, Error> {
    let code = match helmert_domain(ctx, source, target)? {
        HelmertDomain::Geocentric => codes::MOLODENSKY_BADEKAS_GEOCENTRIC,
        HelmertDomain::Geographic2D => codes::MOLODENSKY_BADEKAS_GEOG2D,
        HelmertDomain::Geographic3D => {
            return Err(Error::InvalidOperation(
                "Molodensky-Badekas: no geog3D domain variant in the registry".to_string(),
            ))
        }
    };
    let mut measures = Vec::from(translation);
    measures.extend(rotation);
    measures.push(scale);
    measures.extend(evaluation_point);
    transformation(ctx, source, target, accuracy, mapping_for(code)?, &measures)
}

// ----- M O L O D E N S K Y -----------------------------------------------------------

#[allow(clippy::too_many_arguments)]
pub fn create_molodensky(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    x: Measure,
    y: Measure,
    z: Measure,
    da: Measure,
    df: f64,
    accuracy: Option<f64>,
) -> Result<CoordinateOperation, Error> {
    molodensky(ctx, source, target, accuracy, codes::MOLODENSKY, x, y, z, da, df)
}

#[allow(clippy::too_many_arguments)]
pub fn create_abridged_molodensky(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    x: Measure,
    y: Measure,
    z: Measure,
    da: Measure,
    df: f64,
    accuracy: Option<f64>,
) -> Result<CoordinateOperation, Error> {
    molodensky(ctx, source, target, accuracy, codes::ABRIDGED_MOLODENSKY, x, y, z, da, df)
}

#[allow(clippy::too_many_arguments)]
fn molodensky(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    accuracy: Option<f64>,
    code: u32,
    x: Measure,
    y: Measure,
    z: Measure,
    da: Measure,
    df: f64,
) -> Result<CoordinateOperation, Error> {
    // Both ends must be geographic; mixed 2D/3D is fine for Molodensky
    let (s, t) = (ctx.crs(source)?.kind, ctx.crs(target)?.kind);
    if !s.is_geographic() || !t.is_geographic() {
        return Err(Error::InvalidOperation(
            "Molodensky operates between geographic CRS".to_string(),
        ));
    }
    let df = Measure::new(df, units::NONE);
    transformation(
        ctx, source, target, accuracy,
        mapping_for(code)?,
        &[x, y, z, da, df],
    )
}

// ----- O F F S E T S -----------------------------------------------------------------

pub fn create_longitude_rotation(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    offset: Measure,
) -> Result<CoordinateOperation, Error> {
    // A change of prime meridian is exact: no accuracy entry
    transformation(
        ctx, source, target, None,
        mapping_for(codes::LONGITUDE_ROTATION)?,
        &[offset],
    )
}

/// Geographic offsets in two or three dimensions. The vertical offset is
/// accepted exactly when both CRS are three-dimensional.
pub fn create_geographic_offsets(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    latitude_offset: Measure,
    longitude_offset: Measure,
    vertical_offset: Option<Measure>,
    accuracy: Option<f64>,
) -> Result<CoordinateOperation, Error> {
    let (s, t) = (ctx.crs(source)?.kind, ctx.crs(target)?.kind);
    if !s.is_geographic() || !t.is_geographic() {
        return Err(Error::InvalidOperation(
            "geographic offsets operate between geographic CRS".to_string(),
        ));
    }
    let three_dimensional = s.axis_count() == 3 && t.axis_count() == 3;
    match (three_dimensional, vertical_offset) {
        (true, Some(vertical)) => transformation(
            ctx, source, target, accuracy,
            mapping_for(codes::GEOGRAPHIC3D_OFFSETS)?,
            &[latitude_offset, longitude_offset, vertical],
        ),
        (false, None) => transformation(
            ctx, source, target, accuracy,
            mapping_for(codes::GEOGRAPHIC2D_OFFSETS)?,
            &[latitude_offset, longitude_offset],
        ),
        (true, None) => Err(Error::InvalidOperation(
            "3D geographic offsets need a vertical offset".to_string(),
        )),
        (false, Some(_)) => Err(Error::InvalidOperation(
            "a vertical offset needs 3D CRS at both ends".to_string(),
        )),
    }
}

pub fn create_vertical_offset(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    offset: Measure,
    accuracy: Option<f64>,
) -> Result<CoordinateOperation, Error> {
    if !ctx.crs(source)?.kind.is_vertical() || !ctx.crs(target)?.kind.is_vertical() {
        return Err(Error::InvalidOperation(
            "a vertical offset operates between vertical CRS".to_string(),
        ));
    }
    transformation(
        ctx, source, target, accuracy,
        mapping_for(codes::VERTICAL_OFFSET)?,
        &[offset],
    )
}

pub fn create_change_of_vertical_unit(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    factor: Measure,
) -> Result<CoordinateOperation, Error> {
    transformation(
        ctx, source, target, None,
        mapping_for(codes::CHANGE_OF_VERTICAL_UNIT)?,
        &[factor],
    )
}

// ----- G R I D   B A S E D -----------------------------------------------------------

/// A grid-based transformation, by method code. The files are matched
/// against the method's declared file parameters in order (NADCON takes
/// two; the rest take one).
pub fn create_grid_transformation(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    method_code: u32,
    files: &[&str],
    accuracy: Option<f64>,
) -> Result<CoordinateOperation, Error> {
    let mapping = mapping_for(method_code)?;
    if mapping.params.len() != files.len() {
        return Err(Error::InvalidOperation(format!(
            "'{}': {} grid files declared, {} given",
            mapping.name,
            mapping.params.len(),
            files.len()
        )));
    }
    let values = mapping
        .params
        .iter()
        .zip(files.iter())
        .map(|(param, file)| {
            GeneralParameterValue::Single(OperationParameterValue::filename(
                param.name, param.code, file,
            ))
        })
        .collect();
    let op = SingleOperation::new(
        base(ctx, source, target, accuracy)?,
        OperationMethod::from_mapping(mapping),
        values,
    )?;
    Ok(CoordinateOperation::Transformation(op))
}

pub fn create_ntv2(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
    file: &str,
    accuracy: Option<f64>,
) -> Result<CoordinateOperation, Error> {
    create_grid_transformation(ctx, source, target, codes::NTV2, &[file], accuracy)
}

// ----- B A L L P A R K ---------------------------------------------------------------

/// The zero-offset fallback between two geographic CRS whose relation is
/// unknown. Flagged as ballpark; compiles to a no-op step.
pub fn create_ballpark_geographic_offset(
    ctx: &dyn Context,
    source: CrsHandle,
    target: CrsHandle,
) -> Result<CoordinateOperation, Error> {
    let name = format!(
        "Ballpark geographic offset from {} to {}",
        ctx.crs(source)?.name,
        ctx.crs(target)?.name
    );
    let mut base = OperationBase::new(&name);
    base.set_crs(source, target);
    base.ballpark = true;

    let mapping = crate::registry::default_registry()
        .find_method(0, "Ballpark geographic offset")
        .ok_or(Error::General("builtin registry lacks the ballpark method"))?;
    let op = SingleOperation::new(base, OperationMethod::from_mapping(mapping), Vec::new())?;
    Ok(CoordinateOperation::Transformation(op))
}

// ----- C O N V E R S I O N S ---------------------------------------------------------

/// A conversion, from explicit method identity and values. Known methods
/// get the registry's canonical identity; unknown ones are modelled as
/// given and will be rejected at compile time, not here.
pub fn create_conversion(
    ctx: &dyn Context,
    name: &str,
    source: CrsHandle,
    target: CrsHandle,
    method_code: u32,
    method_name: &str,
    values: Vec<GeneralParameterValue>,
) -> Result<CoordinateOperation, Error> {
    let mut base = OperationBase::new(name);
    base.set_crs(source, target);
    let _ = ctx.crs(source)?;
    let _ = ctx.crs(target)?;

    let method = match ctx.registry().find_method(method_code, method_name) {
        Some(mapping) => OperationMethod::from_mapping(mapping),
        None => OperationMethod::new(method_name, method_code, Vec::new()),
    };
    let op = SingleOperation::new(base, method, values)?;
    Ok(CoordinateOperation::Conversion(op))
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::authoring::*;

    fn contexts() -> (Minimal, CrsHandle, CrsHandle, CrsHandle, CrsHandle) {
        let mut ctx = Minimal::new();
        let intl = Ellipsoid::named("intl").unwrap();
        let wgs84 = Ellipsoid::named("WGS84").unwrap();
        let ed50 = ctx.add_crs(Crs::geographic2d("ED50", "European Datum 1950", intl));
        let wgs = ctx.add_crs(Crs::geographic2d("WGS 84", "World Geodetic System 1984", wgs84));
        let ed50_geocentric = ctx.add_crs(Crs::geocentric("ED50 geocentric", "European Datum 1950", intl));
        let wgs_geocentric = ctx.add_crs(Crs::geocentric("WGS 84 geocentric", "World Geodetic System 1984", wgs84));
        (ctx, ed50, wgs, ed50_geocentric, wgs_geocentric)
    }

    #[test]
    fn method_code_follows_crs_kind() -> Result<(), Error> {
        let (ctx, ed50, wgs, ed50_xyz, wgs_xyz) = contexts();
        let m = |v| Measure::new(v, units::METRE);

        let geographic = create_geocentric_translations(
            &ctx, ed50, wgs, m(-87.0), m(-98.0), m(-121.0), Some(5.0),
        )?;
        assert_eq!(geographic.as_single().unwrap().method.code, 9603);
        assert_eq!(geographic.base().accuracy, [5.0]);
        assert_eq!(geographic.name(), "ED50 to WGS 84");

        let geocentric = create_geocentric_translations(
            &ctx, ed50_xyz, wgs_xyz, m(-87.0), m(-98.0), m(-121.0), None,
        )?;
        assert_eq!(geocentric.as_single().unwrap().method.code, 1031);

        // Mixed kinds have no Helmert domain
        assert!(create_geocentric_translations(
            &ctx, ed50, wgs_xyz, m(-87.0), m(-98.0), m(-121.0), None
        )
        .is_err());
        Ok(())
    }

    #[test]
    fn unit_classes_are_enforced() {
        let (ctx, ed50, wgs, ..) = contexts();
        let result = create_position_vector(
            &ctx,
            ed50,
            wgs,
            [Measure::new(-87.0, units::METRE); 3],
            // Rotations in metre: nonsense
            [Measure::new(0.5, units::METRE); 3],
            Measure::new(1.0, units::PARTS_PER_MILLION),
            None,
        );
        assert!(matches!(result, Err(Error::InvalidOperation(_))));
    }

    #[test]
    fn grid_transformations() -> Result<(), Error> {
        let (ctx, ed50, wgs, ..) = contexts();
        let op = create_ntv2(&ctx, ed50, wgs, "ca_nrc_ntv2_0.tif", Some(0.1))?;
        let single = op.as_single().unwrap();
        assert_eq!(single.method.code, 9615);
        assert_eq!(single.grid_filenames(), ["ca_nrc_ntv2_0.tif"]);

        // NADCON wants two files
        assert!(create_grid_transformation(&ctx, ed50, wgs, 9613, &["conus.las"], None).is_err());
        Ok(())
    }

    #[test]
    fn ballpark_is_flagged() -> Result<(), Error> {
        let (ctx, ed50, wgs, ..) = contexts();
        let op = create_ballpark_geographic_offset(&ctx, ed50, wgs)?;
        assert!(op.base().ballpark);
        assert!(op.name().starts_with("Ballpark geographic offset"));
        Ok(())
    }
}
