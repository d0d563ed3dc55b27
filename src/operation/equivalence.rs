//! Equivalence of coordinate operations.
//!
//! Two criteria. `Strict` wants the same method and the same values in the
//! same order, bitwise. `Equivalent` accepts any pair of descriptions the
//! engine can show to be the same mathematical mapping: different units,
//! different parameter order, absent parameters at their identity value,
//! and a handful of cross-method identities (Position Vector vs. Coordinate
//! Frame with negated rotations, 3- vs. 7-parameter translations, the two
//! Lambert Conic Conformal variants, the two spherical Mercators).
//!
//! Comparison never errors and never mutates: unresolvable handles and
//! unknown methods simply compare as not-equivalent.

use crate::internal::*;
use crate::registry::builtins::codes;

/// How picky should the comparison be?
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Criterion {
    /// Same method, same values, same order, same units
    Strict,
    /// Same mathematical mapping
    Equivalent,
}

/// Parameters whose sign flips between the position vector and coordinate
/// frame rotation conventions
const ROTATION_CODES: [u32; 6] = [8608, 8609, 8610, 1043, 1044, 1045];

/// Parameters without influence when every rotation and the scale
/// difference vanish
const EVALUATION_POINT_CODES: [u32; 3] = [8617, 8618, 8667];

/// Angular parameters stating a direction: values a full turn apart
/// describe the same line
const AZIMUTH_CODES: [u32; 2] = [
    codes::AZIMUTH_INITIAL_LINE,
    codes::ANGLE_RECTIFIED_TO_SKEW_GRID,
];

const HELMERT_TRANSLATION_METHODS: [u32; 3] = [
    codes::GEOCENTRIC_TRANSLATIONS_GEOCENTRIC,
    codes::GEOCENTRIC_TRANSLATIONS_GEOG2D,
    codes::GEOCENTRIC_TRANSLATIONS_GEOG3D,
];

const HELMERT_FULL_METHODS: [u32; 14] = [
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

const POSITION_VECTOR_METHODS: [u32; 6] = [
    codes::POSITION_VECTOR_GEOCENTRIC,
    codes::POSITION_VECTOR_GEOG2D,
    codes::POSITION_VECTOR_GEOG3D,
    codes::TIME_DEPENDENT_POSITION_VECTOR_GEOCENTRIC,
    codes::TIME_DEPENDENT_POSITION_VECTOR_GEOG2D,
    codes::TIME_DEPENDENT_POSITION_VECTOR_GEOG3D,
];

const COORDINATE_FRAME_METHODS: [u32; 6] = [
    codes::COORDINATE_FRAME_GEOCENTRIC,
    codes::COORDINATE_FRAME_GEOG2D,
    codes::COORDINATE_FRAME_GEOG3D,
    codes::TIME_DEPENDENT_COORDINATE_FRAME_GEOCENTRIC,
    codes::TIME_DEPENDENT_COORDINATE_FRAME_GEOG2D,
    codes::TIME_DEPENDENT_COORDINATE_FRAME_GEOG3D,
];

/// Tolerance for comparing a derived Lambert Conic Conformal (1SP)
/// parameterization against a stated one
const DERIVED_PROJECTION_TOLERANCE: f64 = 1e-8;

impl CoordinateOperation {
    /// Is this operation the same mathematical mapping as `other`, judged
    /// by `criterion`? Symmetric, reflexive, and infallible: anything the
    /// comparison cannot resolve compares as not-equivalent.
    pub fn is_equivalent_to(
        &self,
        ctx: &dyn Context,
        other: &CoordinateOperation,
        criterion: Criterion,
    ) -> bool {
        use CoordinateOperation::*;
        match (self, other) {
            (Conversion(a), Conversion(b)) => single_equivalent(ctx, self, a, other, b, criterion),
            (Transformation(a), Transformation(b)) => {
                single_equivalent(ctx, self, a, other, b, criterion)
            }
            (PointMotion(a), PointMotion(b)) => {
                single_equivalent(ctx, self, a, other, b, criterion)
            }
            (Concatenated(a), Concatenated(b)) => {
                if a.steps.len() != b.steps.len() {
                    return false;
                }
                a.steps.iter().zip(b.steps.iter()).all(|(sa, sb)| {
                    let (Ok(sa), Ok(sb)) = (ctx.operation(*sa), ctx.operation(*sb)) else {
                        return false;
                    };
                    sa.is_equivalent_to(ctx, sb, criterion)
                })
            }
            (Inverse(a), Inverse(b)) => {
                let (Ok(fa), Ok(fb)) = (ctx.operation(a.forward), ctx.operation(b.forward)) else {
                    return false;
                };
                fa.is_equivalent_to(ctx, fb, criterion)
            }
            _ => false,
        }
    }
}

fn single_equivalent(
    ctx: &dyn Context,
    op_a: &CoordinateOperation,
    a: &SingleOperation,
    op_b: &CoordinateOperation,
    b: &SingleOperation,
    criterion: Criterion,
) -> bool {
    if criterion == Criterion::Strict {
        return strictly_equal(a, b);
    }
    // Some cross-method identities hold in one direction of inspection
    // only (3- vs 7-parameter, 2SP vs 1SP). Trying both directions keeps
    // the relation symmetric without case-doubling below.
    equivalent_oneway(ctx, op_a, a, op_b, b) || equivalent_oneway(ctx, op_b, b, op_a, a)
}

fn strictly_equal(a: &SingleOperation, b: &SingleOperation) -> bool {
    if !a.method.is_equivalent_to(&b.method, Criterion::Strict) {
        return false;
    }
    if a.values.len() != b.values.len() {
        return false;
    }
    a.values.iter().zip(b.values.iter()).all(|(va, vb)| match (va, vb) {
        (GeneralParameterValue::Single(va), GeneralParameterValue::Single(vb)) => {
            va.parameter.is_equivalent_to(&vb.parameter)
                && va.value.is_equivalent_to(&vb.value, Criterion::Strict)
        }
        (GeneralParameterValue::Group(na, ma), GeneralParameterValue::Group(nb, mb)) => {
            is_equivalent_name(na, nb) && ma == mb
        }
        _ => false,
    })
}

fn equivalent_oneway(
    ctx: &dyn Context,
    op_a: &CoordinateOperation,
    a: &SingleOperation,
    op_b: &CoordinateOperation,
    b: &SingleOperation,
) -> bool {
    // Same method: tolerant value comparison
    if a.method.is_equivalent_to(&b.method, Criterion::Equivalent) {
        if values_equivalent(a, b, &[], &[]) {
            return true;
        }
        // The two standard parallels of LCC 2SP are interchangeable
        if a.method.code == codes::LAMBERT_CONIC_CONFORMAL_2SP {
            return values_equivalent(a, &with_swapped_parallels(b), &[], &[]);
        }
        return false;
    }

    let (ca, cb) = (a.method.code, b.method.code);

    // A 3-parameter translation equals a 7-parameter Helmert whose
    // rotations and scale difference vanish. The evaluation point of a
    // Molodensky-Badekas operation is then without influence.
    if HELMERT_TRANSLATION_METHODS.contains(&ca) && HELMERT_FULL_METHODS.contains(&cb) {
        return values_equivalent(a, b, &[], &EVALUATION_POINT_CODES);
    }

    // The position vector and coordinate frame conventions describe the
    // same mapping with rotation signs flipped
    if POSITION_VECTOR_METHODS.contains(&ca) && COORDINATE_FRAME_METHODS.contains(&cb) {
        return values_equivalent(a, b, &ROTATION_CODES, &[]);
    }

    // On a sphere, Mercator (variant A) with unit scale factor and the
    // spherical Mercator coincide
    if ca == codes::MERCATOR_VARIANT_A && cb == codes::MERCATOR_SPHERICAL {
        if !both_sources_spherical(ctx, op_a, op_b) {
            return false;
        }
        return values_equivalent(a, b, &[], &[]);
    }

    // Last resort: derive the 1SP parameterization of an LCC 2SP operation
    // in closed form, and compare
    if ca == codes::LAMBERT_CONIC_CONFORMAL_2SP && cb == codes::LAMBERT_CONIC_CONFORMAL_1SP {
        return lcc_2sp_matches_1sp(ctx, op_a, a, b);
    }

    false
}

/// Tolerant, order-insensitive value comparison. A parameter present on one
/// side only must stand at its identity value. Values of parameters named
/// in `negated` must be sign-flipped mirrors; parameters named in `ignored`
/// do not participate at all.
fn values_equivalent(
    a: &SingleOperation,
    b: &SingleOperation,
    negated: &[u32],
    ignored: &[u32],
) -> bool {
    let b_singles: Vec<&OperationParameterValue> = b.singles().collect();
    let mut used = vec![false; b_singles.len()];

    for va in a.singles() {
        if ignored.contains(&va.parameter.code) {
            continue;
        }
        let partner = b_singles.iter().enumerate().find(|(j, vb)| {
            !used[*j] && va.parameter.is_equivalent_to(&vb.parameter)
        });
        let Some((j, vb)) = partner else {
            if !is_identity(&va.value) {
                return false;
            }
            continue;
        };
        used[j] = true;
        if !values_match(&va.value, &vb.value, va.parameter.code, negated) {
            return false;
        }
    }

    // Leftovers on the b side must be identities too
    for (j, vb) in b_singles.iter().enumerate() {
        if used[j] || ignored.contains(&vb.parameter.code) {
            continue;
        }
        if !is_identity(&vb.value) {
            return false;
        }
    }

    // Parameter groups compare strictly, paired by name
    groups_equal(a, b)
}

fn values_match(a: &ParameterValue, b: &ParameterValue, code: u32, negated: &[u32]) -> bool {
    match (a, b) {
        (ParameterValue::Measure(ma), ParameterValue::Measure(mb)) => {
            let mb = if negated.contains(&code) { mb.negated() } else { *mb };
            if AZIMUTH_CODES.contains(&code) {
                return ma.is_equivalent_to_modulo_360(&mb);
            }
            ma.is_equivalent_to(&mb)
        }
        _ => !negated.contains(&code) && a.is_equivalent_to(b, Criterion::Equivalent),
    }
}

/// An absent parameter counts as present at the identity element of its
/// unit: 1 for pure scale factors, 0 for everything else. Filenames and
/// integers have no identity.
fn is_identity(value: &ParameterValue) -> bool {
    match value {
        ParameterValue::Measure(m) => m.is_identity(),
        _ => false,
    }
}

fn groups_equal(a: &SingleOperation, b: &SingleOperation) -> bool {
    let groups = |op: &SingleOperation| -> Vec<(String, Vec<OperationParameterValue>)> {
        op.values
            .iter()
            .filter_map(|v| match v {
                GeneralParameterValue::Group(name, members) => {
                    Some((name.clone(), members.clone()))
                }
                GeneralParameterValue::Single(_) => None,
            })
            .collect()
    };
    let ga = groups(a);
    let gb = groups(b);
    if ga.len() != gb.len() {
        return false;
    }
    ga.iter().all(|(name, members)| {
        gb.iter()
            .any(|(nb, mb)| is_equivalent_name(name, nb) && members == mb)
    })
}

/// A copy of the operation with the roles of the two standard parallels
/// interchanged
fn with_swapped_parallels(op: &SingleOperation) -> SingleOperation {
    let mut swapped = op.clone();
    for value in &mut swapped.values {
        if let GeneralParameterValue::Single(v) = value {
            match v.parameter.code {
                codes::LATITUDE_1ST_STD_PARALLEL => {
                    v.parameter.code = codes::LATITUDE_2ND_STD_PARALLEL
                }
                codes::LATITUDE_2ND_STD_PARALLEL => {
                    v.parameter.code = codes::LATITUDE_1ST_STD_PARALLEL
                }
                _ => (),
            }
        }
    }
    swapped
}

fn source_ellipsoid(ctx: &dyn Context, op: &CoordinateOperation) -> Option<Ellipsoid> {
    let handle = op.base().source_crs()?;
    Some(ctx.crs(handle).ok()?.ellipsoid)
}

fn both_sources_spherical(
    ctx: &dyn Context,
    a: &CoordinateOperation,
    b: &CoordinateOperation,
) -> bool {
    matches!(
        (source_ellipsoid(ctx, a), source_ellipsoid(ctx, b)),
        (Some(ea), Some(eb)) if ea.is_sphere() && eb.is_sphere()
    )
}

// ----- L C C   2 S P  ->  1 S P ------------------------------------------------------

/// The conformal-latitude helpers of the Lambert Conic Conformal mapping
fn lcc_m(phi: f64, e2: f64) -> f64 {
    phi.cos() / (1.0 - e2 * phi.sin().powi(2)).sqrt()
}

fn lcc_t(phi: f64, e: f64) -> f64 {
    let esin = e * phi.sin();
    (std::f64::consts::FRAC_PI_4 - phi / 2.0).tan() / ((1.0 - esin) / (1.0 + esin)).powf(e / 2.0)
}

/// The 1SP parameterization induced by a 2SP one, as
/// `(lat_0, lon_0, k_0, x_0, y_0)` in SI. `None` when the 2SP operation is
/// incomplete or degenerate.
fn lcc_1sp_parameters(op: &SingleOperation, ellps: &Ellipsoid) -> Option<(f64, f64, f64, f64, f64)> {
    let e2 = ellps.eccentricity_squared();
    let e = ellps.eccentricity();

    let phi1 = op.measure("", codes::LATITUDE_1ST_STD_PARALLEL)?.si();
    let phi2 = op.measure("", codes::LATITUDE_2ND_STD_PARALLEL)?.si();
    let phi_f = op.measure("", codes::LATITUDE_FALSE_ORIGIN)?.si();
    let lon_0 = op.measure("", codes::LONGITUDE_FALSE_ORIGIN)?.si();
    let x_0 = op.measure("", codes::EASTING_FALSE_ORIGIN).map_or(0.0, |m| m.si());
    let y_0 = op.measure("", codes::NORTHING_FALSE_ORIGIN).map_or(0.0, |m| m.si());

    let m1 = lcc_m(phi1, e2);
    let t1 = lcc_t(phi1, e);
    let n = if crate::units::equivalent(phi1, phi2) {
        phi1.sin()
    } else {
        let m2 = lcc_m(phi2, e2);
        let t2 = lcc_t(phi2, e);
        (m1.ln() - m2.ln()) / (t1.ln() - t2.ln())
    };
    if !(-1.0..=1.0).contains(&n) || n == 0.0 {
        return None;
    }

    // The natural origin sits at the latitude whose parallel the cone
    // touches
    let lat_0 = n.asin();
    let m0 = lcc_m(lat_0, e2);
    let t0 = lcc_t(lat_0, e);
    let k_0 = m1 / m0 * (t0 / t1).powf(n);

    // The false easting carries over unchanged. The false northing shifts
    // by the distance along the central meridian between the stated false
    // origin and the natural origin of the derived cone.
    let f = m1 / (n * t1.powf(n));
    let rho = |phi: f64| ellps.semimajor_axis() * f * lcc_t(phi, e).powf(n);
    let y_0 = y_0 + rho(phi_f) - rho(lat_0);

    Some((lat_0, lon_0, k_0, x_0, y_0))
}

fn approximately(a: f64, b: f64) -> bool {
    (a - b).abs() <= DERIVED_PROJECTION_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

fn lcc_2sp_matches_1sp(
    ctx: &dyn Context,
    op_a: &CoordinateOperation,
    a: &SingleOperation,
    b: &SingleOperation,
) -> bool {
    let Some(ellps) = source_ellipsoid(ctx, op_a) else {
        return false;
    };
    let Some((lat_0, lon_0, k_0, x_0, y_0)) = lcc_1sp_parameters(a, &ellps) else {
        return false;
    };

    let stated = |code: u32, default: f64| -> f64 {
        b.measure("", code).map_or(default, |m| m.si())
    };
    approximately(lat_0, stated(codes::LATITUDE_NATURAL_ORIGIN, 0.0))
        && approximately(lon_0, stated(codes::LONGITUDE_NATURAL_ORIGIN, 0.0))
        && approximately(k_0, stated(codes::SCALE_FACTOR_NATURAL_ORIGIN, 1.0))
        && approximately(x_0, stated(codes::FALSE_EASTING, 0.0))
        && approximately(y_0, stated(codes::FALSE_NORTHING, 0.0))
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authoring::*;

    fn single(
        method_code: u32,
        values: &[(u32, f64, Unit)],
    ) -> CoordinateOperation {
        let reg = MethodRegistry::with_builtins();
        let mapping = reg.find_method(method_code, "").unwrap();
        let method = OperationMethod::from_mapping(mapping);
        let values = values
            .iter()
            .map(|(code, v, unit)| {
                let name = mapping.find_param(*code, "").unwrap().name;
                GeneralParameterValue::Single(OperationParameterValue::measure(
                    name,
                    *code,
                    Measure::new(*v, *unit),
                ))
            })
            .collect();
        // Tests bypass the count check on purpose: tolerant comparison must
        // handle partially stated parameter lists
        CoordinateOperation::Transformation(SingleOperation {
            base: OperationBase::new("test"),
            method,
            values,
        })
    }

    #[test]
    fn strict_is_picky() {
        let ctx = Minimal::new();
        let a = single(9603, &[(8605, 84.87, units::METRE), (8606, 96.49, units::METRE), (8607, 116.95, units::METRE)]);
        let reordered = single(9603, &[(8606, 96.49, units::METRE), (8605, 84.87, units::METRE), (8607, 116.95, units::METRE)]);

        assert!(a.is_equivalent_to(&ctx, &a, Criterion::Strict));
        assert!(!a.is_equivalent_to(&ctx, &reordered, Criterion::Strict));
        assert!(a.is_equivalent_to(&ctx, &reordered, Criterion::Equivalent));
    }

    #[test]
    fn tolerant_accepts_unit_changes_and_defaults() {
        let ctx = Minimal::new();
        let in_metres = single(9603, &[(8605, 84.87, units::METRE), (8606, 96.49, units::METRE), (8607, 116.95, units::METRE)]);

        // The same mapping, stated as a 7-parameter operation with vanishing
        // rotations and scale difference
        let padded = single(
            9606,
            &[
                (8605, 84.87, units::METRE),
                (8606, 96.49, units::METRE),
                (8607, 116.95, units::METRE),
                (8608, 0.0, units::ARC_SECOND),
                (8609, 0.0, units::ARC_SECOND),
                (8610, 0.0, units::ARC_SECOND),
                (8611, 0.0, units::PARTS_PER_MILLION),
            ],
        );
        assert!(in_metres.is_equivalent_to(&ctx, &padded, Criterion::Equivalent));
        // ... and symmetrically
        assert!(padded.is_equivalent_to(&ctx, &in_metres, Criterion::Equivalent));
        assert!(!in_metres.is_equivalent_to(&ctx, &padded, Criterion::Strict));
    }

    #[test]
    fn position_vector_vs_coordinate_frame() {
        let ctx = Minimal::new();
        let helmert = [
            (8605, -81.1, units::METRE),
            (8606, -89.4, units::METRE),
            (8607, -115.8, units::METRE),
            (8608, 0.485, units::ARC_SECOND),
            (8609, 0.024, units::ARC_SECOND),
            (8610, 0.413, units::ARC_SECOND),
            (8611, -0.54, units::PARTS_PER_MILLION),
        ];
        let pv = single(9606, &helmert);

        let mut negated = helmert;
        for entry in &mut negated[3..6] {
            entry.1 = -entry.1;
        }
        let cf = single(9607, &negated);
        assert!(pv.is_equivalent_to(&ctx, &cf, Criterion::Equivalent));
        assert!(cf.is_equivalent_to(&ctx, &pv, Criterion::Equivalent));

        // Without the sign flips the two conventions differ
        let cf_same_signs = single(9607, &helmert);
        assert!(!pv.is_equivalent_to(&ctx, &cf_same_signs, Criterion::Equivalent));
    }

    #[test]
    fn interchangeable_standard_parallels() {
        let ctx = Minimal::new();
        let lcc = single(
            9802,
            &[
                (8821, 36.0, units::DEGREE),
                (8822, -77.0, units::DEGREE),
                (8823, 38.3, units::DEGREE),
                (8824, 39.45, units::DEGREE),
                (8826, 400000.0, units::METRE),
                (8827, 0.0, units::METRE),
            ],
        );
        let swapped = single(
            9802,
            &[
                (8821, 36.0, units::DEGREE),
                (8822, -77.0, units::DEGREE),
                (8823, 39.45, units::DEGREE),
                (8824, 38.3, units::DEGREE),
                (8826, 400000.0, units::METRE),
                (8827, 0.0, units::METRE),
            ],
        );
        assert!(lcc.is_equivalent_to(&ctx, &swapped, Criterion::Equivalent));
        assert!(!lcc.is_equivalent_to(&ctx, &swapped, Criterion::Strict));
    }

    #[test]
    fn lcc_2sp_vs_derived_1sp() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let ellps = Ellipsoid::named("GRS80")?;
        let geographic = ctx.add_crs(Crs::geographic2d("NAD83", "NAD83", ellps));
        let projected = ctx.add_crs(Crs::projected("State Plane", "NAD83", ellps));

        // Degenerate 2SP: both standard parallels on the same latitude.
        // Then n = sin(phi1), and the equivalent 1SP cone touches at phi1.
        let mut two_sp = single(
            9802,
            &[
                (8821, 40.0, units::DEGREE),
                (8822, -96.0, units::DEGREE),
                (8823, 40.0, units::DEGREE),
                (8824, 40.0, units::DEGREE),
                (8826, 500000.0, units::METRE),
                (8827, 0.0, units::METRE),
            ],
        );
        two_sp.base_mut().set_crs(geographic, projected);

        let mut one_sp = single(
            9801,
            &[
                (8801, 40.0, units::DEGREE),
                (8802, -96.0, units::DEGREE),
                (8805, 1.0, units::UNITY),
                (8806, 500000.0, units::METRE),
                (8807, 0.0, units::METRE),
            ],
        );
        one_sp.base_mut().set_crs(geographic, projected);

        assert!(two_sp.is_equivalent_to(&ctx, &one_sp, Criterion::Equivalent));
        assert!(one_sp.is_equivalent_to(&ctx, &two_sp, Criterion::Equivalent));

        // A different touching latitude is a different cone
        let mut other = single(
            9801,
            &[
                (8801, 41.0, units::DEGREE),
                (8802, -96.0, units::DEGREE),
                (8805, 1.0, units::UNITY),
                (8806, 500000.0, units::METRE),
                (8807, 0.0, units::METRE),
            ],
        );
        other.base_mut().set_crs(geographic, projected);
        assert!(!two_sp.is_equivalent_to(&ctx, &other, Criterion::Equivalent));
        Ok(())
    }

    #[test]
    fn azimuths_wrap_around() {
        let ctx = Minimal::new();
        let omerc = |azimuth: f64| {
            single(
                9812,
                &[
                    (8811, 4.0, units::DEGREE),
                    (8812, 115.0, units::DEGREE),
                    (8813, azimuth, units::DEGREE),
                    (8814, 53.13, units::DEGREE),
                    (8815, 0.99984, units::UNITY),
                    (8806, 0.0, units::METRE),
                    (8807, 0.0, units::METRE),
                ],
            )
        };

        // An azimuth of 350 degrees and one of -10 point the same way
        assert!(omerc(350.0).is_equivalent_to(&ctx, &omerc(-10.0), Criterion::Equivalent));
        assert!(omerc(-10.0).is_equivalent_to(&ctx, &omerc(350.0), Criterion::Equivalent));
        assert!(!omerc(350.0).is_equivalent_to(&ctx, &omerc(-10.0), Criterion::Strict));
        assert!(!omerc(350.0).is_equivalent_to(&ctx, &omerc(170.0), Criterion::Equivalent));
    }

    #[test]
    fn spherical_mercators() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let sphere = Ellipsoid::named("sphere")?;
        let geographic = ctx.add_crs(Crs::geographic2d("Sphere", "Unspecified sphere", sphere));
        let projected = ctx.add_crs(Crs::projected("Sphere / Mercator", "Unspecified sphere", sphere));

        let mut variant_a = single(
            9804,
            &[
                (8801, 0.0, units::DEGREE),
                (8802, 0.0, units::DEGREE),
                (8805, 1.0, units::UNITY),
                (8806, 0.0, units::METRE),
                (8807, 0.0, units::METRE),
            ],
        );
        variant_a.base_mut().set_crs(geographic, projected);

        let mut spherical = single(
            1026,
            &[
                (8801, 0.0, units::DEGREE),
                (8802, 0.0, units::DEGREE),
                (8806, 0.0, units::METRE),
                (8807, 0.0, units::METRE),
            ],
        );
        spherical.base_mut().set_crs(geographic, projected);

        assert!(variant_a.is_equivalent_to(&ctx, &spherical, Criterion::Equivalent));

        // On an ellipsoid the two are distinct mappings
        let grs80 = ctx.add_crs(Crs::geographic2d("NAD83", "NAD83", Ellipsoid::named("GRS80")?));
        variant_a.base_mut().set_crs(grs80, projected);
        assert!(!variant_a.is_equivalent_to(&ctx, &spherical, Criterion::Equivalent));
        Ok(())
    }
}
