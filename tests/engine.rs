//! End-to-end exercises, driven through a user-defined context, to make
//! sure the engine does not accidentally depend on `Minimal` internals.

use opforge::authoring::*;

/// A context a downstream crate might write: same arenas as `Minimal`,
/// plus a tally of registered operations
#[derive(Debug, Default)]
struct Bookkeeping {
    registry: MethodRegistry,
    crs: BTreeMap<CrsHandle, Crs>,
    operations: BTreeMap<OpHandle, CoordinateOperation>,
    inverses: BTreeMap<OpHandle, OpHandle>,
    grid_alternatives: BTreeMap<String, GridAlternative>,
    registrations: usize,
}

impl Context for Bookkeeping {
    fn new() -> Bookkeeping {
        Bookkeeping {
            registry: MethodRegistry::with_builtins(),
            ..Default::default()
        }
    }

    fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    fn add_crs(&mut self, crs: Crs) -> CrsHandle {
        let handle = CrsHandle::new();
        self.crs.insert(handle, crs);
        handle
    }

    fn crs(&self, handle: CrsHandle) -> Result<&Crs, Error> {
        self.crs
            .get(&handle)
            .ok_or_else(|| Error::NotFound(format!("{handle:?}"), String::new()))
    }

    fn add(&mut self, op: CoordinateOperation) -> OpHandle {
        self.registrations += 1;
        let handle = OpHandle::new();
        self.operations.insert(handle, op);
        handle
    }

    fn operation(&self, handle: OpHandle) -> Result<&CoordinateOperation, Error> {
        self.operations
            .get(&handle)
            .ok_or_else(|| Error::NotFound(format!("{handle:?}"), String::new()))
    }

    fn cached_inverse(&self, handle: OpHandle) -> Option<OpHandle> {
        self.inverses.get(&handle).copied()
    }

    fn pair_inverses(&mut self, forward: OpHandle, backward: OpHandle) {
        self.inverses.insert(forward, backward);
        self.inverses.insert(backward, forward);
    }

    fn register_grid_alternative(&mut self, original: &str, alternative: GridAlternative) {
        self.grid_alternatives
            .insert(original.to_string(), alternative);
    }

    fn grid_alternative(&self, original: &str) -> Option<GridAlternative> {
        self.grid_alternatives.get(original).cloned()
    }
}

fn geodetic_pair(ctx: &mut Bookkeeping) -> (CrsHandle, CrsHandle) {
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
fn helmert_to_pipeline_and_back() -> Result<(), Error> {
    let mut ctx = Bookkeeping::new();
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
        Some(3.0),
    )?;
    let forward = ctx.add(op);

    // The forward pipeline: one helmert step, in cartesian space
    let text = compile_to_text(&ctx, ctx.operation(forward)?)?;
    assert_eq!(text.matches("helmert").count(), 1);
    assert!(text.contains("cart ellps=intl | helmert"));
    assert!(text.contains("convention=position_vector"));
    assert!(text.contains("cart inv ellps=GRS80"));

    // The generic inverse compiles to the mirrored pipeline
    let backward = inverse(&mut ctx, forward)?;
    let text = compile_to_text(&ctx, ctx.operation(backward)?)?;
    assert!(text.contains("helmert inv"));
    assert!(text.contains("cart ellps=GRS80"));

    // ... and inverting it again is the memoized original
    assert_eq!(inverse(&mut ctx, backward)?, forward);
    Ok(())
}

#[test]
fn molodensky_inverse_is_strictly_the_negation() -> Result<(), Error> {
    let mut ctx = Bookkeeping::new();
    let (ed50, etrs89) = geodetic_pair(&mut ctx);
    let m = |v| Measure::new(v, units::METRE);

    let forward = create_molodensky(
        &ctx, ed50, etrs89,
        m(-87.0), m(-96.0), m(-120.0),
        m(-251.0), -1.41927e-5,
        None,
    )?;
    let negated = create_molodensky(
        &ctx, etrs89, ed50,
        m(87.0), m(96.0), m(120.0),
        m(251.0), 1.41927e-5,
        None,
    )?;

    let forward = ctx.add(forward);
    let backward = inverse(&mut ctx, forward)?;
    let backward = ctx.operation(backward)?.clone();

    assert!(backward.is_equivalent_to(&ctx, &negated, Criterion::Strict));
    assert!(backward.name().starts_with("Inverse of"));
    Ok(())
}

#[test]
fn equivalence_is_reflexive_and_symmetric() -> Result<(), Error> {
    let mut ctx = Bookkeeping::new();
    let (ed50, etrs89) = geodetic_pair(&mut ctx);

    let translation = [
        Measure::new(-87.0, units::METRE),
        Measure::new(-96.0, units::METRE),
        Measure::new(-120.0, units::METRE),
    ];
    let rotation = [Measure::new(0.5, units::ARC_SECOND); 3];
    let scale = Measure::new(1.2, units::PARTS_PER_MILLION);

    let pv = create_position_vector(&ctx, ed50, etrs89, translation, rotation, scale, None)?;
    let cf = create_coordinate_frame(
        &ctx,
        ed50,
        etrs89,
        translation,
        [Measure::new(-0.5, units::ARC_SECOND); 3],
        scale,
        None,
    )?;

    for criterion in [Criterion::Strict, Criterion::Equivalent] {
        assert!(pv.is_equivalent_to(&ctx, &pv, criterion));
        assert!(cf.is_equivalent_to(&ctx, &cf, criterion));
    }

    // Opposite conventions with negated rotations: the same mapping,
    // whichever way round we ask
    assert!(pv.is_equivalent_to(&ctx, &cf, Criterion::Equivalent));
    assert!(cf.is_equivalent_to(&ctx, &pv, Criterion::Equivalent));
    assert!(!pv.is_equivalent_to(&ctx, &cf, Criterion::Strict));
    Ok(())
}

#[test]
fn validation_and_compilation_complaints() -> Result<(), Error> {
    let mut ctx = Bookkeeping::new();
    let (ed50, etrs89) = geodetic_pair(&mut ctx);

    let op = create_conversion(
        &ctx,
        "homemade",
        ed50,
        etrs89,
        0,
        "homemade method of unknown provenance",
        Vec::new(),
    )?;

    // Validation diagnoses the unknown method...
    let complaints = op
        .as_single()
        .unwrap()
        .validate_parameters(ctx.registry());
    assert_eq!(complaints.len(), 1);
    assert!(complaints[0].contains("homemade"));

    // ... and compilation refuses it outright
    assert!(matches!(
        compile_to_text(&ctx, &op),
        Err(Error::Formatting(_))
    ));
    Ok(())
}

#[test]
fn concatenation_with_grid_substitution() -> Result<(), Error> {
    let mut ctx = Bookkeeping::new();
    let (ed50, etrs89) = geodetic_pair(&mut ctx);

    let shift = create_ntv2(&ctx, ed50, etrs89, "ed50_etrs89.gsb", Some(0.1))?;
    let shift = ctx.add(shift);

    // Nothing registered: substitution hands the handle back
    assert_eq!(substitute_grid_alternatives(&mut ctx, shift), shift);

    // A registered repackaging substitutes, keeping method and direction
    ctx.register_grid_alternative(
        "ed50_etrs89.gsb",
        GridAlternative::new("eu_ed50_etrs89.tif", "GTiff", false),
    );
    let substituted = substitute_grid_alternatives(&mut ctx, shift);
    assert_ne!(substituted, shift);

    let ballpark = create_ballpark_geographic_offset(&ctx, etrs89, etrs89)?;
    let ballpark = ctx.add(ballpark);

    let chain = concatenate(&ctx, None, &[substituted, ballpark])?;
    assert_eq!(chain.base().accuracy, [0.1]);
    assert!(chain.base().ballpark);
    assert_eq!(
        compile_to_text(&ctx, &chain)?,
        "hgridshift grids=eu_ed50_etrs89.tif"
    );
    Ok(())
}

#[test]
fn registrations_go_through_the_trait() -> Result<(), Error> {
    let mut ctx = Bookkeeping::new();
    let (ed50, etrs89) = geodetic_pair(&mut ctx);
    let m = |v| Measure::new(v, units::METRE);

    let op = create_geocentric_translations(&ctx, ed50, etrs89, m(1.0), m(2.0), m(3.0), None)?;
    let forward = ctx.add(op);
    let _ = inverse(&mut ctx, forward)?;

    // The forward registration plus the memoized inverse
    assert_eq!(ctx.registrations, 2);
    Ok(())
}
