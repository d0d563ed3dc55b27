//! Chaining operations into a concatenated operation.

use crate::crs::handles_equivalent;
use crate::internal::*;

/// Chain `steps` into a concatenated operation, first-to-last.
///
/// The chain must be non-empty, and each member's target CRS must be
/// equivalent to its successor's source CRS (absent CRSs at the seam are
/// accepted as long as both sides are absent). The concatenation's stated
/// accuracy is the sum of the members' stated accuracies; a ballpark
/// member makes the whole chain ballpark.
pub fn concatenate(
    ctx: &dyn Context,
    name: Option<&str>,
    steps: &[OpHandle],
) -> Result<CoordinateOperation, Error> {
    if steps.is_empty() {
        return Err(Error::InvalidOperation(
            "cannot concatenate zero operations".to_string(),
        ));
    }

    let mut resolved = Vec::with_capacity(steps.len());
    for step in steps {
        resolved.push(ctx.operation(*step)?);
    }

    for (i, pair) in resolved.windows(2).enumerate() {
        let seam_out = pair[0].base().target_crs();
        let seam_in = pair[1].base().source_crs();
        if !handles_equivalent(ctx, seam_out, seam_in) {
            return Err(Error::InvalidOperation(format!(
                "step {} ('{}') does not chain with step {} ('{}')",
                i,
                pair[0].name(),
                i + 1,
                pair[1].name(),
            )));
        }
    }

    let source = resolved.first().map(|op| op.base().source_crs()).unwrap_or_default();
    let target = resolved.last().map(|op| op.base().target_crs()).unwrap_or_default();

    let name = match name {
        Some(name) => name.to_string(),
        None => default_name(ctx, source, target, &resolved),
    };
    let mut base = OperationBase::new(&name);
    if let (Some(source), Some(target)) = (source, target) {
        base.set_crs(source, target);
    }

    // Worst case: the members' errors add up
    let stated: Vec<f64> = resolved
        .iter()
        .filter_map(|op| op.base().accuracy.iter().copied().reduce(f64::max))
        .collect();
    if !stated.is_empty() {
        base.accuracy = vec![stated.iter().sum()];
    }
    base.ballpark = resolved.iter().any(|op| op.base().ballpark);
    base.requires_epoch = resolved.iter().any(|op| op.base().requires_epoch);

    Ok(CoordinateOperation::Concatenated(ConcatenatedOperation {
        base,
        steps: steps.to_vec(),
    }))
}

fn default_name(
    ctx: &dyn Context,
    source: Option<CrsHandle>,
    target: Option<CrsHandle>,
    steps: &[&CoordinateOperation],
) -> String {
    if let (Some(source), Some(target)) = (source, target) {
        if let (Ok(source), Ok(target)) = (ctx.crs(source), ctx.crs(target)) {
            return format!("{} to {}", source.name, target.name);
        }
    }
    steps
        .iter()
        .map(|op| op.name())
        .collect::<Vec<_>>()
        .join(" + ")
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::authoring::*;

    #[test]
    fn chaining() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let intl = Ellipsoid::named("intl")?;
        let wgs84 = Ellipsoid::named("WGS84")?;
        let grs80 = Ellipsoid::named("GRS80")?;
        let ed50 = ctx.add_crs(Crs::geographic2d("ED50", "European Datum 1950", intl));
        let etrs89 = ctx.add_crs(Crs::geographic2d("ETRS89", "European Terrestrial Reference System 1989", grs80));
        let wgs = ctx.add_crs(Crs::geographic2d("WGS 84", "World Geodetic System 1984", wgs84));
        let m = |v| Measure::new(v, units::METRE);

        let first = create_geocentric_translations(&ctx, ed50, etrs89, m(-87.0), m(-98.0), m(-121.0), Some(5.0))?;
        let second = create_ballpark_geographic_offset(&ctx, etrs89, wgs)?;
        let first = ctx.add(first);
        let second = ctx.add(second);

        let chain = concatenate(&ctx, None, &[first, second])?;
        assert_eq!(chain.name(), "ED50 to WGS 84");
        assert_eq!(chain.base().source_crs(), Some(ed50));
        assert_eq!(chain.base().target_crs(), Some(wgs));
        assert_eq!(chain.base().accuracy, [5.0]);
        assert!(chain.base().ballpark);

        // Out of order, the seam does not match
        assert!(concatenate(&ctx, None, &[second, first]).is_err());
        // And an empty chain is no chain
        assert!(concatenate(&ctx, None, &[]).is_err());
        Ok(())
    }
}
