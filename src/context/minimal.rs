//! A minimalistic context. No persistence, no I/O: everything lives in
//! in-memory arenas. Fine for embedded use and for testing; a production
//! provider backed by an actual registry database would implement
//! [`Context`] the same way.

use crate::authoring::*;

#[derive(Debug, Default)]
pub struct Minimal {
    registry: MethodRegistry,
    crs: BTreeMap<CrsHandle, Crs>,
    operations: BTreeMap<OpHandle, CoordinateOperation>,
    inverses: BTreeMap<OpHandle, OpHandle>,
    grid_alternatives: BTreeMap<String, GridAlternative>,
}

impl Minimal {
    /// A context resolving methods against an explicit registry - an empty
    /// one, a trimmed-down one, or one extended with local methods
    pub fn with_registry(registry: MethodRegistry) -> Minimal {
        Minimal {
            registry,
            ..Default::default()
        }
    }
}

impl Context for Minimal {
    /// A fresh context with the builtin method registry
    fn new() -> Minimal {
        Minimal::with_registry(MethodRegistry::with_builtins())
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
        self.crs.get(&handle).ok_or_else(|| {
            Error::NotFound(format!("{handle:?}"), ": no such CRS in context".to_string())
        })
    }

    fn add(&mut self, op: CoordinateOperation) -> OpHandle {
        let handle = OpHandle::new();
        self.operations.insert(handle, op);
        handle
    }

    fn operation(&self, handle: OpHandle) -> Result<&CoordinateOperation, Error> {
        self.operations.get(&handle).ok_or_else(|| {
            Error::NotFound(
                format!("{handle:?}"),
                ": no such operation in context".to_string(),
            )
        })
    }

    fn cached_inverse(&self, handle: OpHandle) -> Option<OpHandle> {
        self.inverses.get(&handle).copied()
    }

    fn pair_inverses(&mut self, forward: OpHandle, backward: OpHandle) {
        self.inverses.insert(forward, backward);
        self.inverses.insert(backward, forward);
    }

    fn register_grid_alternative(&mut self, original: &str, alternative: GridAlternative) {
        self.grid_alternatives.insert(original.to_string(), alternative);
    }

    fn grid_alternative(&self, original: &str) -> Option<GridAlternative> {
        self.grid_alternatives.get(original).cloned()
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::authoring::*;

    #[test]
    fn arenas() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let crs = ctx.add_crs(Crs::geographic2d(
            "ED50",
            "European Datum 1950",
            Ellipsoid::named("intl")?,
        ));
        assert_eq!(ctx.crs(crs)?.name, "ED50");
        assert!(ctx.crs(CrsHandle::new()).is_err());
        assert!(ctx.operation(OpHandle::new()).is_err());
        Ok(())
    }

    #[test]
    fn injected_registry() {
        let ctx = Minimal::with_registry(MethodRegistry::new());
        assert!(ctx.registry().is_empty());
        assert!(ctx.registry().find_method(9615, "NTv2").is_none());

        let ctx = Minimal::new();
        assert!(ctx.registry().find_method(9615, "NTv2").is_some());
    }

    #[test]
    fn inverse_memoization_is_bidirectional() {
        let mut ctx = Minimal::new();
        let a = OpHandle::new();
        let b = OpHandle::new();
        assert!(ctx.cached_inverse(a).is_none());
        ctx.pair_inverses(a, b);
        assert_eq!(ctx.cached_inverse(a), Some(b));
        assert_eq!(ctx.cached_inverse(b), Some(a));
    }
}
