//! The method & parameter registry.
//!
//! A [`MethodMapping`] ties one transformation or conversion method together
//! across three naming dialects: the registry identity (EPSG-style name and
//! numeric code), the legacy text name, and the pipeline-step vocabulary the
//! compiler emits. Each mapping carries its ordered parameter mappings.
//!
//! The builtin tables live in [`builtins`] as process-wide constants. A
//! [`MethodRegistry`] is an explicit value, injected into the engine through
//! the context, so tests can substitute a minimal registry.

use crate::internal::*;
use once_cell::sync::Lazy;

pub mod builtins;
pub mod names;

/// One parameter of a method, mapped across naming dialects.
/// Belongs to exactly one [`MethodMapping`].
#[derive(Debug)]
pub struct ParamMapping {
    /// Canonical registry name
    pub name: &'static str,
    /// Registry code; 0 if none
    pub code: u32,
    /// Legacy dialect name ("" if none)
    pub legacy: &'static str,
    /// The broad unit class the value must carry
    pub unit_type: UnitType,
    /// Pipeline parameter key ("" if the parameter has no pipeline rendition)
    pub step_key: &'static str,
}

/// One method, mapped across naming dialects, with its ordered parameters.
/// Identity is primarily by `code`, secondarily by tolerant name match.
#[derive(Debug)]
pub struct MethodMapping {
    /// Canonical registry name
    pub name: &'static str,
    /// Registry code; 0 if none
    pub code: u32,
    /// Legacy dialect name ("" if none)
    pub legacy: &'static str,
    /// Pipeline step name ("" if the compiler has a bespoke rendition)
    pub step: &'static str,
    /// Auxiliary pipeline flags accompanying the step name. This is how two
    /// registry methods sharing one legacy name, differing only by e.g. an
    /// axis-order convention, are told apart - no second table needed.
    pub step_flags: &'static [&'static str],
    /// The ordered parameter mappings of the method
    pub params: &'static [&'static ParamMapping],
}

impl MethodMapping {
    /// Locate a parameter mapping: (1) exact nonzero-code match,
    /// (2) tolerant name match against the registry, then legacy, name
    pub fn find_param(&self, code: u32, name: &str) -> Option<&'static ParamMapping> {
        if code != 0 {
            if let Some(param) = self.params.iter().find(|p| p.code == code) {
                return Some(*param);
            }
        }
        if let Some(param) = self
            .params
            .iter()
            .find(|p| names::is_equivalent_name(p.name, name))
        {
            return Some(*param);
        }
        self.params
            .iter()
            .find(|p| !p.legacy.is_empty() && names::is_equivalent_name(p.legacy, name))
            .copied()
    }
}

/// An explicit, test-constructible registry of method mappings.
/// Read-only after construction; safe to share between threads.
#[derive(Clone, Debug, Default)]
pub struct MethodRegistry {
    methods: Vec<&'static MethodMapping>,
}

impl MethodRegistry {
    /// An empty registry. Mostly useful for tests exercising the
    /// unknown-method paths.
    pub fn new() -> MethodRegistry {
        MethodRegistry::default()
    }

    /// The registry of all builtin method mappings
    pub fn with_builtins() -> MethodRegistry {
        MethodRegistry {
            methods: builtins::ALL.to_vec(),
        }
    }

    /// Register an additional mapping (user defined methods)
    pub fn register(&mut self, mapping: &'static MethodMapping) {
        self.methods.push(mapping);
    }

    /// Locate a method mapping. Matching order: (1) exact registry-code
    /// match if a nonzero code is supplied, else (2) tolerant name match
    /// against the canonical registry name, else (3) against the legacy name.
    pub fn find_method(&self, code: u32, name: &str) -> Option<&'static MethodMapping> {
        if code != 0 {
            if let Some(m) = self.methods.iter().find(|m| m.code == code) {
                return Some(*m);
            }
        }
        if let Some(m) = self
            .methods
            .iter()
            .find(|m| names::is_equivalent_name(m.name, name))
        {
            return Some(*m);
        }
        self.methods
            .iter()
            .find(|m| !m.legacy.is_empty() && names::is_equivalent_name(m.legacy, name))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// The shared default registry: constructed on first use, immutable ever
/// after, hence freely readable from any thread
pub fn default_registry() -> &'static MethodRegistry {
    static DEFAULT: Lazy<MethodRegistry> = Lazy::new(MethodRegistry::with_builtins);
    &DEFAULT
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_code_and_name() {
        let reg = MethodRegistry::with_builtins();

        // Code match trumps name match
        let m = reg.find_method(9606, "some nonsense").unwrap();
        assert_eq!(m.name, "Position Vector transformation (geog2D domain)");

        // Tolerant name match
        let m = reg
            .find_method(0, "position_vector_transformation_geog2d_domain")
            .unwrap();
        assert_eq!(m.code, 9606);

        // Legacy dialect match
        let m = reg.find_method(0, "Position_Vector").unwrap();
        assert!([9606, 1033].contains(&m.code));

        assert!(reg.find_method(0, "flat earth transformation").is_none());
    }

    #[test]
    fn param_lookup() {
        let reg = MethodRegistry::with_builtins();
        let m = reg.find_method(9606, "").unwrap();

        let p = m.find_param(8605, "").unwrap();
        assert_eq!(p.name, "X-axis translation");
        assert_eq!(p.step_key, "x");

        let p = m.find_param(0, "x axis translation").unwrap();
        assert_eq!(p.code, 8605);

        assert!(m.find_param(0, "semi-major axis length difference").is_none());
    }

    #[test]
    fn empty_registry() {
        let reg = MethodRegistry::new();
        assert!(reg.is_empty());
        assert!(reg.find_method(9606, "NTv2").is_none());
    }
}
