//! The `Context` trait and its company.
//!
//! A context owns the arenas everything else refers into: the CRS nodes,
//! the registered coordinate operations, the memoized inverse pairs, and
//! the per-installation grid alternatives. The method registry is injected
//! at construction, so tests can run against a minimal or empty registry.

use crate::internal::*;

pub mod minimal;

/// An installation-local replacement for a grid file named by the registry
#[derive(Clone, Debug, PartialEq)]
pub struct GridAlternative {
    /// The replacement filename
    pub name: String,
    /// The packaging format, informational ("NTv2", "GTiff", ...)
    pub format: String,
    /// True when the replacement interpolates in the opposite direction
    /// of the original grid
    pub reversed: bool,
}

impl GridAlternative {
    pub fn new(name: &str, format: &str, reversed: bool) -> GridAlternative {
        GridAlternative {
            name: name.to_string(),
            format: format.to_string(),
            reversed,
        }
    }
}

/// The mode of communication between the operation engine and its
/// surroundings: arenas for CRS and operations, inverse memoization, grid
/// alternatives, and the injected method registry.
pub trait Context {
    fn new() -> Self
    where
        Self: Sized;

    /// The method registry this context resolves methods against
    fn registry(&self) -> &MethodRegistry;

    /// Register a CRS node, getting a copyable handle to it. The node
    /// lives as long as the context does.
    fn add_crs(&mut self, crs: Crs) -> CrsHandle;

    fn crs(&self, handle: CrsHandle) -> Result<&Crs, Error>;

    /// Register a coordinate operation, getting a handle to it
    fn add(&mut self, op: CoordinateOperation) -> OpHandle;

    fn operation(&self, handle: OpHandle) -> Result<&CoordinateOperation, Error>;

    /// The memoized inverse of `handle`, if one has been derived
    fn cached_inverse(&self, handle: OpHandle) -> Option<OpHandle>;

    /// Record that `forward` and `backward` are each other's inverses.
    /// One call pairs both directions.
    fn pair_inverses(&mut self, forward: OpHandle, backward: OpHandle);

    /// Register an installation-local alternative for the grid file
    /// `original`
    fn register_grid_alternative(&mut self, original: &str, alternative: GridAlternative);

    fn grid_alternative(&self, original: &str) -> Option<GridAlternative>;
}
