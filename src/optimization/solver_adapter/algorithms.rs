//! Abstract method tags, native backend identifiers, and the mapping
//! between them.
//!
//! The adapter's public surface speaks in [`Method`] tags; the backend
//! speaks in [`NativeAlgorithm`] identifiers. [`method_to_native`] is the
//! single translation point. A tag without a native mapping is a
//! programming error, not a runtime condition, and translation halts
//! rather than silently defaulting.
use std::str::FromStr;

use crate::optimization::errors::OptError;

/// Abstract optimization method tag selected by callers.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"Simplex"`, `"Subplex"`, `"Genetic"`, `"ParticleSwarm"`). Unknown
/// names return `OptError::InvalidMethodName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Local Nelder–Mead style simplex search.
    Simplex,
    /// Local subplex search (simplex on subspaces).
    Subplex,
    /// Global evolutionary search.
    Genetic,
    /// Accepted by the configuration surface but not yet mapped to a
    /// native backend identifier.
    ParticleSwarm,
}

impl FromStr for Method {
    type Err = OptError;

    /// Parse a method tag from a string (case-insensitive).
    ///
    /// # Errors
    /// Returns `OptError::InvalidMethodName` for any unrecognized name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simplex" => Ok(Method::Simplex),
            "subplex" => Ok(Method::Subplex),
            "genetic" => Ok(Method::Genetic),
            "particleswarm" => Ok(Method::ParticleSwarm),
            _ => Err(OptError::InvalidMethodName {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'Simplex', 'Subplex', 'Genetic' or \
                         'ParticleSwarm'.",
            }),
        }
    }
}

/// Native algorithm identifier understood by the backend solver.
///
/// The derivative-free local methods map one-to-one from [`Method`];
/// `Mlsl` and `MlslLds` are global multi-level single-linkage variants
/// that require a nested local refinement solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeAlgorithm {
    /// Nelder–Mead simplex.
    Neldermead,
    /// Subplex.
    Sbplx,
    /// ESCH evolutionary strategy.
    Esch,
    /// Multi-level single-linkage.
    Mlsl,
    /// Multi-level single-linkage with low-discrepancy start points.
    MlslLds,
}

impl NativeAlgorithm {
    /// Whether this algorithm needs a nested local refinement solver
    /// attached before solving. Closed membership check; every other
    /// identifier falls through untouched.
    pub fn requires_local_refinement(self) -> bool {
        matches!(self, NativeAlgorithm::Mlsl | NativeAlgorithm::MlslLds)
    }
}

/// Translate an abstract method tag into the backend's native identifier.
///
/// # Panics
/// Panics when the tag has no native mapping ([`Method::ParticleSwarm`]).
/// This is a programmer error caught at translation time; it must halt
/// rather than fall back to a default algorithm.
pub fn method_to_native(method: Method) -> NativeAlgorithm {
    match method {
        Method::Simplex => NativeAlgorithm::Neldermead,
        Method::Subplex => NativeAlgorithm::Sbplx,
        Method::Genetic => NativeAlgorithm::Esch,
        Method::ParticleSwarm => {
            panic!("no native backend algorithm is mapped for {method:?}")
        }
    }
}
