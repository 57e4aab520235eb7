//! The black-box solver backend boundary.
//!
//! Everything the adapter needs from a solver engine is captured by
//! [`SolverBackend`]; the engine never sees typed parameters, only flat
//! `f64` arrays and an opaque, type-erased callback context. Engines live
//! outside this crate — the adapter performs no search of its own.
use std::any::Any;

use ndarray::{Array1, ArrayView1, ArrayViewMut1};

use crate::optimization::solver_adapter::algorithms::NativeAlgorithm;

/// The raw objective callback signature required by the backend.
///
/// Arguments are the current flat parameter array, an optional flat
/// gradient array (unused in derivative-free mode), and the opaque context
/// registered alongside the callback. The backend invokes this once per
/// objective evaluation and uses the returned scalar directly.
pub type RawEvalFn =
    fn(params: ArrayView1<'_, f64>, gradient: Option<ArrayViewMut1<'_, f64>>, context: &mut dyn Any) -> f64;

/// Backend-reported solve status, surfaced verbatim to the caller.
///
/// The success family describes *why* the solver stopped; the failure
/// family mirrors the backend's own error reporting. Neither is converted
/// into a crate error — callers branch on the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    /// Generic backend failure.
    Failure,
    /// The backend rejected its configuration or inputs.
    InvalidArgs,
    /// The backend ran out of memory.
    OutOfMemory,
    /// Progress halted by floating-point roundoff.
    RoundoffLimited,
    /// The solve was forcibly stopped.
    ForcedStop,
    /// Generic success.
    Success,
    /// A configured objective stop value was reached.
    StopValReached,
    /// The function-value tolerance was satisfied.
    FtolReached,
    /// The parameter tolerance was satisfied.
    XtolReached,
    /// The evaluation cap was exhausted before any tolerance was met.
    MaxEvalReached,
    /// The time cap was exhausted before any tolerance was met.
    MaxTimeReached,
}

impl SolveStatus {
    /// Whether the backend considers the solve to have ended normally.
    pub fn is_success(self) -> bool {
        matches!(
            self,
            SolveStatus::Success
                | SolveStatus::StopValReached
                | SolveStatus::FtolReached
                | SolveStatus::XtolReached
                | SolveStatus::MaxEvalReached
                | SolveStatus::MaxTimeReached
        )
    }
}

/// Contract every pluggable solver engine presents to the adapter.
///
/// The adapter drives implementors through a fixed, single-shot sequence:
/// `configure`, bound pushes, optional [`attach_local_solver`], stopping
/// configuration, exactly one of the two objective registrations, then
/// [`solve`] with the seeded working array. An engine instance belongs to
/// exactly one solve; nothing is reused afterwards.
///
/// [`attach_local_solver`]: SolverBackend::attach_local_solver
/// [`solve`]: SolverBackend::solve
pub trait SolverBackend: Sized {
    /// Create an engine instance for the given algorithm and problem
    /// dimension.
    fn configure(algorithm: NativeAlgorithm, dimension: usize) -> Self;

    /// Push the per-parameter lower bounds, index-aligned with the
    /// working array.
    fn set_lower_bounds(&mut self, lower: ArrayView1<'_, f64>);

    /// Push the per-parameter upper bounds, index-aligned with the
    /// working array.
    fn set_upper_bounds(&mut self, upper: ArrayView1<'_, f64>);

    /// Attach a nested local refinement solver. Only called when the
    /// primary algorithm requires one; the attached instance has already
    /// been configured and bounded by the adapter.
    fn attach_local_solver(&mut self, local: Self);

    /// Set an absolute function-value stopping tolerance.
    fn set_ftol_abs(&mut self, tol: f64);

    /// Set a relative function-value stopping tolerance.
    fn set_ftol_rel(&mut self, tol: f64);

    /// Cap the number of objective evaluations.
    fn set_maxeval(&mut self, maxeval: u64);

    /// Register a minimization objective with its opaque context. The
    /// context must remain available to every callback invocation for the
    /// duration of the subsequent [`solve`](SolverBackend::solve).
    fn set_min_objective(&mut self, eval: RawEvalFn, context: Box<dyn Any>);

    /// Register a maximization objective with its opaque context.
    fn set_max_objective(&mut self, eval: RawEvalFn, context: Box<dyn Any>);

    /// Run the search. `working` arrives seeded with the initial point and
    /// must hold the best point found on return; the returned pair is the
    /// stop status and the achieved objective value.
    fn solve(&mut self, working: &mut Array1<f64>) -> (SolveStatus, f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // The success family must cover exactly the normal-termination codes;
    // backend failures must not read as success.
    fn success_family_matches_backend_semantics() {
        for status in [
            SolveStatus::Success,
            SolveStatus::StopValReached,
            SolveStatus::FtolReached,
            SolveStatus::XtolReached,
            SolveStatus::MaxEvalReached,
            SolveStatus::MaxTimeReached,
        ] {
            assert!(status.is_success(), "{status:?} should be a success code");
        }
        for status in [
            SolveStatus::Failure,
            SolveStatus::InvalidArgs,
            SolveStatus::OutOfMemory,
            SolveStatus::RoundoffLimited,
            SolveStatus::ForcedStop,
        ] {
            assert!(!status.is_success(), "{status:?} should be a failure code");
        }
    }
}
