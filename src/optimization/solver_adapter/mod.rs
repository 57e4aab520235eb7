//! solver_adapter — typed problems on a flat-array solver backend.
//!
//! Purpose
//! -------
//! Bridge a strongly typed optimization problem — objective over a fixed
//! tuple of parameters, per-parameter bounds, a seed point — onto a backend
//! engine whose entire calling convention is "flat arrays of `f64` plus an
//! opaque callback context". The backend itself is an external collaborator
//! behind the [`SolverBackend`] trait; this module owns every translation
//! across that boundary.
//!
//! Key behaviors
//! -------------
//! - One positional marshalling primitive ([`marshal`]) drives all four
//!   typed↔flat copies: bounds, seed values, objective arguments, and the
//!   decoded optimum.
//! - A pure name mapper ([`algorithms::method_to_native`]) translates
//!   abstract method tags into native backend identifiers and halts on
//!   tags without a mapping.
//! - The raw objective shim ([`shim::raw_objective`]) matches the backend
//!   callback signature exactly and rebuilds the typed argument tuple on
//!   every evaluation.
//! - The orchestrator ([`BoundedOptimizer`]) runs the single-shot solve
//!   lifecycle: configure, bound, optionally attach a nested local
//!   refinement solver, apply stopping criteria, seed, register the
//!   direction-appropriate objective, solve, and decode.
//!
//! Invariants & assumptions
//! ------------------------
//! - Index `i` of the parameter tuple corresponds to index `i` of every
//!   flat array, always; the marshalling loop never reorders, filters, or
//!   partially applies.
//! - All per-solve state (flat arrays, the erased objective context) lives
//!   for exactly one `optimize` call; only the adapter's own configuration
//!   persists across calls, and it is read-only while solving.
//! - Backend statuses pass through verbatim inside [`SolveOutcome`];
//!   user-objective behavior is opaque to this layer.

pub mod algorithms;
pub mod api;
pub mod backend;
pub mod marshal;
pub mod options;
pub mod shim;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::algorithms::{method_to_native, Method, NativeAlgorithm};
pub use self::api::BoundedOptimizer;
pub use self::backend::{RawEvalFn, SolveStatus, SolverBackend};
pub use self::marshal::{Bound, Marshal, OptValue, ParamSequence, SlotAction};
pub use self::options::{OptDir, SolveOutcome, StopCriteria, StopLimitType};

pub mod prelude {
    pub use super::algorithms::{Method, NativeAlgorithm};
    pub use super::api::BoundedOptimizer;
    pub use super::backend::{SolveStatus, SolverBackend};
    pub use super::marshal::Bound;
    pub use super::options::{OptDir, SolveOutcome, StopCriteria, StopLimitType};
}
