//! optimization — solver adapter stack and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer that marshals strongly typed,
//! bounded problems onto a type-erased, flat-array solver backend. Callers
//! describe the problem (objective, seed tuple, per-parameter bounds,
//! stopping criteria, direction); the adapter handles every translation in
//! and out of the backend's calling convention.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level adapter for **bounded derivative-free solves**
//!   (`solver_adapter`), including algorithm selection, stopping criteria,
//!   and nested local-refinement wiring.
//! - Normalize recoverable configuration issues into a single enum
//!   (`errors::OptError`) with a common result alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - The adapter operates on a fixed-arity parameter tuple; every flat
//!   array it exchanges with the backend shares that arity, index for
//!   index.
//! - Backend solve statuses are data, not errors: they are carried
//!   verbatim in the outcome for the caller to branch on.
//! - This module and its submodules avoid I/O and logging; higher layers
//!   are responsible for reporting progress and diagnostics.
//!
//! Downstream usage
//! ----------------
//! - Engine crates implement `solver_adapter::SolverBackend` for their
//!   solver; application code builds a `solver_adapter::BoundedOptimizer`
//!   and calls `optimize` / `optimize_min` / `optimize_max`.
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules cover local concerns: name mapping,
//!   marshalling order and conversions, criteria validation, and the raw
//!   callback shim.
//! - Integration tests exercise full solves against in-test backends,
//!   checking convergence, direction handling, iteration caps, and the
//!   nested-refinement configuration.

pub mod errors;
pub mod solver_adapter;

pub use self::errors::{OptError, OptResult};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use flatopt::optimization::prelude::*;
//
// to import the main adapter surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::solver_adapter::prelude::*;
}
