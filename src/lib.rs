//! flatopt — typed, bounded optimization over flat-array solver backends.
//!
//! Purpose
//! -------
//! Let callers describe a numerical optimization problem in fully typed
//! terms — an objective over a fixed tuple of parameters, each with a bound
//! range and an initial value — and have it solved by a pluggable backend
//! engine that only understands flat arrays of doubles and an opaque
//! callback context. This crate is the marshalling and orchestration layer
//! in between; it implements no search algorithm of its own.
//!
//! Key behaviors
//! -------------
//! - Copy bounds, initial values, objective arguments, and results between
//!   a heterogeneous typed tuple and the backend's flat `f64` arrays via a
//!   single positional marshalling primitive
//!   (`optimization::solver_adapter::marshal`).
//! - Translate abstract method tags into native backend algorithm
//!   identifiers, halting on tags with no mapping
//!   (`optimization::solver_adapter::algorithms`).
//! - Drive the full solve lifecycle — configure, bound, seed, solve,
//!   decode — against any engine implementing
//!   [`optimization::solver_adapter::SolverBackend`].
//!
//! Conventions
//! -----------
//! - Backend status codes are surfaced verbatim in the solve outcome; this
//!   layer never retries and never converts them into errors.
//! - Configuration mistakes that are recoverable (bad stop limits, unknown
//!   method names) surface as [`optimization::OptError`]; asking for a
//!   method tag with no native mapping is a programmer error and panics.
//! - This crate avoids I/O and logging; reporting is the caller's concern.
//!
//! Downstream usage
//! ----------------
//! - Implement [`optimization::solver_adapter::SolverBackend`] for your
//!   engine (or use one supplied elsewhere), then build a
//!   [`optimization::solver_adapter::BoundedOptimizer`] and call
//!   `optimize` with a typed objective, a seed tuple, and matching bounds.
//! - The curated surface is importable in one line via
//!   `flatopt::prelude::*`.

pub mod optimization;

pub mod prelude {
    pub use crate::optimization::prelude::*;
}
