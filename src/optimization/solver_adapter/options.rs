//! Solve-time configuration and the typed outcome.
//!
//! - [`StopCriteria`]: tolerance type/value and the evaluation cap that
//!   govern when a solve halts.
//! - [`OptDir`]: which backend objective registration is used.
//! - [`SolveOutcome`]: status, score, and decoded typed optimum returned
//!   by a solve, produced exactly once per call and owned by the caller.
use crate::optimization::errors::{OptError, OptResult};
use crate::optimization::solver_adapter::backend::SolveStatus;

/// Interpretation of the stop limit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopLimitType {
    /// Absolute function-value tolerance.
    Absolute,
    /// Relative function-value tolerance.
    Relative,
}

/// Stopping criteria for a single solve.
///
/// Fields:
/// - `limit_type` — how `limit` is interpreted by the backend.
/// - `limit` — the function-value tolerance.
/// - `max_iterations` — evaluation cap; `0` means unbounded.
///
/// Fields are public for literal construction; [`StopCriteria::new`]
/// additionally validates the limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopCriteria {
    pub limit_type: StopLimitType,
    pub limit: f64,
    pub max_iterations: u64,
}

impl StopCriteria {
    /// Construct validated stopping criteria.
    ///
    /// # Rules
    /// - `limit` must be **finite and strictly positive**.
    /// - `max_iterations` may be any value; `0` means unbounded.
    ///
    /// # Errors
    /// Returns [`OptError::InvalidStopLimit`] for a non-finite or
    /// non-positive limit.
    pub fn new(limit_type: StopLimitType, limit: f64, max_iterations: u64) -> OptResult<Self> {
        if !limit.is_finite() {
            return Err(OptError::InvalidStopLimit {
                limit,
                reason: "Stop limit must be finite.",
            });
        }
        if limit <= 0.0 {
            return Err(OptError::InvalidStopLimit {
                limit,
                reason: "Stop limit must be positive.",
            });
        }
        Ok(Self { limit_type, limit, max_iterations })
    }
}

impl Default for StopCriteria {
    /// Relative limit of `1e-4`, unbounded iterations.
    fn default() -> Self {
        Self { limit_type: StopLimitType::Relative, limit: 1e-4, max_iterations: 0 }
    }
}

/// Optimization direction: selects which backend objective-registration
/// call the adapter uses. Exactly one of the two is ever called per solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptDir {
    Min,
    Max,
}

/// Result of one solve: the backend's verbatim stop status, the achieved
/// objective value, and the optimum decoded back into typed form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOutcome<P> {
    pub status: SolveStatus,
    pub score: f64,
    pub optimum: P,
}

impl<P> SolveOutcome<P> {
    /// Whether the backend considers the solve to have ended normally.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
