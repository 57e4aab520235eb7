//! High-level entry point: the orchestrating optimizer adapter.
//!
//! [`BoundedOptimizer`] owns the per-adapter configuration (native
//! algorithm, stopping criteria, direction, local refinement method) and
//! drives a pluggable [`SolverBackend`] through the full request
//! lifecycle: configure → bound → seed → solve → decode. All per-solve
//! state is scoped to one `optimize` call.
use std::marker::PhantomData;

use ndarray::Array1;

use crate::optimization::solver_adapter::{
    algorithms::{method_to_native, Method, NativeAlgorithm},
    backend::SolverBackend,
    marshal::{ArgumentCopy, BoundsCopy, Marshal, ParamSequence, ResultCopy, SeedCopy},
    options::{OptDir, SolveOutcome, StopCriteria, StopLimitType},
    shim::raw_objective,
};

/// Adapter that solves typed, bounded problems on the backend engine `B`.
///
/// Configuration is fixed at construction (builder-style overrides aside)
/// and read-only while solving. The backend is instantiated fresh inside
/// every [`optimize`](BoundedOptimizer::optimize) call — at most twice:
/// the primary solver plus, for algorithms in the nested-refinement class,
/// one local solver sharing the primary's bounds.
#[derive(Debug, Clone)]
pub struct BoundedOptimizer<B> {
    algorithm: NativeAlgorithm,
    stop: StopCriteria,
    direction: OptDir,
    local_method: Method,
    backend: PhantomData<B>,
}

impl<B: SolverBackend> BoundedOptimizer<B> {
    /// Create an adapter for an explicit native algorithm.
    ///
    /// Direction defaults to minimization; the local refinement method
    /// defaults to the simplex tag and is only consulted for algorithms
    /// that require nested refinement.
    pub fn new(algorithm: NativeAlgorithm, stop: StopCriteria) -> Self {
        Self {
            algorithm,
            stop,
            direction: OptDir::Min,
            local_method: Method::Simplex,
            backend: PhantomData,
        }
    }

    /// Adapter running the local simplex method.
    pub fn simplex(stop: StopCriteria) -> Self {
        Self::new(method_to_native(Method::Simplex), stop)
    }

    /// Adapter running the local subplex method.
    pub fn subplex(stop: StopCriteria) -> Self {
        Self::new(method_to_native(Method::Subplex), stop)
    }

    /// Adapter running the global evolutionary method.
    pub fn genetic(stop: StopCriteria) -> Self {
        Self::new(method_to_native(Method::Genetic), stop)
    }

    /// Override the optimization direction used by
    /// [`optimize`](BoundedOptimizer::optimize).
    pub fn with_direction(mut self, direction: OptDir) -> Self {
        self.direction = direction;
        self
    }

    /// Override the nested local refinement method.
    ///
    /// Consulted only when the configured algorithm belongs to the
    /// refinement class; translation happens at solve time, so an
    /// unmapped tag panics there.
    pub fn with_local_method(mut self, method: Method) -> Self {
        self.local_method = method;
        self
    }

    pub fn algorithm(&self) -> NativeAlgorithm {
        self.algorithm
    }

    pub fn stop_criteria(&self) -> StopCriteria {
        self.stop
    }

    pub fn direction(&self) -> OptDir {
        self.direction
    }

    pub fn local_method(&self) -> Method {
        self.local_method
    }

    /// Solve with the configured direction.
    ///
    /// # Behavior
    /// 1. Sizes the lower/upper/working flat arrays to `P::ARITY`.
    /// 2. Configures a fresh backend for (algorithm, arity).
    /// 3. Marshals the bound tuple into the flat bound arrays and pushes
    ///    them to the backend.
    /// 4. For algorithms in the nested-refinement class, configures a
    ///    second backend instance with the translated local method and
    ///    identical bounds and attaches it; otherwise this step is a
    ///    no-op fall-through.
    /// 5. Applies the stopping criteria: absolute limits become an
    ///    absolute function-value tolerance, relative limits a relative
    ///    one; a positive iteration cap becomes the evaluation cap.
    /// 6. Marshals the typed seed into the working array.
    /// 7. Registers the raw objective shim — bound to the boxed user
    ///    objective — via exactly one of the two direction-specific
    ///    registration calls.
    /// 8. Runs the backend solve on the working array.
    /// 9. Decodes the working array back into a typed optimum.
    /// 10. Returns status, score, and optimum as a [`SolveOutcome`].
    ///
    /// Backend statuses pass through verbatim; this method never retries
    /// and reports no errors of its own. The objective is consumed — its
    /// erased context outlives every backend callback by construction.
    pub fn optimize<P, F>(&self, objective: F, initial: P, bounds: P::Bounds) -> SolveOutcome<P>
    where
        P: ParamSequence
            + Default
            + for<'a> Marshal<SeedCopy<'a>>
            + for<'a> Marshal<ResultCopy<'a>>
            + for<'a> Marshal<ArgumentCopy<'a>>,
        P::Bounds: for<'a> Marshal<BoundsCopy<'a>>,
        F: FnMut(P) -> f64 + 'static,
    {
        self.run(self.direction, objective, initial, bounds)
    }

    /// Solve as a minimization regardless of the configured direction.
    pub fn optimize_min<P, F>(&self, objective: F, initial: P, bounds: P::Bounds) -> SolveOutcome<P>
    where
        P: ParamSequence
            + Default
            + for<'a> Marshal<SeedCopy<'a>>
            + for<'a> Marshal<ResultCopy<'a>>
            + for<'a> Marshal<ArgumentCopy<'a>>,
        P::Bounds: for<'a> Marshal<BoundsCopy<'a>>,
        F: FnMut(P) -> f64 + 'static,
    {
        self.run(OptDir::Min, objective, initial, bounds)
    }

    /// Solve as a maximization regardless of the configured direction.
    pub fn optimize_max<P, F>(&self, objective: F, initial: P, bounds: P::Bounds) -> SolveOutcome<P>
    where
        P: ParamSequence
            + Default
            + for<'a> Marshal<SeedCopy<'a>>
            + for<'a> Marshal<ResultCopy<'a>>
            + for<'a> Marshal<ArgumentCopy<'a>>,
        P::Bounds: for<'a> Marshal<BoundsCopy<'a>>,
        F: FnMut(P) -> f64 + 'static,
    {
        self.run(OptDir::Max, objective, initial, bounds)
    }

    fn run<P, F>(
        &self, direction: OptDir, objective: F, initial: P, bounds: P::Bounds,
    ) -> SolveOutcome<P>
    where
        P: ParamSequence
            + Default
            + for<'a> Marshal<SeedCopy<'a>>
            + for<'a> Marshal<ResultCopy<'a>>
            + for<'a> Marshal<ArgumentCopy<'a>>,
        P::Bounds: for<'a> Marshal<BoundsCopy<'a>>,
        F: FnMut(P) -> f64 + 'static,
    {
        let dimension = P::ARITY;
        let mut lower = Array1::zeros(dimension);
        let mut upper = Array1::zeros(dimension);
        let mut working = Array1::zeros(dimension);

        let mut solver = B::configure(self.algorithm, dimension);

        let mut bounds = bounds;
        bounds.for_each_slot(&mut BoundsCopy { lower: &mut lower, upper: &mut upper });
        solver.set_lower_bounds(lower.view());
        solver.set_upper_bounds(upper.view());

        if self.algorithm.requires_local_refinement() {
            let mut local = B::configure(method_to_native(self.local_method), dimension);
            local.set_lower_bounds(lower.view());
            local.set_upper_bounds(upper.view());
            solver.attach_local_solver(local);
        }

        match self.stop.limit_type {
            StopLimitType::Absolute => solver.set_ftol_abs(self.stop.limit),
            StopLimitType::Relative => solver.set_ftol_rel(self.stop.limit),
        }
        if self.stop.max_iterations > 0 {
            solver.set_maxeval(self.stop.max_iterations);
        }

        let mut seed = initial;
        seed.for_each_slot(&mut SeedCopy { working: &mut working });

        match direction {
            OptDir::Min => solver.set_min_objective(raw_objective::<P, F>, Box::new(objective)),
            OptDir::Max => solver.set_max_objective(raw_objective::<P, F>, Box::new(objective)),
        }

        let (status, score) = solver.solve(&mut working);

        let mut optimum = P::default();
        optimum.for_each_slot(&mut ResultCopy { working: &working });

        SolveOutcome { status, score, optimum }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // Constructor and builder wiring only. Full solve behavior — including
    // the nested-refinement configuration — is exercised in the
    // integration tests with real test backends.
    // -------------------------------------------------------------------------

    use std::any::Any;

    use ndarray::ArrayView1;

    use crate::optimization::solver_adapter::backend::{RawEvalFn, SolveStatus};
    use crate::optimization::solver_adapter::marshal::Bound;

    // Minimal inert backend so the adapter type parameter can be named.
    struct NullBackend;

    impl SolverBackend for NullBackend {
        fn configure(_algorithm: NativeAlgorithm, _dimension: usize) -> Self {
            NullBackend
        }

        fn set_lower_bounds(&mut self, _lower: ArrayView1<'_, f64>) {}
        fn set_upper_bounds(&mut self, _upper: ArrayView1<'_, f64>) {}
        fn attach_local_solver(&mut self, _local: Self) {}
        fn set_ftol_abs(&mut self, _tol: f64) {}
        fn set_ftol_rel(&mut self, _tol: f64) {}
        fn set_maxeval(&mut self, _maxeval: u64) {}
        fn set_min_objective(&mut self, _eval: RawEvalFn, _context: Box<dyn Any>) {}
        fn set_max_objective(&mut self, _eval: RawEvalFn, _context: Box<dyn Any>) {}

        fn solve(&mut self, _working: &mut Array1<f64>) -> (SolveStatus, f64) {
            (SolveStatus::Success, 0.0)
        }
    }

    #[test]
    // Purpose
    // -------
    // Per-method constructors must pre-translate their tags, and defaults
    // must be minimize + simplex refinement.
    fn constructors_wire_algorithm_and_defaults() {
        let stop = StopCriteria::default();

        let simplex = BoundedOptimizer::<NullBackend>::simplex(stop);
        let subplex = BoundedOptimizer::<NullBackend>::subplex(stop);
        let genetic = BoundedOptimizer::<NullBackend>::genetic(stop);

        assert_eq!(simplex.algorithm(), NativeAlgorithm::Neldermead);
        assert_eq!(subplex.algorithm(), NativeAlgorithm::Sbplx);
        assert_eq!(genetic.algorithm(), NativeAlgorithm::Esch);
        assert_eq!(simplex.direction(), OptDir::Min);
        assert_eq!(simplex.local_method(), Method::Simplex);
        assert_eq!(simplex.stop_criteria(), stop);
    }

    #[test]
    // Purpose
    // -------
    // Builder overrides must replace direction and local method without
    // touching the rest of the configuration.
    fn builder_overrides_apply() {
        let optimizer = BoundedOptimizer::<NullBackend>::new(
            NativeAlgorithm::Mlsl,
            StopCriteria::default(),
        )
        .with_direction(OptDir::Max)
        .with_local_method(Method::Subplex);

        assert_eq!(optimizer.algorithm(), NativeAlgorithm::Mlsl);
        assert_eq!(optimizer.direction(), OptDir::Max);
        assert_eq!(optimizer.local_method(), Method::Subplex);
    }

    #[test]
    // Purpose
    // -------
    // A full pass through `optimize` with an inert backend must decode a
    // typed outcome of the right arity and carry the backend status
    // through verbatim.
    fn optimize_decodes_a_typed_outcome() {
        let optimizer = BoundedOptimizer::<NullBackend>::simplex(StopCriteria::default());

        let outcome = optimizer.optimize(
            |(x, y): (f64, f64)| x + y,
            (1.0, 2.0),
            (Bound::new(-5.0, 5.0), Bound::new(-5.0, 5.0)),
        );

        assert_eq!(outcome.status, SolveStatus::Success);
        assert!(outcome.is_success());
        // NullBackend never writes the working array; decode yields zeros.
        assert_eq!(outcome.optimum, (0.0, 0.0));
    }
}
