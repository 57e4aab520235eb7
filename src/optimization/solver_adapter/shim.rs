//! Raw objective shim: the single translation point between the backend's
//! type-erased callback convention and the user's typed objective.
//!
//! The backend evaluates objectives through [`RawEvalFn`]: a flat parameter
//! view, an optional gradient view, and an opaque context. The adapter
//! registers [`raw_objective`] instantiated for the caller's parameter
//! tuple `P` and objective type `F`; the context it hands the backend is
//! the boxed objective itself. On every evaluation the shim downcasts the
//! context back to `F`, rebuilds a typed argument tuple via
//! [`ArgumentCopy`], and forwards the call.
//!
//! The shim retains no state between calls, allocates nothing beyond the
//! transient argument tuple, and performs no error translation — whatever
//! the user function does propagates unmodified.
use std::any::Any;

use ndarray::{ArrayView1, ArrayViewMut1};

use crate::optimization::solver_adapter::marshal::{ArgumentCopy, Marshal};

/// Rebuild a typed argument tuple from the flat parameter view and invoke
/// the user objective held in `context`.
///
/// Matches [`RawEvalFn`](crate::optimization::solver_adapter::RawEvalFn)
/// exactly once instantiated. The gradient view is ignored; this adapter
/// only drives derivative-free backend modes.
///
/// # Panics
/// Panics if `context` does not hold the `F` this instantiation was
/// registered with. The adapter always registers matching pairs, so a
/// mismatch is a programmer error in backend plumbing, not a runtime
/// condition.
pub fn raw_objective<P, F>(
    params: ArrayView1<'_, f64>, _gradient: Option<ArrayViewMut1<'_, f64>>, context: &mut dyn Any,
) -> f64
where
    P: Default + for<'a> Marshal<ArgumentCopy<'a>>,
    F: FnMut(P) -> f64 + 'static,
{
    let objective = context
        .downcast_mut::<F>()
        .expect("objective context must hold the registered objective type");
    let mut args = P::default();
    args.for_each_slot(&mut ArgumentCopy { params });
    objective(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests call the shim directly, the way a backend would, and
    // check typed reconstruction plus scalar pass-through. Full solves are
    // covered by the integration tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The shim must rebuild the typed tuple positionally and return the
    // user function's value unchanged.
    fn rebuilds_arguments_and_forwards_the_result() {
        // Arrange
        let eval: fn((f64, f64)) -> f64 = |(x, y)| 2.0 * x + y;
        let mut context: Box<dyn Any> = Box::new(eval);
        let params = array![3.0, 4.0];

        // Act
        let value =
            raw_objective::<(f64, f64), fn((f64, f64)) -> f64>(params.view(), None, &mut *context);

        // Assert
        assert_eq!(value, 10.0);
    }

    #[test]
    // Purpose
    // -------
    // Mixed slot types must be converted per slot, and the gradient view
    // must be accepted (and ignored) when present.
    fn converts_mixed_slot_types_and_ignores_gradient() {
        // Arrange
        let eval: fn((f64, i32)) -> f64 = |(x, k)| x + f64::from(k);
        let mut context: Box<dyn Any> = Box::new(eval);
        let params = array![0.5, 6.9];
        let mut gradient = array![0.0, 0.0];

        // Act
        let value = raw_objective::<(f64, i32), fn((f64, i32)) -> f64>(
            params.view(),
            Some(gradient.view_mut()),
            &mut *context,
        );

        // Assert
        assert_eq!(value, 6.5, "integer slot truncates before the call");
        assert_eq!(gradient, array![0.0, 0.0], "gradient is never written in derivative-free mode");
    }
}
