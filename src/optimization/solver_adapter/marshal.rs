//! Positional marshalling between typed parameter tuples and flat arrays.
//!
//! Purpose
//! -------
//! The backend understands exactly one parameter representation: an ordered
//! flat array of `f64`, index-aligned with the caller's typed tuple. This
//! module provides the single generic mechanism used for every copy across
//! that boundary — "for each indexed slot, apply an action" — plus the four
//! concrete actions the adapter needs:
//!
//! - [`BoundsCopy`]: bound min/max → lower/upper flat arrays.
//! - [`SeedCopy`]: typed initial values → working flat array.
//! - [`ResultCopy`]: working flat array → typed optimum slots.
//! - [`ArgumentCopy`]: backend parameter view → typed argument slots, once
//!   per objective evaluation.
//!
//! Invariants
//! ----------
//! - Slots are visited in ascending index order, exactly once each, with no
//!   side effects beyond what the action performs. No reordering, filtering,
//!   or partial application.
//! - Index `i` of the typed tuple always corresponds to index `i` of every
//!   flat array.
use ndarray::{Array1, ArrayView1};

/// A slot value the marshalling loop can move across the flat boundary.
///
/// All optimized types have to be convertible to `f64` and back; integer
/// conversions truncate, matching plain numeric casts.
pub trait OptValue: Copy {
    fn to_flat(self) -> f64;
    fn from_flat(raw: f64) -> Self;
}

impl OptValue for f64 {
    fn to_flat(self) -> f64 {
        self
    }

    fn from_flat(raw: f64) -> Self {
        raw
    }
}

impl OptValue for f32 {
    fn to_flat(self) -> f64 {
        f64::from(self)
    }

    fn from_flat(raw: f64) -> Self {
        raw as f32
    }
}

macro_rules! impl_opt_value_int {
    ($($int:ty),+) => {
        $(
            impl OptValue for $int {
                fn to_flat(self) -> f64 {
                    self as f64
                }

                fn from_flat(raw: f64) -> Self {
                    raw as $int
                }
            }
        )+
    };
}

impl_opt_value_int!(i32, i64, u32, u64);

/// Admissible range of one parameter slot, positionally matched with the
/// seed tuple. Immutable once passed in.
///
/// `min <= max` is a caller obligation; it is not validated here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound<T> {
    min: T,
    max: T,
}

impl<T: OptValue> Bound<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }
}

/// Action applied once per tuple slot by the marshalling loop.
pub trait SlotAction<S> {
    fn apply(&mut self, index: usize, slot: &mut S);
}

/// Positional visit over a fixed-arity tuple: the action is applied to
/// every slot in ascending index order, exactly once each.
pub trait Marshal<A> {
    fn for_each_slot(&mut self, action: &mut A);
}

/// Fixed-arity metadata of a typed parameter tuple: its arity and the
/// positionally matched tuple of [`Bound`]s.
pub trait ParamSequence {
    const ARITY: usize;
    type Bounds;
}

macro_rules! impl_param_sequence {
    ($arity:expr => $($T:ident . $idx:tt),+) => {
        impl<$($T: OptValue),+> ParamSequence for ($($T,)+) {
            const ARITY: usize = $arity;
            type Bounds = ($(Bound<$T>,)+);
        }

        impl<A, $($T),+> Marshal<A> for ($($T,)+)
        where
            A: $(SlotAction<$T> +)+ Sized,
        {
            fn for_each_slot(&mut self, action: &mut A) {
                $(SlotAction::<$T>::apply(action, $idx, &mut self.$idx);)+
            }
        }
    };
}

impl_param_sequence!(1 => T0.0);
impl_param_sequence!(2 => T0.0, T1.1);
impl_param_sequence!(3 => T0.0, T1.1, T2.2);
impl_param_sequence!(4 => T0.0, T1.1, T2.2, T3.3);
impl_param_sequence!(5 => T0.0, T1.1, T2.2, T3.3, T4.4);
impl_param_sequence!(6 => T0.0, T1.1, T2.2, T3.3, T4.4, T5.5);
impl_param_sequence!(7 => T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6);
impl_param_sequence!(8 => T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7);

// ---- Concrete marshalling actions -----------------------------------------

/// Reads each bound's min/max into the lower/upper flat arrays at the
/// matching index.
pub struct BoundsCopy<'a> {
    pub lower: &'a mut Array1<f64>,
    pub upper: &'a mut Array1<f64>,
}

impl<T: OptValue> SlotAction<Bound<T>> for BoundsCopy<'_> {
    fn apply(&mut self, index: usize, slot: &mut Bound<T>) {
        self.lower[index] = slot.min().to_flat();
        self.upper[index] = slot.max().to_flat();
    }
}

/// Reads each typed initial value into the working flat array at the
/// matching index.
pub struct SeedCopy<'a> {
    pub working: &'a mut Array1<f64>,
}

impl<T: OptValue> SlotAction<T> for SeedCopy<'_> {
    fn apply(&mut self, index: usize, slot: &mut T) {
        self.working[index] = slot.to_flat();
    }
}

/// Reads the working flat array at the matching index and writes the
/// (possibly type-converted) value back into the typed optimum slot.
pub struct ResultCopy<'a> {
    pub working: &'a Array1<f64>,
}

impl<T: OptValue> SlotAction<T> for ResultCopy<'_> {
    fn apply(&mut self, index: usize, slot: &mut T) {
        *slot = T::from_flat(self.working[index]);
    }
}

/// Reads the backend-supplied flat parameter view at the matching index
/// into a typed argument slot. Inverse of [`SeedCopy`], performed once per
/// objective evaluation rather than once per solve.
pub struct ArgumentCopy<'a> {
    pub params: ArrayView1<'a, f64>,
}

impl<T: OptValue> SlotAction<T> for ArgumentCopy<'_> {
    fn apply(&mut self, index: usize, slot: &mut T) {
        *slot = T::from_flat(self.params[index]);
    }
}
