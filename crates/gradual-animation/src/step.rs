//! Per-type step computation.
//!
//! A tween computes its per-tick increment once, when it is created, and then
//! adds that increment to the bound value on every effective tick. [`Gradual`]
//! supplies both halves for a value type. Numeric types interpolate linearly;
//! `bool` jumps straight to the target because it has no in-between values.
//!
//! Downstream types opt in by implementing [`Gradual`] themselves; the engine
//! never needs to know about them.

use std::fmt;

use gradual_core::Tick;

use crate::error::TweenError;

/// Trait for values a tween can move toward a target.
pub trait Gradual: Copy + fmt::Debug + 'static {
    /// Increment applied per tick when moving from `start` to `target` over
    /// `duration` ticks.
    fn step(start: Self, target: Self, duration: Tick) -> Result<Self, TweenError>;

    /// Apply `step` to `self` as if `ticks` clock units had elapsed.
    fn accumulate(self, step: Self, ticks: Tick) -> Self;
}

/// `(target - start) / duration` in `f64`, shared by every linear type.
pub fn linear_span(start: f64, target: f64, duration: Tick) -> Result<f64, TweenError> {
    if duration <= 0 {
        return Err(TweenError::InvalidDuration { duration });
    }
    Ok((target - start) / duration as f64)
}

// Integers narrow the real-valued step by truncating toward zero. Unsigned
// types keep a negative step in two's complement and accumulate with wrapping
// arithmetic, which lands on the right value for decreasing tweens.
//
// The step goes through `f64`, so `i64` loses precision once the span exceeds
// 2^53, and a span wider than `i64::MAX` (e.g. `i64::MIN -> i64::MAX` over one
// tick) saturates the step at `i64::MAX` instead of covering the full range.
macro_rules! linear_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl Gradual for $ty {
            fn step(start: Self, target: Self, duration: Tick) -> Result<Self, TweenError> {
                let span = linear_span(start as f64, target as f64, duration)?;
                Ok(span as i64 as $ty)
            }

            fn accumulate(self, step: Self, ticks: Tick) -> Self {
                self.wrapping_add(step.wrapping_mul(ticks as $ty))
            }
        }
    )*};
}

macro_rules! linear_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Gradual for $ty {
            fn step(start: Self, target: Self, duration: Tick) -> Result<Self, TweenError> {
                let span = linear_span(start as f64, target as f64, duration)?;
                Ok(span as $ty)
            }

            fn accumulate(self, step: Self, ticks: Tick) -> Self {
                self + step * ticks as $ty
            }
        }
    )*};
}

linear_integer!(i32, u32, i64);
linear_float!(f32, f64);

/// Snaps straight to the target on the first effective tick. The duration
/// still bounds how long the tween stays registered, and [`Tween::new`]
/// rejects a non-positive one like for any other type.
///
/// [`Tween::new`]: crate::Tween::new
impl Gradual for bool {
    fn step(_start: Self, target: Self, _duration: Tick) -> Result<Self, TweenError> {
        Ok(target)
    }

    fn accumulate(self, step: Self, _ticks: Tick) -> Self {
        step
    }
}

#[cfg(test)]
#[path = "tests/step_tests.rs"]
mod tests;
