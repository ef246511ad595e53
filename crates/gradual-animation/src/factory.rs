//! Variant-based tween construction.
//!
//! Hosts that keep heterogeneous values in one place can store them as
//! [`GradualValue`] and let [`make_tween`] pick the concrete [`Tween`] type
//! from whichever alternative the variable currently holds.
//!
//! [`Tween`]: crate::Tween

use std::cell::Cell;

use gradual_core::{Shared, Tick, TickClock, ValueBinding};

use crate::error::TweenError;
use crate::registry::{TweenId, TweenRegistry};
use crate::step::Gradual;

/// The built-in value types in one enum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradualValue {
    I32(i32),
    U32(u32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
}

impl GradualValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            GradualValue::I32(_) => "i32",
            GradualValue::U32(_) => "u32",
            GradualValue::I64(_) => "i64",
            GradualValue::F32(_) => "f32",
            GradualValue::F64(_) => "f64",
            GradualValue::Bool(_) => "bool",
        }
    }
}

/// A [`Gradual`] type with a matching [`GradualValue`] alternative.
pub trait VariantMember: Gradual {
    const TYPE_NAME: &'static str;

    fn into_variant(self) -> GradualValue;
    fn from_variant(value: GradualValue) -> Option<Self>;
}

macro_rules! variant_member {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl VariantMember for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn into_variant(self) -> GradualValue {
                GradualValue::$variant(self)
            }

            fn from_variant(value: GradualValue) -> Option<Self> {
                match value {
                    GradualValue::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for GradualValue {
            fn from(value: $ty) -> Self {
                GradualValue::$variant(value)
            }
        }
    )*};
}

variant_member!(
    i32 => I32,
    u32 => U32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
);

/// Binds a tween to one alternative of a shared [`GradualValue`].
///
/// If the host moves the variable to another alternative, the binding reports
/// itself unbound and never writes again, so the host's value survives and
/// the tween retires on its next effective tick.
struct VariantBinding<T: VariantMember> {
    value: Shared<GradualValue>,
    last: Cell<T>,
}

impl<T: VariantMember> ValueBinding<T> for VariantBinding<T> {
    fn get(&self) -> T {
        if let Some(current) = T::from_variant(self.value.get()) {
            self.last.set(current);
        }
        self.last.get()
    }

    fn set(&self, value: T) {
        if self.is_bound() {
            self.last.set(value);
            self.value.set(value.into_variant());
        }
    }

    fn is_bound(&self) -> bool {
        T::from_variant(self.value.get()).is_some()
    }
}

/// Create and register a tween for whatever alternative `value` holds.
///
/// `target` must hold the same alternative.
pub fn make_tween(
    registry: &mut TweenRegistry,
    value: &Shared<GradualValue>,
    target: GradualValue,
    clock: &TickClock,
    duration: Tick,
) -> Result<TweenId, TweenError> {
    match value.get() {
        GradualValue::I32(current) => {
            spawn_variant(registry, value, current, target, clock, duration)
        }
        GradualValue::U32(current) => {
            spawn_variant(registry, value, current, target, clock, duration)
        }
        GradualValue::I64(current) => {
            spawn_variant(registry, value, current, target, clock, duration)
        }
        GradualValue::F32(current) => {
            spawn_variant(registry, value, current, target, clock, duration)
        }
        GradualValue::F64(current) => {
            spawn_variant(registry, value, current, target, clock, duration)
        }
        GradualValue::Bool(current) => {
            spawn_variant(registry, value, current, target, clock, duration)
        }
    }
}

fn spawn_variant<T: VariantMember>(
    registry: &mut TweenRegistry,
    value: &Shared<GradualValue>,
    current: T,
    target: GradualValue,
    clock: &TickClock,
    duration: Tick,
) -> Result<TweenId, TweenError> {
    let target = T::from_variant(target).ok_or(TweenError::TypeMismatch {
        expected: T::TYPE_NAME,
        found: target.type_name(),
    })?;
    let binding = VariantBinding {
        value: value.clone(),
        last: Cell::new(current),
    };
    registry.spawn(binding, target, clock, duration)
}

#[cfg(test)]
#[path = "tests/factory_tests.rs"]
mod tests;
