#![doc = r"Host-side primitives for the gradual tweening engine: the shared tick clock, value bindings and generational slot storage."]

pub mod frame_clock;
pub mod shared;
pub mod slot_arena;

pub use frame_clock::{Tick, TickClock};
pub use shared::{FnBinding, Shared, ValueBinding};
pub use slot_arena::{SlotArena, SlotId};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
