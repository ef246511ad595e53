use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Logical clock value. Durations and tick multipliers share the same type.
pub type Tick = i64;

/// Shared integer clock owned by the host.
///
/// Cloning yields another handle to the same counter. The host advances it
/// once per frame; tweens only read it. Nothing stops the host from moving it
/// backwards with [`TickClock::set`], and the engine treats that as "no time
/// has elapsed".
#[derive(Clone, Default)]
pub struct TickClock {
    ticks: Rc<Cell<Tick>>,
}

impl TickClock {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(ticks: Tick) -> Self {
        Self {
            ticks: Rc::new(Cell::new(ticks)),
        }
    }

    /// Current clock value.
    pub fn now(&self) -> Tick {
        self.ticks.get()
    }

    /// Move the clock forward by one tick and return the new value.
    pub fn advance(&self) -> Tick {
        self.advance_by(1)
    }

    pub fn advance_by(&self, ticks: Tick) -> Tick {
        let next = self.ticks.get().wrapping_add(ticks);
        self.ticks.set(next);
        next
    }

    pub fn set(&self, ticks: Tick) {
        self.ticks.set(ticks);
    }

    /// Whether both handles observe the same counter.
    pub fn same_clock(&self, other: &TickClock) -> bool {
        Rc::ptr_eq(&self.ticks, &other.ticks)
    }
}

impl fmt::Debug for TickClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickClock")
            .field("now", &self.ticks.get())
            .finish()
    }
}
