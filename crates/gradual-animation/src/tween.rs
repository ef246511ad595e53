//! A single interpolation bound to one host variable.

use std::fmt;

use gradual_core::{Tick, TickClock, ValueBinding};

use crate::error::TweenError;
use crate::step::Gradual;

/// Read-only view of a tween's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenState {
    /// Effective ticks left before the tween retires.
    pub remaining: Tick,
    /// Clock value observed when the tween was created.
    pub started_at: Tick,
    /// Clock value of the last tick that moved the bound value.
    pub last_tick: Tick,
    pub finished: bool,
}

/// Moves a bound value toward `target` by a fixed step per observed tick.
///
/// The step is computed once from the value the binding holds at creation
/// time; later writes to the variable by the host do not change it. Each
/// effective tick adds `step * (now - last_tick)` to the variable and counts
/// down `remaining` by one. Once the countdown is spent (or the clock is found
/// at or before the creation tick) the tween marks itself finished and leaves
/// the variable where the accumulation put it, without snapping to `target`.
///
/// The binding and the clock are handles to host-owned state. The tween keeps
/// writing through the binding for as long as it is registered, unless the
/// binding reports it is no longer bound, in which case the tween finishes
/// without another write.
pub struct Tween<T: Gradual> {
    binding: Box<dyn ValueBinding<T>>,
    clock: TickClock,
    target: T,
    step: T,
    remaining: Tick,
    started_at: Tick,
    last_tick: Tick,
    finished: bool,
}

impl<T: Gradual> Tween<T> {
    pub fn new(
        binding: impl ValueBinding<T> + 'static,
        target: T,
        clock: &TickClock,
        duration: Tick,
    ) -> Result<Self, TweenError> {
        // Checked for every type, including those whose step ignores duration.
        if duration <= 0 {
            return Err(TweenError::InvalidDuration { duration });
        }
        let start = binding.get();
        let step = T::step(start, target, duration)?;
        let now = clock.now();
        Ok(Self {
            binding: Box::new(binding),
            clock: clock.clone(),
            target,
            step,
            remaining: duration,
            started_at: now,
            last_tick: now,
            finished: false,
        })
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn step(&self) -> T {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn state(&self) -> TweenState {
        TweenState {
            remaining: self.remaining,
            started_at: self.started_at,
            last_tick: self.last_tick,
            finished: self.finished,
        }
    }

    /// Advance by whatever the clock moved since the last effective tick.
    ///
    /// Repeated calls within one tick are no-ops.
    pub(crate) fn advance(&mut self) {
        let now = self.clock.now();
        if self.finished || now == self.last_tick {
            return;
        }

        if !self.binding.is_bound() {
            self.finished = true;
            log::trace!("tween binding lost its target at tick {now}");
            return;
        }

        let elapsed = now.wrapping_sub(self.started_at);
        if elapsed <= 0 || self.remaining <= 0 {
            self.finished = true;
            log::trace!(
                "tween finished at tick {now} (elapsed {elapsed}, remaining {})",
                self.remaining
            );
            return;
        }

        let ticks = now.wrapping_sub(self.last_tick);
        let value = self.binding.get();
        self.binding.set(value.accumulate(self.step, ticks));
        self.remaining -= 1;
        self.last_tick = now;
    }
}

impl<T: Gradual> fmt::Debug for Tween<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("target", &self.target)
            .field("step", &self.step)
            .field("remaining", &self.remaining)
            .field("started_at", &self.started_at)
            .field("last_tick", &self.last_tick)
            .field("finished", &self.finished)
            .finish()
    }
}

/// Type-erased view the registry stores.
pub(crate) trait TweenNode {
    fn advance(&mut self);
    fn is_finished(&self) -> bool;
    fn state(&self) -> TweenState;
}

impl<T: Gradual> TweenNode for Tween<T> {
    fn advance(&mut self) {
        Tween::advance(self);
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn state(&self) -> TweenState {
        Tween::state(self)
    }
}

#[cfg(test)]
#[path = "tests/tween_tests.rs"]
mod tests;
