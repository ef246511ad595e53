//! Host loop stand-in for tests.
//!
//! [`FrameDriver`] owns a [`TickClock`] and a [`TweenRegistry`] and plays the
//! part of the host application: move the clock, then run one registry pass.

use gradual_animation::{FrameStats, Gradual, TweenError, TweenId, TweenRegistry};
use gradual_core::{Shared, Tick, TickClock, ValueBinding};

#[derive(Debug, Default)]
pub struct FrameDriver {
    clock: TickClock,
    registry: TweenRegistry,
    frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(tick: Tick) -> Self {
        Self {
            clock: TickClock::starting_at(tick),
            ..Self::default()
        }
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    pub fn registry(&self) -> &TweenRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TweenRegistry {
        &mut self.registry
    }

    /// Registry passes run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Start a tween on `value` against the driver's clock.
    pub fn tween<T: Gradual>(
        &mut self,
        value: &Shared<T>,
        target: T,
        duration: Tick,
    ) -> Result<TweenId, TweenError> {
        self.registry.spawn(value.clone(), target, &self.clock, duration)
    }

    pub fn tween_with<T: Gradual>(
        &mut self,
        binding: impl ValueBinding<T> + 'static,
        target: T,
        duration: Tick,
    ) -> Result<TweenId, TweenError> {
        self.registry.spawn(binding, target, &self.clock, duration)
    }

    /// Advance the clock by one tick and run one pass.
    pub fn frame(&mut self) -> FrameStats {
        self.skip(1)
    }

    /// Advance the clock by `ticks` at once and run a single pass.
    pub fn skip(&mut self, ticks: Tick) -> FrameStats {
        self.clock.advance_by(ticks);
        self.pass()
    }

    /// Run a pass without touching the clock.
    pub fn pass(&mut self) -> FrameStats {
        self.frames += 1;
        let stats = self.registry.advance_all();
        log::trace!("frame {} at tick {}: {stats:?}", self.frames, self.clock.now());
        stats
    }

    pub fn run_frames(&mut self, count: usize) -> FrameStats {
        let mut total = FrameStats::default();
        for _ in 0..count {
            total += self.frame();
        }
        total
    }

    /// Run `count` frames and collect `value` after each one.
    pub fn record<T: Copy>(&mut self, value: &Shared<T>, count: usize) -> Vec<T> {
        (0..count)
            .map(|_| {
                self.frame();
                value.get()
            })
            .collect()
    }

    /// Run frames until the registry is empty or `max_frames` is reached.
    /// Returns the number of frames run.
    pub fn settle(&mut self, max_frames: usize) -> usize {
        let mut ran = 0;
        while !self.registry.is_empty() && ran < max_frames {
            self.frame();
            ran += 1;
        }
        ran
    }
}
