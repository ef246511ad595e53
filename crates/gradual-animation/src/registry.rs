//! Owning collection of live tweens and the per-frame update pass.

use std::fmt;
use std::ops::{Add, AddAssign};

use gradual_core::{SlotArena, SlotId, Tick, TickClock, ValueBinding};

use crate::error::TweenError;
use crate::step::Gradual;
use crate::tween::{Tween, TweenNode, TweenState};

/// Stable handle to a registered tween.
///
/// Once the tween is reclaimed, the id stops resolving even if its slot is
/// handed to a newer tween. Ids are not reused until that slot's `u32`
/// generation wraps around.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TweenId(SlotId);

impl fmt::Display for TweenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tween#{}", self.0)
    }
}

/// What one [`TweenRegistry::advance_all`] pass did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Tweens whose `advance` ran, including same-tick no-ops.
    pub advanced: usize,
    /// Finished tweens dropped during the pass.
    pub reclaimed: usize,
}

impl Add for FrameStats {
    type Output = FrameStats;

    fn add(self, rhs: Self) -> Self::Output {
        FrameStats {
            advanced: self.advanced + rhs.advanced,
            reclaimed: self.reclaimed + rhs.reclaimed,
        }
    }
}

impl AddAssign for FrameStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Host-owned set of active tweens.
///
/// The registry is the only owner of the tweens it holds. A tween that marks
/// itself finished during one pass is dropped at the start of its visit in the
/// next pass, without being advanced again. Traversal order follows slot
/// order and is not part of the contract.
///
/// Single-threaded: the registry and every handle it touches are `!Send`.
#[derive(Default)]
pub struct TweenRegistry {
    tweens: SlotArena<Box<dyn TweenNode>>,
}

impl TweenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tween and register it in one step.
    pub fn spawn<T: Gradual>(
        &mut self,
        binding: impl ValueBinding<T> + 'static,
        target: T,
        clock: &TickClock,
        duration: Tick,
    ) -> Result<TweenId, TweenError> {
        let tween = Tween::new(binding, target, clock, duration).map_err(|err| {
            log::debug!("rejected tween toward {target:?}: {err}");
            err
        })?;
        Ok(self.register(tween))
    }

    pub fn register<T: Gradual>(&mut self, tween: Tween<T>) -> TweenId {
        log::debug!(
            "registering tween toward {:?} (step {:?}, {} ticks)",
            tween.target(),
            tween.step(),
            tween.state().remaining
        );
        TweenId(self.tweens.insert(Box::new(tween)))
    }

    /// The per-frame entry point. Call once per frame, after moving the clock.
    pub fn advance_all(&mut self) -> FrameStats {
        let mut advanced = 0;
        let reclaimed = self.tweens.sweep(|id, tween| {
            if tween.is_finished() {
                log::trace!("reclaiming {}", TweenId(id));
                return false;
            }
            tween.advance();
            advanced += 1;
            true
        });
        FrameStats {
            advanced,
            reclaimed,
        }
    }

    /// Whether the tween still occupies a slot, finished or not.
    pub fn contains(&self, id: TweenId) -> bool {
        self.tweens.contains(id.0)
    }

    /// Whether the tween is registered and has not finished.
    pub fn is_active(&self, id: TweenId) -> bool {
        self.tweens
            .get(id.0)
            .map(|tween| !tween.is_finished())
            .unwrap_or(false)
    }

    pub fn state(&self, id: TweenId) -> Option<TweenState> {
        self.tweens.get(id.0).map(|tween| tween.state())
    }

    /// Registered tweens, including finished ones awaiting reclamation.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.tweens
            .iter()
            .filter(|(_, tween)| !tween.is_finished())
            .count()
    }
}

impl fmt::Debug for TweenRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenRegistry")
            .field("len", &self.tweens.len())
            .field("active", &self.active_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
