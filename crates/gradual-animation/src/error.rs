use gradual_core::Tick;
use thiserror::Error;

/// Errors raised when a tween is created. The per-frame pass itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TweenError {
    /// Linear stepping divides by the duration, so it must be at least one tick.
    #[error("tween duration must be at least one tick, got {duration}")]
    InvalidDuration { duration: Tick },
    #[error("target holds {found} but the bound value holds {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
