//! Frame-driven tweening for gradual
//!
//! A [`Tween`] moves one host variable toward a target by a fixed step per
//! observed clock tick. Tweens live in a host-owned [`TweenRegistry`], whose
//! [`TweenRegistry::advance_all`] is the single call the host makes per frame.

pub mod error;
pub mod factory;
pub mod registry;
pub mod step;
pub mod tween;

pub use error::TweenError;
pub use factory::{make_tween, GradualValue, VariantMember};
pub use registry::{FrameStats, TweenId, TweenRegistry};
pub use step::{linear_span, Gradual};
pub use tween::{Tween, TweenState};

pub use gradual_core::{FnBinding, Shared, Tick, TickClock, ValueBinding};

pub mod prelude {
    pub use crate::factory::{make_tween, GradualValue};
    pub use crate::registry::{FrameStats, TweenId, TweenRegistry};
    pub use crate::step::Gradual;
    pub use crate::tween::Tween;
    pub use crate::TweenError;
    pub use gradual_core::{Shared, Tick, TickClock};
}
