//! Testing utilities and harness for gradual

pub mod driver;

pub use driver::*;

pub mod prelude {
    pub use crate::driver::*;
    pub use gradual_animation::prelude::*;
}
