//! Animation effects for a linear strip of addressable RGB LEDs.
//!
//! An [`EffectEngine`] owns the pixel driver, a delay and a random source and
//! remembers the state that carries over between effect calls.

pub mod clock;
pub mod color;
pub mod config;
pub mod effects;
pub mod engine;
pub mod error;
pub mod random;
pub mod strip;

#[cfg(test)]
pub(crate) mod testing;

pub use color::{wheel, Color};
pub use effects::Effect;
pub use engine::{EffectEngine, StripState};
pub use error::{Error, Result};
