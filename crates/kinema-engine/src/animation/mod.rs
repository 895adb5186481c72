//! Easing and interpolation.
//!
//! An `Ease` remaps normalized progress, an `Interpolator` turns (eased)
//! progress into the intermediate `ElementState` of one element.

mod ease;
mod interpolate;
mod state;

pub use ease::{Direction, Ease};
pub use interpolate::{Interpolator, Lerp};
pub use state::{ElementState, Property, Value};
