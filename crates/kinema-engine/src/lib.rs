//! Kinema engine crate.
//!
//! A retained scene of 2D elements, a transition engine animating their
//! properties over time, and a winit host that drives the frame loop.

pub mod animation;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;
