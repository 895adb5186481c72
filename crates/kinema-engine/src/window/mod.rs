//! winit host.
//!
//! Owns the event loop and window, delivers the renderer's frame requests as
//! redraws, and forwards pointer enter/leave to the scene.

mod app;
mod pacer;
mod runtime;

pub use app::{App, AppControl, FrameCtx};
pub use runtime::{Runtime, RuntimeConfig};
