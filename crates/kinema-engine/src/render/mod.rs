//! Transition render loop.
//!
//! `Renderer` owns a `Scene` and a `FrameScheduler`. Callers request transitions
//! with `Renderer::transition`, which returns a `Completion` for the batch; the
//! host delivers frames with `Renderer::frame`.

mod batch;
mod config;
mod error;
mod event;
mod options;
mod registry;
mod renderer;
mod scheduler;

pub use batch::{BatchReport, CallbackFailure, Completion};
pub use config::{DebugOptions, FillMode, IMMEDIATE_DURATION, RendererConfig};
pub use error::TransitionError;
pub use event::{ListenerId, RendererEvent};
pub use options::{CompletionCallback, OptionsSource, TransitionOptions};
pub use renderer::Renderer;
pub use scheduler::{FrameHandle, FrameQueue, FrameScheduler};
