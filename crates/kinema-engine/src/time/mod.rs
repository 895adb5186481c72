//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to a runtime.
//! Intended usage:
//! - one `FrameClock` per render loop
//! - call `tick()` once per evaluated frame to obtain `FrameTime`
//! - inject a `ManualClock` to drive the loop with controlled timestamps

mod clock;
mod frame_clock;

pub use clock::{Clock, ManualClock, SystemClock};
pub use frame_clock::{FrameClock, FrameTime};
