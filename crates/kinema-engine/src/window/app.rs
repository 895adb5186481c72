use winit::event::WindowEvent;
use winit::window::Window;

use crate::render::Renderer;
use crate::time::FrameTime;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Per-frame context passed to `App::on_frame`.
///
/// The renderer has just ticked: `renderer.scene().surface()` holds this frame's
/// draw commands and `time` is that tick's timing.
pub struct FrameCtx<'a> {
    pub window: &'a Window,
    pub renderer: &'a mut Renderer,
    pub time: FrameTime,
}

impl FrameCtx<'_> {
    /// Logical window size as `(width, height)`.
    pub fn logical_size(&self) -> (f32, f32) {
        let size: winit::dpi::LogicalSize<f64> =
            self.window.inner_size().to_logical(self.window.scale_factor());
        (size.width as f32, size.height as f32)
    }
}

/// Application contract driven by `Runtime`.
pub trait App {
    /// Called once the window exists, before the first frame is delivered.
    fn on_start(&mut self, renderer: &mut Renderer) {
        let _ = renderer;
    }

    /// Called for every window event, before the runtime's own handling.
    fn on_window_event(&mut self, renderer: &mut Renderer, event: &WindowEvent) -> AppControl {
        let _ = (renderer, event);
        AppControl::Continue
    }

    /// Called after each renderer frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
