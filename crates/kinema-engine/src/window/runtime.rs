use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::render::{FrameQueue, Renderer, RendererConfig};
use crate::scene::{Scene, SceneEvent};

use super::app::{App, AppControl, FrameCtx};
use super::pacer::FramePacer;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Minimum spacing between delivered frames.
    pub frame_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "kinema".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            frame_interval: Duration::from_micros(16_667),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens a window over `scene` and runs until the window closes or the app exits.
    pub fn run<A>(
        config: RuntimeConfig,
        scene: Scene,
        renderer_config: RendererConfig,
        app: A,
    ) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut host = Host::new(config, scene, renderer_config, app);

        event_loop
            .run_app(&mut host)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

struct Host<A> {
    config: RuntimeConfig,
    app: A,

    frames: FrameQueue,
    renderer: Renderer,
    pacer: FramePacer,

    window: Option<Window>,
    redraw_requested: bool,
    exit_requested: bool,
}

impl<A> Host<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, scene: Scene, renderer_config: RendererConfig, app: A) -> Self {
        let frames = FrameQueue::new();
        let renderer = Renderer::new(scene, frames.clone(), renderer_config);
        let pacer = FramePacer::new(config.frame_interval);

        Self {
            config,
            app,
            frames,
            renderer,
            pacer,
            window: None,
            redraw_requested: false,
            exit_requested: false,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        log::info!("window {:?} opened", window.id());
        self.window = Some(window);
        Ok(())
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    /// Delivers the renderer's pending frame, if any, then hands the result to the app.
    fn redraw(&mut self) -> AppControl {
        self.redraw_requested = false;
        self.pacer.mark(Instant::now());

        let Some(handle) = self.frames.take() else {
            return AppControl::Continue;
        };
        self.renderer.frame(handle);

        let (Some(window), Some(time)) = (self.window.as_ref(), self.renderer.last_frame()) else {
            return AppControl::Continue;
        };
        let mut ctx = FrameCtx {
            window,
            renderer: &mut self.renderer,
            time,
        };
        self.app.on_frame(&mut ctx)
    }
}

impl<A> ApplicationHandler for Host<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.request_exit(event_loop);
            return;
        }

        self.app.on_start(&mut self.renderer);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Idle until the renderer asks for a frame; then pace redraws.
        if self.frames.pending().is_none() || self.redraw_requested {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        match self.pacer.wait_until(Instant::now()) {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => {
                event_loop.set_control_flow(ControlFlow::Wait);
                if let Some(window) = &self.window {
                    window.request_redraw();
                    self.redraw_requested = true;
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }
        if self.window.as_ref().map(Window::id) != Some(window_id) {
            return;
        }

        if self.app.on_window_event(&mut self.renderer, &event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("window {window_id:?} closed");
                self.renderer.stop();
                self.window = None;
                self.request_exit(event_loop);
            }

            WindowEvent::CursorEntered { .. } => {
                self.renderer.handle_scene_event(SceneEvent::PointerEntered);
            }

            WindowEvent::CursorLeft { .. } => {
                self.renderer.handle_scene_event(SceneEvent::PointerLeft);
            }

            WindowEvent::RedrawRequested => {
                if self.redraw() == AppControl::Exit {
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }
}
