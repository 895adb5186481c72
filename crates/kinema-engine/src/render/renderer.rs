use std::rc::Rc;
use std::time::Instant;

use crate::scene::{ElementId, Scene, SceneEvent, Targets};
use crate::time::{Clock, FrameClock, FrameTime, SystemClock};

use super::batch::Batch;
use super::event::Listeners;
use super::registry::{Step, Transition, TransitionRegistry};
use super::{
    Completion, FillMode, FrameHandle, FrameScheduler, IMMEDIATE_DURATION, ListenerId,
    OptionsSource, RendererConfig, RendererEvent,
};

/// Frame loop driving transitions over a scene.
///
/// The renderer owns its scene. While running it keeps exactly one frame request
/// outstanding with its `FrameScheduler`; the host delivers that frame through
/// [`Renderer::frame`]. Every tick clears the surface, advances the transitions
/// due at the tick's timestamp, then draws every element in scene order.
pub struct Renderer {
    scene: Scene,
    registry: TransitionRegistry,
    scheduler: Box<dyn FrameScheduler>,
    clock: FrameClock,
    config: RendererConfig,
    listeners: Listeners,

    running: bool,
    pending_frame: Option<FrameHandle>,
    start_time: Instant,
    current_time: Instant,
    last_frame: Option<FrameTime>,

    // Set while `transition` installs a batch so evictions cannot stop the loop.
    installing: bool,
}

impl Renderer {
    pub fn new<S>(scene: Scene, scheduler: S, config: RendererConfig) -> Self
    where
        S: FrameScheduler + 'static,
    {
        Self::with_clock(scene, scheduler, SystemClock, config)
    }

    /// Builds a renderer reading time from `clock`.
    pub fn with_clock<S, C>(scene: Scene, scheduler: S, clock: C, config: RendererConfig) -> Self
    where
        S: FrameScheduler + 'static,
        C: Clock + 'static,
    {
        let clock = FrameClock::with_source(Box::new(clock));
        let now = clock.now();

        let mut renderer = Self {
            scene,
            registry: TransitionRegistry::default(),
            scheduler: Box::new(scheduler),
            clock,
            config,
            listeners: Listeners::default(),
            running: false,
            pending_frame: None,
            start_time: now,
            current_time: now,
            last_frame: None,
            installing: false,
        };

        if renderer.config.auto_start {
            renderer.start();
        }
        renderer
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access. Transitions of elements removed here are dropped on the next tick.
    #[inline]
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[inline]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Replaces the configuration. `auto_start` only matters at construction.
    pub fn set_config(&mut self, config: RendererConfig) {
        self.config = config;
    }

    pub fn configure(&mut self, f: impl FnOnce(&mut RendererConfig)) {
        f(&mut self.config);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True while any transition is live.
    #[inline]
    pub fn is_busy(&self) -> bool {
        !self.registry.is_empty()
    }

    pub fn active_transitions(&self) -> usize {
        self.registry.len()
    }

    pub fn is_animating(&self, id: ElementId) -> bool {
        self.registry.contains(id)
    }

    /// Timestamp of the latest `start`.
    #[inline]
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Timestamp of the latest tick.
    #[inline]
    pub fn current_time(&self) -> Instant {
        self.current_time
    }

    /// Frame timing of the latest tick since the last `start`.
    #[inline]
    pub fn last_frame(&self) -> Option<FrameTime> {
        self.last_frame
    }

    pub fn on_event<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&RendererEvent) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    pub fn off_event(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Starts the loop. No-op while running.
    ///
    /// Any leftover transitions are discarded; their batches resolve as cancelled.
    pub fn start(&mut self) {
        if self.running {
            return;
        }

        self.running = true;
        self.clock.reset();
        self.start_time = self.clock.now();
        self.current_time = self.start_time;
        self.last_frame = None;
        self.registry.clear();

        log::debug!("renderer started");
        self.listeners.emit(&RendererEvent::Started {
            start_time: self.start_time,
        });

        self.pending_frame = Some(self.scheduler.request_frame());
    }

    /// Stops the loop and discards every live transition. No-op while stopped.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }

        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.running = false;

        let discarded = self.registry.len();
        self.registry.clear();

        log::debug!("renderer stopped ({discarded} transition(s) discarded)");
        self.listeners.emit(&RendererEvent::Stopped {
            start_time: self.start_time,
            end_time: self.current_time,
        });
    }

    /// Stops the loop if auto-stop is on, nothing is animating and the pointer is outside.
    fn stop_on_idle(&mut self) {
        if self.config.auto_stop
            && !self.installing
            && self.registry.is_empty()
            && !self.scene.pointer_inside()
        {
            log::trace!("renderer idle");
            self.stop();
        }
    }

    /// Forwards a pointer notification to the scene; with auto-stop on, entering
    /// starts the loop and leaving stops it once idle.
    pub fn handle_scene_event(&mut self, event: SceneEvent) {
        self.scene.handle_event(event);

        if !self.config.auto_stop {
            return;
        }
        match event {
            SceneEvent::PointerEntered => self.start(),
            SceneEvent::PointerLeft => self.stop_on_idle(),
        }
    }

    /// Delivers a frame requested from the scheduler.
    ///
    /// Frames arriving while stopped, or for a handle that is no longer the
    /// outstanding request, are ignored.
    pub fn frame(&mut self, handle: FrameHandle) {
        if !self.running || self.pending_frame != Some(handle) {
            log::trace!("ignoring stale frame {handle:?}");
            return;
        }
        self.pending_frame = None;
        self.tick();
    }

    fn tick(&mut self) {
        self.scene.clear_surface();

        let frame = self.clock.tick();
        self.current_time = frame.now;
        self.last_frame = Some(frame);
        log::trace!(
            "tick #{} dt={:.4}s transitions={}",
            frame.frame_index,
            frame.dt,
            self.registry.len()
        );

        let bounding_boxes = self.config.debug.bounding_boxes;
        let mut live = 0usize;

        for index in 0..self.scene.len() {
            let id = self.scene.id_at(index);

            match self.registry.get_mut(id).map(|t| t.step(frame.now)) {
                None => {}
                Some(Step::Pending) => live += 1,
                Some(Step::Active(state)) => {
                    self.scene.element_at_mut(index).apply(state);
                    live += 1;
                }
                Some(Step::Finished(state)) => {
                    self.scene.element_at_mut(index).apply(state);
                    self.complete(id);
                }
            }

            self.scene.render_at(index, bounding_boxes);
        }

        if self.registry.len() > live {
            let scene = &self.scene;
            let pruned = self.registry.retain(|id| scene.contains(id));
            log::debug!("dropped {pruned} transition(s) of removed elements");
            self.stop_on_idle();
        }

        if self.running {
            self.pending_frame = Some(self.scheduler.request_frame());
        }
    }

    /// Requests a transition for every element `targets` resolves to.
    ///
    /// Starts the loop if needed. An element already animating has its live
    /// transition completed first (callback included). The returned `Completion`
    /// resolves once every element's transition has completed; an empty
    /// resolution completes immediately.
    pub fn transition(
        &mut self,
        targets: impl Into<Targets>,
        options: impl Into<OptionsSource>,
    ) -> Completion {
        self.start();

        let options = options.into();
        let ids = self.scene.resolve(&targets.into());
        let total = ids.len();
        let (batch, completion) = Batch::open(total);
        let now = self.clock.now();

        self.installing = true;
        for (index, id) in ids.into_iter().enumerate() {
            if self.registry.contains(id) {
                log::debug!("{id}: evicting live transition");
                self.complete(id);
            }

            let Some(element) = self.scene.element(id) else {
                continue;
            };
            let options = options.resolve(element, index, total);
            let interpolator = element.interpolate(&options.state);
            let duration = if self.config.immediate {
                IMMEDIATE_DURATION
            } else {
                options.duration
            };

            self.registry.insert(
                id,
                Transition {
                    start_time: now + options.delay,
                    duration,
                    ease: options.ease,
                    direction: options.direction,
                    // Looping would defeat `immediate`; such transitions complete like any other.
                    looped: options.looped && !self.config.immediate,
                    interpolator,
                    callback: options.callback,
                    batch: Rc::clone(&batch),
                },
            );
        }
        self.installing = false;

        log::debug!("transition batch of {total} element(s) installed");
        self.stop_on_idle();
        completion
    }

    /// Ends an element's live transition: fill, callback, count, idle check, resolve.
    fn complete(&mut self, id: ElementId) {
        let Some(transition) = self.registry.remove(id) else {
            return;
        };
        let batch = Rc::clone(&transition.batch);
        batch.borrow_mut().mark_completed();

        let result = match self.scene.element_mut(id) {
            Some(element) => {
                if self.config.fill == FillMode::Forwards {
                    element.apply(transition.final_state());
                }
                transition
                    .callback
                    .as_deref()
                    .map_or(Ok(()), |callback| callback(element))
            }
            None => Ok(()),
        };

        if let Err(error) = result {
            log::warn!("{id}: completion callback failed: {error:#}");
            batch.borrow_mut().record_failure(id, error);
        }

        self.stop_on_idle();
        batch.borrow_mut().settle();
    }
}
