use std::time::Duration;

use anyhow::Result;
use winit::event::{ElementState as ButtonState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use kinema_engine::animation::{Direction, Ease, ElementState, Property};
use kinema_engine::coords::{Rect, Vec2};
use kinema_engine::logging::{LoggingConfig, init_logging};
use kinema_engine::paint::Color;
use kinema_engine::render::{OptionsSource, Renderer, RendererConfig, TransitionOptions};
use kinema_engine::scene::shapes::{CircleShape, RectShape, Spline};
use kinema_engine::scene::{ElementId, GroupId, Scene};
use kinema_engine::window::{App, AppControl, FrameCtx, Runtime, RuntimeConfig};

const CARD_COUNT: usize = 4;
const CARD_SIZE: f32 = 120.0;
const WAVE_POINTS: usize = 7;

struct Studio {
    cards: GroupId,
    pulse: ElementId,
    wave: ElementId,
    raised: bool,
    direction: Direction,
}

impl Studio {
    fn build(scene: &mut Scene) -> Self {
        let palette = ["#ef476f", "#ffd166", "#06d6a0", "#118ab2"];

        let cards: Vec<ElementId> = (0..CARD_COUNT)
            .map(|i| {
                let fill = Color::from_hex(palette[i % palette.len()]).unwrap_or_default();
                let x = 80.0 + i as f32 * (CARD_SIZE + 40.0);
                scene.add(
                    RectShape::new(Rect::new(x, 360.0, CARD_SIZE, CARD_SIZE))
                        .fill(fill)
                        .stroke(Color::from_srgb_u8(20, 20, 20, 255), 2.0),
                )
            })
            .collect();
        let cards = scene.add_group(cards);

        let pulse = scene.add(
            CircleShape::new(Vec2::new(1040.0, 160.0), 30.0)
                .fill(Color::from_hex("#073b4c").unwrap_or_default()),
        );

        let wave = scene.add(
            Spline::new(wave_points(0.0)).stroke(Color::from_hex("#118ab2").unwrap_or_default(), 3.0),
        );

        Self {
            cards,
            pulse,
            wave,
            raised: false,
            direction: Direction::Forward,
        }
    }

    /// Lifts or drops the cards one after another, and reshapes the wave.
    fn toggle(&mut self, renderer: &mut Renderer) {
        self.raised = !self.raised;
        let y = if self.raised { 200.0 } else { 360.0 };
        let direction = self.direction;

        let _ = renderer.transition(
            self.cards,
            OptionsSource::per_element(move |_, index, total| {
                TransitionOptions::new(ElementState::new().with(Property::Y, y))
                    .duration(Duration::from_millis(450))
                    .delay(Duration::from_millis(80 * index as u64))
                    .ease(Ease::OutCubic)
                    .direction(direction)
                    .on_complete(move |card| {
                        if index + 1 == total {
                            log::info!("{} settled last", card.id());
                        }
                        Ok(())
                    })
            }),
        );

        let phase = if self.raised { 1.0 } else { 0.0 };
        let _ = renderer.transition(
            self.wave,
            TransitionOptions::new(ElementState::new().with(Property::Points, wave_points(phase)))
                .duration(Duration::from_millis(600))
                .ease(Ease::InOutQuad),
        );
    }
}

fn wave_points(phase: f32) -> Vec<Vec2> {
    (0..WAVE_POINTS)
        .map(|i| {
            let t = i as f32 / (WAVE_POINTS - 1) as f32;
            let swing = if i % 2 == 0 { 1.0 } else { -1.0 } * (1.0 - 2.0 * phase);
            Vec2::new(80.0 + t * 640.0, 140.0 + swing * 60.0)
        })
        .collect()
}

impl App for Studio {
    fn on_start(&mut self, renderer: &mut Renderer) {
        let _ = renderer.transition(
            self.pulse,
            TransitionOptions::new(ElementState::new().with(Property::Radius, 50.0))
                .duration(Duration::from_millis(900))
                .ease(Ease::InOutQuad)
                .looped(true),
        );
        log::info!("click to toggle the cards, space to flip direction, escape to quit");
    }

    fn on_window_event(&mut self, renderer: &mut Renderer, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::MouseInput {
                state: ButtonState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.toggle(renderer),

            WindowEvent::KeyboardInput { event, .. } if event.state == ButtonState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => return AppControl::Exit,
                    PhysicalKey::Code(KeyCode::Space) => {
                        self.direction = match self.direction {
                            Direction::Forward => Direction::Reverse,
                            Direction::Reverse => Direction::Forward,
                        };
                        log::info!("direction: {:?}", self.direction);
                    }
                    PhysicalKey::Code(KeyCode::KeyB) => renderer.configure(|c| {
                        c.debug.bounding_boxes = !c.debug.bounding_boxes;
                    }),
                    _ => {}
                }
            }

            _ => {}
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.time.frame_index % 120 == 0 {
            let (w, h) = ctx.logical_size();
            log::debug!(
                "frame #{} dt={:.2}ms surface={}x{} commands={} transitions={}",
                ctx.time.frame_index,
                ctx.time.dt * 1000.0,
                w,
                h,
                ctx.renderer.scene().surface().len(),
                ctx.renderer.active_transitions(),
            );
        }
        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut scene = Scene::new();
    let studio = Studio::build(&mut scene);

    Runtime::run(
        RuntimeConfig {
            title: "kinema studio".to_string(),
            ..RuntimeConfig::default()
        },
        scene,
        RendererConfig::default(),
        studio,
    )
}
