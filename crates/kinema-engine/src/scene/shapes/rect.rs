use crate::animation::{ElementState, Property, Value};
use crate::coords::Rect;
use crate::paint::{Color, Stroke};
use crate::scene::{DrawCmd, DrawList, Element, ElementId};

use super::{fill_of, stroke_of};

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) -> Self {
        Self { rect, fill, stroke }
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) {
        self.push(DrawCmd::Rect(RectCmd::new(rect, fill, stroke)));
    }

    /// Records a 1px unfilled outline, used for debug overlays.
    pub fn push_outline(&mut self, rect: Rect, color: Color) {
        self.push_rect(rect, None, Some(Stroke::new(1.0, color)));
    }
}

/// Axis-aligned rectangle element driven by `X`, `Y`, `Width`, `Height`.
#[derive(Debug, Clone)]
pub struct RectShape {
    id: ElementId,
    state: ElementState,
}

impl RectShape {
    pub fn new(rect: Rect) -> Self {
        let state = ElementState::new()
            .with(Property::X, rect.origin.x)
            .with(Property::Y, rect.origin.y)
            .with(Property::Width, rect.size.x)
            .with(Property::Height, rect.size.y);
        Self { id: ElementId::next(), state }
    }

    pub fn fill(self, color: Color) -> Self {
        self.with(Property::Fill, color)
    }

    pub fn stroke(self, color: Color, width: f32) -> Self {
        self.with(Property::Stroke, color).with(Property::LineWidth, width)
    }

    pub fn with(mut self, property: Property, value: impl Into<Value>) -> Self {
        self.state.set(property, value);
        self
    }

    pub fn rect(&self) -> Rect {
        let n = |p| self.state.number(p).unwrap_or(0.0);
        Rect::new(n(Property::X), n(Property::Y), n(Property::Width), n(Property::Height))
    }
}

impl Element for RectShape {
    fn id(&self) -> ElementId {
        self.id
    }

    fn state(&self) -> &ElementState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ElementState {
        &mut self.state
    }

    fn render(&self, surface: &mut DrawList) {
        let fill = fill_of(&self.state);
        let stroke = stroke_of(&self.state);
        if fill.is_none() && stroke.is_none() {
            return;
        }
        surface.push_rect(self.rect(), fill, stroke);
    }

    fn bounding_box(&self) -> Rect {
        self.rect().normalized()
    }
}
