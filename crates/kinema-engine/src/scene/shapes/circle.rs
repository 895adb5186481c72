use crate::animation::{ElementState, Property, Value};
use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Stroke};
use crate::scene::{DrawCmd, DrawList, Element, ElementId};

use super::{fill_of, stroke_of};

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, fill: Option<Color>, stroke: Option<Stroke>) -> Self {
        Self { center, radius, fill, stroke }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) {
        self.push(DrawCmd::Circle(CircleCmd::new(center, radius, fill, stroke)));
    }
}

/// Circle element driven by `Cx`, `Cy`, `Radius`.
#[derive(Debug, Clone)]
pub struct CircleShape {
    id: ElementId,
    state: ElementState,
}

impl CircleShape {
    pub fn new(center: Vec2, radius: f32) -> Self {
        let state = ElementState::new()
            .with(Property::Cx, center.x)
            .with(Property::Cy, center.y)
            .with(Property::Radius, radius);
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

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.state.number(Property::Cx).unwrap_or(0.0),
            self.state.number(Property::Cy).unwrap_or(0.0),
        )
    }

    pub fn radius(&self) -> f32 {
        self.state.number(Property::Radius).unwrap_or(0.0).max(0.0)
    }
}

impl Element for CircleShape {
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
        surface.push_circle(self.center(), self.radius(), fill, stroke);
    }

    fn bounding_box(&self) -> Rect {
        let c = self.center();
        let r = self.radius();
        Rect::new(c.x - r, c.y - r, r * 2.0, r * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_wraps_circle() {
        let circle = CircleShape::new(Vec2::new(10.0, 20.0), 5.0);
        assert_eq!(circle.bounding_box(), Rect::new(5.0, 15.0, 10.0, 10.0));
    }

    #[test]
    fn negative_radius_renders_as_zero() {
        let black = Color::from_premul(0.0, 0.0, 0.0, 1.0);
        let circle = CircleShape::new(Vec2::zero(), -3.0).fill(black);

        let mut list = DrawList::new();
        circle.render(&mut list);
        assert_eq!(
            list.commands(),
            &[DrawCmd::Circle(CircleCmd::new(Vec2::zero(), 0.0, Some(black), None))]
        );
    }
}
