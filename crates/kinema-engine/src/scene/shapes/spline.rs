use crate::animation::{ElementState, Property, Value};
use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Stroke};
use crate::scene::{DrawCmd, DrawList, Element, ElementId};

use super::{fill_of, stroke_of};

/// Default curve tension for `Spline`.
pub const DEFAULT_TENSION: f32 = 0.5;

/// One segment of a path, continuing from the previous end point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    LineTo(Vec2),
    CubicTo { c1: Vec2, c2: Vec2, to: Vec2 },
}

/// Path draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub start: Vec2,
    pub segments: Vec<PathSegment>,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl DrawList {
    /// Records a path draw command.
    #[inline]
    pub fn push_path(
        &mut self,
        start: Vec2,
        segments: Vec<PathSegment>,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) {
        self.push(DrawCmd::Path(PathCmd { start, segments, fill, stroke }));
    }
}

/// Smooth curve through `Points`, drawn as cubic Bézier segments.
///
/// Control points are derived from each point's neighbours; `Tension` scales how
/// far they reach (0 degenerates to a poly-line).
#[derive(Debug, Clone)]
pub struct Spline {
    id: ElementId,
    state: ElementState,
}

impl Spline {
    pub fn new(points: Vec<Vec2>) -> Self {
        let state = ElementState::new()
            .with(Property::Points, points)
            .with(Property::Tension, DEFAULT_TENSION);
        Self { id: ElementId::next(), state }
    }

    pub fn stroke(self, color: Color, width: f32) -> Self {
        self.with(Property::Stroke, color).with(Property::LineWidth, width)
    }

    pub fn with(mut self, property: Property, value: impl Into<Value>) -> Self {
        self.state.set(property, value);
        self
    }

    pub fn points(&self) -> &[Vec2] {
        self.state.points(Property::Points).unwrap_or_default()
    }

    /// Builds the Bézier segments for the current points.
    pub fn segments(&self) -> Vec<PathSegment> {
        let tension = self.state.number(Property::Tension).unwrap_or(DEFAULT_TENSION);
        curve_through(self.points(), tension)
    }
}

/// Returns (incoming, outgoing) control points around `p1`.
fn control_points(p0: Vec2, p1: Vec2, p2: Vec2, tension: f32) -> (Vec2, Vec2) {
    let d1 = p0.distance(p1);
    let d2 = p1.distance(p2);
    let total = d1 + d2;
    if total <= f32::EPSILON {
        return (p1, p1);
    }

    let span = p2 - p0;
    let incoming = p1 - span * (tension * d1 / total);
    let outgoing = p1 + span * (tension * d2 / total);
    (incoming, outgoing)
}

fn curve_through(points: &[Vec2], tension: f32) -> Vec<PathSegment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    // End points are duplicated so every segment has two neighbours.
    let at = |i: usize| points[i.saturating_sub(1).min(n - 1)];

    (1..n)
        .map(|index| {
            let (p0, p1, p2, p3) = (at(index - 1), at(index), at(index + 1), at(index + 2));
            let (first_in, first_out) = control_points(p0, p1, p2, tension);
            let (second_in, second_out) = control_points(p1, p2, p3, tension);

            let c1 = if index == 1 { first_in } else { first_out };
            let c2 = if index == n - 1 { second_out } else { second_in };
            PathSegment::CubicTo { c1, c2, to: p2 }
        })
        .collect()
}

impl Element for Spline {
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
        let segments = self.segments();
        let stroke = stroke_of(&self.state);
        let fill = fill_of(&self.state);
        if segments.is_empty() || (stroke.is_none() && fill.is_none()) {
            return;
        }
        surface.push_path(self.points()[0], segments, fill, stroke);
    }

    fn bounding_box(&self) -> Rect {
        Rect::from_points(self.points().iter().copied()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn one_segment_per_gap_ending_on_each_point() {
        let points = vec![v(0.0, 0.0), v(10.0, 10.0), v(20.0, 0.0)];
        let segments = Spline::new(points.clone()).segments();

        assert_eq!(segments.len(), 2);
        let ends: Vec<_> = segments
            .iter()
            .map(|s| match s {
                PathSegment::CubicTo { to, .. } => *to,
                PathSegment::LineTo(to) => *to,
            })
            .collect();
        assert_eq!(ends, points[1..].to_vec());
    }

    #[test]
    fn curve_starts_and_ends_flat() {
        let segments = Spline::new(vec![v(0.0, 0.0), v(10.0, 10.0), v(20.0, 0.0)]).segments();

        // Duplicated end points collapse the outer control points onto the ends.
        assert!(matches!(segments[0], PathSegment::CubicTo { c1, .. } if c1 == v(0.0, 0.0)));
        assert!(matches!(segments[1], PathSegment::CubicTo { c2, .. } if c2 == v(20.0, 0.0)));
    }

    #[test]
    fn zero_tension_is_a_polyline() {
        let spline = Spline::new(vec![v(0.0, 0.0), v(10.0, 10.0), v(20.0, 0.0)])
            .with(Property::Tension, 0.0);
        for segment in spline.segments() {
            if let PathSegment::CubicTo { c1, c2, .. } = segment {
                assert!(c1 == v(0.0, 0.0) || c1 == v(10.0, 10.0));
                assert!(c2 == v(10.0, 10.0) || c2 == v(20.0, 0.0));
            }
        }
    }

    #[test]
    fn single_point_draws_nothing() {
        let spline = Spline::new(vec![v(1.0, 1.0)]).stroke(Color::from_premul(0.0, 0.0, 0.0, 1.0), 1.0);
        let mut list = DrawList::new();
        spline.render(&mut list);
        assert!(list.is_empty());
        assert_eq!(spline.bounding_box(), Rect::new(1.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn bounding_box_spans_points() {
        let spline = Spline::new(vec![v(5.0, 2.0), v(-1.0, 9.0), v(3.0, 4.0)]);
        assert_eq!(spline.bounding_box(), Rect::new(-1.0, 2.0, 6.0, 7.0));
    }
}
