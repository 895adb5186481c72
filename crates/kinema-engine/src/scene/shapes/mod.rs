//! Built-in shapes: each file holds the element type, its draw payload, and the
//! matching `DrawList` push helpers.

pub(crate) mod circle;
pub(crate) mod rect;
pub(crate) mod spline;

pub use circle::{CircleCmd, CircleShape};
pub use rect::{RectCmd, RectShape};
pub use spline::{PathCmd, PathSegment, Spline};

use crate::animation::{ElementState, Property};
use crate::paint::{Color, Stroke};

/// Fill colour with `Opacity` applied, if the state defines one.
pub(crate) fn fill_of(state: &ElementState) -> Option<Color> {
    state.color(Property::Fill).map(|c| faded(c, state))
}

/// Stroke assembled from the stroke-related properties, if a stroke colour is set.
pub(crate) fn stroke_of(state: &ElementState) -> Option<Stroke> {
    let color = faded(state.color(Property::Stroke)?, state);
    let width = state.number(Property::LineWidth).unwrap_or(1.0);
    let dash = state.dash(Property::LineDash).map(<[f32]>::to_vec).unwrap_or_default();
    let offset = state.number(Property::LineDashOffset).unwrap_or(0.0);

    Some(Stroke::new(width, color).with_dash(dash, offset))
}

fn faded(color: Color, state: &ElementState) -> Color {
    match state.number(Property::Opacity) {
        Some(opacity) => {
            let o = opacity.clamp(0.0, 1.0);
            Color::from_premul(color.r * o, color.g * o, color.b * o, color.a * o)
        }
        None => color,
    }
}
