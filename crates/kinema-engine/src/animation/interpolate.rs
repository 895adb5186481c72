use std::fmt;

use crate::coords::Vec2;
use crate::paint::Color;

use super::state::{ElementState, Value};

/// Types that can be blended between two values.
///
/// `t = 0` yields `self`, `t = 1` yields `to`.
pub trait Lerp {
    fn lerp(&self, to: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Vec2::lerp(*self, *to, t)
    }
}

impl Lerp for Color {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Color::lerp(*self, *to, t)
    }
}

impl Lerp for Value {
    /// Blends matching kinds; everything else switches to `to` once `t` reaches 1.
    fn lerp(&self, to: &Self, t: f32) -> Self {
        match (self, to) {
            (Value::Number(a), Value::Number(b)) => Value::Number(Lerp::lerp(a, b, t)),
            (Value::Color(a), Value::Color(b)) => Value::Color(Lerp::lerp(a, b, t)),
            (Value::Point(a), Value::Point(b)) => Value::Point(Lerp::lerp(a, b, t)),
            (Value::Points(a), Value::Points(b)) if !a.is_empty() && !b.is_empty() && t < 1.0 => {
                Value::Points(lerp_points(a, b, t))
            }
            // Extra source segments converge on the target's last segment before the
            // list takes the target's length at t = 1.
            (Value::Dash(a), Value::Dash(b)) if t < 1.0 => Value::Dash(
                a.iter()
                    .enumerate()
                    .map(|(i, from)| b.get(i).or(b.last()).map_or(*from, |to| Lerp::lerp(from, to, t)))
                    .collect(),
            ),
            _ if t >= 1.0 => to.clone(),
            _ => self.clone(),
        }
    }
}

/// Pairs points by index, padding the shorter list with its last point.
fn lerp_points(a: &[Vec2], b: &[Vec2], t: f32) -> Vec<Vec2> {
    let len = a.len().max(b.len());
    let pick = |list: &[Vec2], i: usize| list.get(i).or(list.last()).copied().unwrap_or_default();

    (0..len).map(|i| pick(a, i).lerp(pick(b, i), t)).collect()
}

/// Computes an element's intermediate state for a normalized, eased progress.
///
/// Produced once per transition. Calls with equal progress must yield equal
/// states; the render loop may evaluate the same progress more than once.
pub struct Interpolator {
    f: Box<dyn Fn(f32) -> ElementState>,
}

impl Interpolator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(f32) -> ElementState + 'static,
    {
        Self { f: Box::new(f) }
    }

    /// Blends every property listed in `to` starting from its value in `from`.
    ///
    /// Properties missing from `from` jump straight to their target.
    pub fn between(from: &ElementState, to: &ElementState) -> Self {
        let pairs: Vec<_> = to
            .iter()
            .map(|(property, target)| (property, from.get(property).cloned(), target.clone()))
            .collect();

        Self::new(move |t| {
            pairs
                .iter()
                .map(|(property, from, to)| {
                    let value = match from {
                        Some(from) => from.lerp(to, t),
                        None => to.clone(),
                    };
                    (*property, value)
                })
                .collect()
        })
    }

    #[inline]
    pub fn at(&self, t: f32) -> ElementState {
        (self.f)(t)
    }
}

impl fmt::Debug for Interpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpolator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Property;

    #[test]
    fn between_blends_numbers_and_colors() {
        let from = ElementState::new()
            .with(Property::X, 0.0)
            .with(Property::Fill, Color::from_premul(0.0, 0.0, 0.0, 1.0));
        let to = ElementState::new()
            .with(Property::X, 100.0)
            .with(Property::Fill, Color::from_premul(1.0, 1.0, 1.0, 1.0));

        let mid = Interpolator::between(&from, &to).at(0.25);
        assert_eq!(mid.number(Property::X), Some(25.0));
        assert_eq!(mid.color(Property::Fill), Some(Color::from_premul(0.25, 0.25, 0.25, 1.0)));
    }

    #[test]
    fn between_only_touches_target_properties() {
        let from = ElementState::new().with(Property::X, 0.0).with(Property::Y, 7.0);
        let to = ElementState::new().with(Property::X, 10.0);

        let state = Interpolator::between(&from, &to).at(0.5);
        assert_eq!(state.len(), 1);
        assert!(!state.contains(Property::Y));
    }

    #[test]
    fn missing_source_snaps_to_target() {
        let to = ElementState::new().with(Property::Radius, 9.0);
        let state = Interpolator::between(&ElementState::new(), &to).at(0.1);
        assert_eq!(state.number(Property::Radius), Some(9.0));
    }

    #[test]
    fn same_progress_same_state() {
        let from = ElementState::new().with(Property::X, 3.0);
        let to = ElementState::new().with(Property::X, 11.0);
        let interp = Interpolator::between(&from, &to);
        assert_eq!(interp.at(0.4), interp.at(0.4));
    }

    #[test]
    fn points_pad_shorter_list_and_land_exactly() {
        let a = Value::Points(vec![Vec2::new(0.0, 0.0)]);
        let b = Value::Points(vec![Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0)]);

        assert_eq!(
            a.lerp(&b, 0.5),
            Value::Points(vec![Vec2::new(5.0, 0.0), Vec2::new(10.0, 5.0)])
        );
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn extra_dash_segments_converge_on_last_target_segment() {
        let a = Value::Dash(vec![4.0, 8.0]);
        let b = Value::Dash(vec![8.0]);
        assert_eq!(a.lerp(&b, 0.5), Value::Dash(vec![6.0, 8.0]));
        assert_eq!(a.lerp(&b, 1.0), b);

        let a = Value::Dash(vec![4.0, 8.0, 12.0]);
        let b = Value::Dash(vec![2.0]);
        assert_eq!(a.lerp(&b, 0.5), Value::Dash(vec![3.0, 5.0, 7.0]));
        let Value::Dash(almost) = a.lerp(&b, 0.999) else {
            panic!("dash expected");
        };
        assert!(almost.iter().all(|d| (d - 2.0).abs() < 0.02));
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn mismatched_kinds_switch_at_end() {
        let a = Value::Number(1.0);
        let b = Value::Point(Vec2::new(1.0, 1.0));
        assert_eq!(a.lerp(&b, 0.99), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }
}
