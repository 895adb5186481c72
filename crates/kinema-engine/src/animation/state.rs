use std::collections::BTreeMap;

use crate::coords::Vec2;
use crate::paint::Color;

/// Key of one animatable visual property.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    X,
    Y,
    Width,
    Height,
    Cx,
    Cy,
    Radius,
    Fill,
    Stroke,
    LineWidth,
    LineDash,
    LineDashOffset,
    Opacity,
    Points,
    Tension,
    /// Element-specific property not covered above.
    Custom(&'static str),
}

/// Animatable property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f32),
    Color(Color),
    Point(Vec2),
    Points(Vec<Vec2>),
    /// Line-dash segment lengths.
    Dash(Vec<f32>),
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Number(v)
    }
}

impl From<Color> for Value {
    fn from(v: Color) -> Self {
        Value::Color(v)
    }
}

impl From<Vec2> for Value {
    fn from(v: Vec2) -> Self {
        Value::Point(v)
    }
}

impl From<Vec<Vec2>> for Value {
    fn from(v: Vec<Vec2>) -> Self {
        Value::Points(v)
    }
}

impl From<Vec<f32>> for Value {
    fn from(v: Vec<f32>) -> Self {
        Value::Dash(v)
    }
}

/// Visual state of an element as a property bag.
///
/// Used both for an element's current state and for the (partial) target state
/// of a transition; a target only lists the properties it changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    values: BTreeMap<Property, Value>,
}

impl ElementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`.
    pub fn with(mut self, property: Property, value: impl Into<Value>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: Property, value: impl Into<Value>) {
        self.values.insert(property, value.into());
    }

    pub fn get(&self, property: Property) -> Option<&Value> {
        self.values.get(&property)
    }

    pub fn remove(&mut self, property: Property) -> Option<Value> {
        self.values.remove(&property)
    }

    pub fn contains(&self, property: Property) -> bool {
        self.values.contains_key(&property)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, &Value)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// Overwrites every property present in `other`; others are kept.
    pub fn merge(&mut self, other: ElementState) {
        self.values.extend(other.values);
    }

    pub fn number(&self, property: Property) -> Option<f32> {
        match self.get(property) {
            Some(Value::Number(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn color(&self, property: Property) -> Option<Color> {
        match self.get(property) {
            Some(Value::Color(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn point(&self, property: Property) -> Option<Vec2> {
        match self.get(property) {
            Some(Value::Point(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn points(&self, property: Property) -> Option<&[Vec2]> {
        match self.get(property) {
            Some(Value::Points(v)) => Some(v),
            _ => None,
        }
    }

    pub fn dash(&self, property: Property) -> Option<&[f32]> {
        match self.get(property) {
            Some(Value::Dash(v)) => Some(v),
            _ => None,
        }
    }
}

impl FromIterator<(Property, Value)> for ElementState {
    fn from_iter<I: IntoIterator<Item = (Property, Value)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_only_given_properties() {
        let mut state = ElementState::new()
            .with(Property::X, 1.0)
            .with(Property::Y, 2.0);

        state.merge(ElementState::new().with(Property::Y, 5.0).with(Property::Opacity, 0.5));

        assert_eq!(state.number(Property::X), Some(1.0));
        assert_eq!(state.number(Property::Y), Some(5.0));
        assert_eq!(state.number(Property::Opacity), Some(0.5));
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn typed_getters_reject_other_kinds() {
        let state = ElementState::new().with(Property::Fill, Color::transparent());
        assert_eq!(state.number(Property::Fill), None);
        assert_eq!(state.color(Property::Fill), Some(Color::transparent()));
        assert_eq!(state.number(Property::Custom("missing")), None);
    }
}
