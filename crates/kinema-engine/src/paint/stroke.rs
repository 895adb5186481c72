use super::Color;

/// Stroke drawn along a shape outline.
///
/// `dash` alternates on/off segment lengths; empty means a solid line.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub dash: Vec<f32>,
    pub dash_offset: f32,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color, dash: Vec::new(), dash_offset: 0.0 }
    }

    #[inline]
    pub fn with_dash(mut self, dash: Vec<f32>, offset: f32) -> Self {
        self.dash = dash;
        self.dash_offset = offset;
        self
    }

    /// A stroke that would not paint anything.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.width <= 0.0 || self.color.a <= 0.0
    }
}
