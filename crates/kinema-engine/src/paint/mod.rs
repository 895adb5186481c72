//! Paint model consumed by shapes and the draw stream.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - stroke styling (width, dash pattern)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod stroke;

pub use color::Color;
pub use stroke::Stroke;
