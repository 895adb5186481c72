//! Scene collaborator of the renderer.
//!
//! Responsibilities:
//! - own the ordered element collection and groups (`Scene`)
//! - define the element contract the render loop relies on (`Element`)
//! - record renderer-agnostic draw commands each frame (`DrawList`)
//! - keep shape-specific code isolated per shape file under `scene::shapes`

mod cmd;
mod element;
mod graph;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use element::{Element, ElementId, Group, GroupId, Target, Targets};
pub use graph::{Scene, SceneEvent};
pub use list::DrawList;
