use std::time::Duration;

/// Duration every transition uses while `RendererConfig::immediate` is set.
pub const IMMEDIATE_DURATION: Duration = Duration::from_millis(1);

/// What a completed transition leaves on its element.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FillMode {
    /// Keep the last interpolated state.
    #[default]
    None,
    /// Snap to the end-of-direction state, also when the transition is evicted early.
    Forwards,
}

/// Debug drawing toggles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct DebugOptions {
    /// Outline every element's bounding box after drawing it.
    pub bounding_boxes: bool,
}

/// Renderer configuration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RendererConfig {
    /// Start the loop as soon as the renderer is constructed.
    pub auto_start: bool,
    /// Stop the loop once idle, and follow pointer enter/leave on the scene.
    pub auto_stop: bool,
    /// Collapse every transition to `IMMEDIATE_DURATION`.
    pub immediate: bool,
    pub fill: FillMode,
    pub debug: DebugOptions,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            auto_start: true,
            auto_stop: true,
            immediate: false,
            fill: FillMode::None,
            debug: DebugOptions::default(),
        }
    }
}
