use crate::foundation::core::Size;
use crate::foundation::math::scroll_fraction;

/// Document scroll position as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    /// Vertical scroll offset.
    pub offset: f64,
    /// Full document height.
    pub scroll_height: f64,
}

impl ScrollMetrics {
    /// Normalized progress for a viewport of `viewport_height`.
    pub fn fraction(self, viewport_height: f64) -> f64 {
        scroll_fraction(self.offset, self.scroll_height, viewport_height)
    }
}

/// Host window state, injected into the registry instead of read from globals.
pub trait Environment {
    /// Current viewport size.
    fn viewport(&self) -> Size;

    /// Current scroll position.
    fn scroll_metrics(&self) -> ScrollMetrics;
}

/// Plain-value environment: the host pushes new values in, the registry reads them.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaticEnvironment {
    /// Viewport size.
    pub viewport: Size,
    /// Scroll position.
    #[serde(default)]
    pub scroll: ScrollMetrics,
}

impl StaticEnvironment {
    /// An environment with the given viewport and no scroll.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Size::new(width, height),
            scroll: ScrollMetrics::default(),
        }
    }
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

impl Environment for StaticEnvironment {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.scroll
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/environment.rs"]
mod tests;
