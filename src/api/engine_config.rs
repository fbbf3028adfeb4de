use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::core::markers::MarkerLayoutConfig;
use crate::error::{ChartError, ChartResult};
use crate::render::TransitionConfig;

/// Fixed drawing height per the container contract: only the width is
/// derived from the host element.
pub const DEFAULT_CHART_HEIGHT_PX: u32 = 270;

/// Horizontal space reserved around the drawing area for axes and padding.
pub const HOST_HORIZONTAL_MARGIN_PX: u32 = 60;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub layout: MarkerLayoutConfig,
    #[serde(default)]
    pub transitions: TransitionConfig,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layout: MarkerLayoutConfig::default(),
            transitions: TransitionConfig::default(),
        }
    }

    /// Derives the drawing viewport from a measured host width, at the fixed
    /// default height.
    #[must_use]
    pub fn for_host_width(host_width_px: u32) -> Self {
        Self::new(Viewport::new(
            host_width_px.saturating_sub(HOST_HORIZONTAL_MARGIN_PX),
            DEFAULT_CHART_HEIGHT_PX,
        ))
    }

    /// Sets marker layout metrics.
    #[must_use]
    pub fn with_layout(mut self, layout: MarkerLayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Sets transition duration hints.
    #[must_use]
    pub fn with_transitions(mut self, transitions: TransitionConfig) -> Self {
        self.transitions = transitions;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.layout.validate()?;
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
