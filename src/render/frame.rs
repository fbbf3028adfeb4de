use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::core::markers::{
    BandVertex, BaselineMarker, OnsetMarker, PathVertex, PeakMarker, TimeCursor,
};
use crate::error::{ChartError, ChartResult};
use crate::render::PointDelta;

/// Visual transition durations handed to the substrate as hints.
///
/// The engine never awaits a transition: a new pass simply supersedes the
/// visual target of any in-flight interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub marker_duration_ms: u32,
    pub baseline_duration_ms: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            marker_duration_ms: 200,
            baseline_duration_ms: 300,
        }
    }
}

/// One named marker update with fully materialized pixel geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MarkerUpdate {
    Baseline(BaselineMarker),
    ActualPath(Vec<PathVertex>),
    ActualPoints(PointDelta),
    TimeCursor(TimeCursor),
    Onset(OnsetMarker),
    Peak(PeakMarker),
    PredictionPath(Vec<PathVertex>),
    PredictionBand(Vec<BandVertex>),
    PredictionPoints(PointDelta),
}

impl MarkerUpdate {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Baseline(baseline) => baseline.validate(),
            Self::ActualPath(path) | Self::PredictionPath(path) => {
                path.iter().try_for_each(|vertex| vertex.validate())
            }
            Self::ActualPoints(delta) | Self::PredictionPoints(delta) => delta.validate(),
            Self::TimeCursor(cursor) => cursor.validate(),
            Self::Onset(onset) => onset.validate(),
            Self::Peak(peak) => peak.validate(),
            Self::PredictionBand(band) => band.iter().try_for_each(|vertex| vertex.validate()),
        }
    }
}

/// Backend-agnostic scene for one draw pass.
///
/// A full pass (dataset load) carries every marker; a partial pass (pointer
/// step) carries only the pointer-dependent markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPass {
    pub viewport: Viewport,
    pub transitions: TransitionConfig,
    pub updates: Vec<MarkerUpdate>,
}

impl RenderPass {
    #[must_use]
    pub fn new(viewport: Viewport, transitions: TransitionConfig) -> Self {
        Self {
            viewport,
            transitions,
            updates: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_update(mut self, update: MarkerUpdate) -> Self {
        self.updates.push(update);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for update in &self.updates {
            update.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}
