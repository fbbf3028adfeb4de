use tracing::{debug, trace};

use crate::core::markers::{FrameMarkers, StaticMarkers};
use crate::core::{ChartScales, Dataset};
use crate::error::{ChartError, ChartResult};
use crate::render::{MarkerUpdate, PointReconciler, RenderPass, Renderer};

use super::chart_model::{ChartModel, LoadedChart};
use super::engine_config::ChartEngineConfig;
use super::engine_core::EngineCore;
use super::pointer::PredictionPointer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` coordinates the week/value scales, the prediction pointer,
/// marker geometry, point reconciliation, and renderer calls. It is
/// single-threaded and synchronous: every operation runs to completion, and
/// each emitted pass supersedes the visual target of any in-flight transition
/// in the substrate.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            core: EngineCore {
                model: ChartModel {
                    viewport: config.viewport,
                    loaded: None,
                },
                layout: config.layout,
                transitions: config.transitions,
                actual_points: PointReconciler::new(),
                prediction_points: PointReconciler::new(),
            },
        })
    }

    /// Replaces the active dataset.
    ///
    /// Validates the dataset invariants, refits both scales, rebuilds static
    /// markers, resets the pointer to the latest issuance, rebuilds the
    /// pointer-dependent markers, and emits one full render pass. Engine
    /// state is swapped only after every fallible derivation has succeeded.
    pub fn load_data(&mut self, dataset: Dataset) -> ChartResult<()> {
        dataset.validate()?;

        let viewport = self.core.model.viewport;
        let scales = ChartScales::fit(&dataset, viewport)?;
        let pointer = PredictionPointer::latest(dataset.predictions.len())?;
        let static_markers = StaticMarkers::build(&dataset, &scales, &self.core.layout);
        let frame_markers =
            FrameMarkers::build(&dataset, &scales, pointer.index(), &self.core.layout)?;

        debug!(
            observed = dataset.actual.len(),
            frames = dataset.predictions.len(),
            y_max = scales.y_max(),
            pointer = pointer.index(),
            "load dataset"
        );

        let actual_delta = self
            .core
            .actual_points
            .reconcile(&static_markers.actual.points);
        let prediction_delta = self
            .core
            .prediction_points
            .reconcile(&frame_markers.prediction.points);

        let pass = RenderPass::new(viewport, self.core.transitions)
            .with_update(MarkerUpdate::Baseline(static_markers.baseline))
            .with_update(MarkerUpdate::ActualPath(static_markers.actual.path.clone()))
            .with_update(MarkerUpdate::ActualPoints(actual_delta))
            .with_update(MarkerUpdate::TimeCursor(frame_markers.time_cursor))
            .with_update(MarkerUpdate::Onset(frame_markers.onset))
            .with_update(MarkerUpdate::Peak(frame_markers.peak))
            .with_update(MarkerUpdate::PredictionPath(
                frame_markers.prediction.path.to_vec(),
            ))
            .with_update(MarkerUpdate::PredictionBand(
                frame_markers.prediction.band.to_vec(),
            ))
            .with_update(MarkerUpdate::PredictionPoints(prediction_delta));

        self.core.model.loaded = Some(LoadedChart {
            dataset,
            scales,
            static_markers,
            pointer,
        });
        self.renderer.render(&pass)
    }

    /// Advances the pointer one issuance towards the latest frame, saturating
    /// at the end, and redraws exactly the pointer-dependent markers.
    pub fn step_forward(&mut self) -> ChartResult<()> {
        let loaded = self
            .core
            .model
            .loaded
            .as_mut()
            .ok_or(ChartError::NoDataLoaded)?;
        let moved = loaded.pointer.step_forward();
        trace!(index = loaded.pointer.index(), moved, "step forward");
        self.redraw_frame_markers()
    }

    /// Retreats the pointer one issuance, saturating at the earliest frame,
    /// and redraws exactly the pointer-dependent markers.
    pub fn step_backward(&mut self) -> ChartResult<()> {
        let loaded = self
            .core
            .model
            .loaded
            .as_mut()
            .ok_or(ChartError::NoDataLoaded)?;
        let moved = loaded.pointer.step_backward();
        trace!(index = loaded.pointer.index(), moved, "step backward");
        self.redraw_frame_markers()
    }

    fn redraw_frame_markers(&mut self) -> ChartResult<()> {
        let loaded = self
            .core
            .model
            .loaded
            .as_ref()
            .ok_or(ChartError::NoDataLoaded)?;
        let frame_markers = FrameMarkers::build(
            &loaded.dataset,
            &loaded.scales,
            loaded.pointer.index(),
            &self.core.layout,
        )?;
        let viewport = self.core.model.viewport;

        let prediction_delta = self
            .core
            .prediction_points
            .reconcile(&frame_markers.prediction.points);

        let pass = RenderPass::new(viewport, self.core.transitions)
            .with_update(MarkerUpdate::TimeCursor(frame_markers.time_cursor))
            .with_update(MarkerUpdate::Onset(frame_markers.onset))
            .with_update(MarkerUpdate::Peak(frame_markers.peak))
            .with_update(MarkerUpdate::PredictionPath(
                frame_markers.prediction.path.to_vec(),
            ))
            .with_update(MarkerUpdate::PredictionBand(
                frame_markers.prediction.band.to_vec(),
            ))
            .with_update(MarkerUpdate::PredictionPoints(prediction_delta));

        self.renderer.render(&pass)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
