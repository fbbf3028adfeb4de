use crate::core::markers::MarkerLayoutConfig;
use crate::render::{PointReconciler, TransitionConfig};

use super::chart_model::ChartModel;

/// Internal engine core state used by the public facade (`ChartEngine`).
///
/// Point reconcilers live here rather than in the loaded state so continuing
/// weeks keep their rendered identity across dataset reloads.
pub(super) struct EngineCore {
    pub(super) model: ChartModel,
    pub(super) layout: MarkerLayoutConfig,
    pub(super) transitions: TransitionConfig,
    pub(super) actual_points: PointReconciler,
    pub(super) prediction_points: PointReconciler,
}
