use crate::core::markers::StaticMarkers;
use crate::core::{ChartScales, Dataset, Viewport};

use super::pointer::PredictionPointer;

/// State derived from the currently loaded dataset.
///
/// Replaced wholesale by `load_data`; the scales are never partially mutated.
pub(super) struct LoadedChart {
    pub(super) dataset: Dataset,
    pub(super) scales: ChartScales,
    pub(super) static_markers: StaticMarkers,
    pub(super) pointer: PredictionPointer,
}

/// Core chart domain state grouped for model-centric orchestration.
pub(super) struct ChartModel {
    pub(super) viewport: Viewport,
    pub(super) loaded: Option<LoadedChart>,
}
