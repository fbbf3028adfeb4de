use crate::core::markers::{FrameMarkers, StaticMarkers};
use crate::core::{ChartScales, Dataset, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::engine::ChartEngine;

/// Read-only engine state accessors.
impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.viewport
    }

    /// Current pointer position, `None` before the first load.
    #[must_use]
    pub fn pointer_index(&self) -> Option<usize> {
        self.core
            .model
            .loaded
            .as_ref()
            .map(|loaded| loaded.pointer.index())
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.core.model.loaded.as_ref().map(|loaded| &loaded.dataset)
    }

    #[must_use]
    pub fn scales(&self) -> Option<&ChartScales> {
        self.core.model.loaded.as_ref().map(|loaded| &loaded.scales)
    }

    #[must_use]
    pub fn static_markers(&self) -> Option<&StaticMarkers> {
        self.core
            .model
            .loaded
            .as_ref()
            .map(|loaded| &loaded.static_markers)
    }

    /// Pointer-dependent marker geometry for the current frame, recomputed
    /// as a pure function of the loaded state.
    pub fn frame_markers(&self) -> ChartResult<FrameMarkers> {
        let loaded = self
            .core
            .model
            .loaded
            .as_ref()
            .ok_or(ChartError::NoDataLoaded)?;
        FrameMarkers::build(
            &loaded.dataset,
            &loaded.scales,
            loaded.pointer.index(),
            &self.core.layout,
        )
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
