mod frame;
mod null_renderer;
mod reconcile;

pub use frame::{MarkerUpdate, RenderPass, TransitionConfig};
pub use null_renderer::NullRenderer;
pub use reconcile::{PointDelta, PointReconciler};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderPass` so
/// drawing code remains isolated from chart domain and pointer logic. A
/// backend may interpolate from prior geometry over the hinted durations;
/// it must tolerate passes arriving in quick succession, each superseding
/// the visual target of the previous one.
pub trait Renderer {
    fn render(&mut self, pass: &RenderPass) -> ChartResult<()>;
}
