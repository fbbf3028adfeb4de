use crate::error::ChartResult;
use crate::render::{RenderPass, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates pass content so tests can catch invalid geometry before
/// a real backend is introduced, and keeps the last pass for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub pass_count: usize,
    pub last_update_count: usize,
    pub last_pass: Option<RenderPass>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, pass: &RenderPass) -> ChartResult<()> {
        pass.validate()?;
        self.pass_count += 1;
        self.last_update_count = pass.updates.len();
        self.last_pass = Some(pass.clone());
        Ok(())
    }
}
