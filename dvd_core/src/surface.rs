use glam::IVec2;

use crate::{Label, Rgb};

/// Drawing target provided by the frontend
pub trait Surface {
    /// Clear the whole viewport
    fn fill(&mut self, color: Rgb);

    /// Bounding box of `label` once rendered
    fn measure_text(&self, label: &Label) -> IVec2;

    /// Render `label` with its top-left corner at `pos`
    fn draw_text(&mut self, label: &Label, pos: IVec2, color: Rgb);
}
