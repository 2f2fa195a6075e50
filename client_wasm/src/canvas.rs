//! Canvas 2D drawing surface

use dvd_core::{Label, Rgb, Surface, Viewport};
use glam::IVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FONT_FAMILY: &str = "sans-serif";

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    /// Size the canvas to the viewport and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, viewport: Viewport) -> Result<Self, JsValue> {
        canvas.set_width(viewport.width as u32);
        canvas.set_height(viewport.height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_text_baseline("top");

        Ok(Self { ctx, viewport })
    }

    fn set_font(&self, label: &Label) {
        self.ctx
            .set_font(&format!("{}px {}", label.font_size, FONT_FAMILY));
    }
}

impl Surface for CanvasSurface {
    fn fill(&mut self, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    fn measure_text(&self, label: &Label) -> IVec2 {
        self.set_font(label);
        let height = label.font_size as i32;
        match self.ctx.measure_text(&label.text) {
            Ok(metrics) => IVec2::new(metrics.width().ceil() as i32, height),
            Err(e) => {
                // Rough estimate: glyphs are about half as wide as tall
                log::warn!("measureText failed: {:?}", e);
                IVec2::new(label.text.chars().count() as i32 * height / 2, height)
            }
        }
    }

    fn draw_text(&mut self, label: &Label, pos: IVec2, color: Rgb) {
        self.set_font(label);
        self.ctx.set_fill_style_str(&color.to_css());
        if let Err(e) = self
            .ctx
            .fill_text(&label.text, pos.x as f64, pos.y as f64)
        {
            log::warn!("fillText failed: {:?}", e);
        }
    }
}
