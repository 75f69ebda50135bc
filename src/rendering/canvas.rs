//! Browser `<canvas>` backend

use wasm_bindgen::JsCast;
use web_sys::{
    CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent,
};

use super::{GradientHandle, Rect, Surface, SurfaceSize};
use crate::config::EngineConfig;
use crate::error::{CoffeeError, Result};
use crate::input::Point;
use crate::util::Color;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

/// Creates the `<canvas>` element described by `config`. The element is not
/// attached to the document until [`display_window`] is called.
pub fn create_window(config: &EngineConfig) -> Result<CanvasSurface> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CoffeeError::Surface("no document available".to_string()))?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| CoffeeError::Surface("created element is not a canvas".to_string()))?;
    canvas.set_id(&config.canvas_id);
    canvas.set_width(config.width);
    canvas.set_height(config.height);
    canvas.style().set_property("border", &config.border)?;
    log::debug!(
        "created window `{}` ({}x{})",
        config.canvas_id,
        config.width,
        config.height
    );
    CanvasSurface::from_canvas(canvas)
}

/// Appends the canvas to the document body.
pub fn display_window(surface: &CanvasSurface) -> Result<()> {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .ok_or_else(|| CoffeeError::Surface("document has no body".to_string()))?;
    body.append_child(&surface.canvas)?;
    Ok(())
}

impl CanvasSurface {
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| CoffeeError::Surface("no 2d context".to_string()))?
            .dyn_into()
            .map_err(|_| CoffeeError::Surface("context is not a 2d context".to_string()))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Converts a mouse event to surface coordinates.
    pub fn pointer_position(&self, event: &MouseEvent) -> Point {
        pointer_position(&self.canvas, event)
    }
}

pub fn pointer_position(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Point {
    let bounds = canvas.get_bounding_client_rect();
    Point {
        x: event.client_x() as f64 - bounds.left(),
        y: event.client_y() as f64 - bounds.top(),
    }
}

impl GradientHandle for CanvasGradient {
    fn add_color_stop(&self, ratio: f64, color: &Color) -> Result<()> {
        CanvasGradient::add_color_stop(self, ratio as f32, &color.to_css())?;
        Ok(())
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;
    type Gradient = CanvasGradient;

    fn query_size(&self) -> SurfaceSize {
        SurfaceSize {
            w_px: self.canvas.width(),
            h_px: self.canvas.height(),
        }
    }

    fn resize(&mut self, w_px: u32, h_px: u32) {
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
    }

    fn set_stroke_color(&mut self, color: &Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_fill_color(&mut self, color: &Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn set_fill_gradient(&mut self, gradient: &CanvasGradient) {
        self.ctx.set_fill_style_canvas_gradient(gradient);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn rect(&mut self, rect: Rect) {
        self.ctx.rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<()> {
        self.ctx.arc(x, y, radius, start, end)?;
        Ok(())
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn draw_image(&mut self, image: &HtmlImageElement, dest: Rect) -> Result<()> {
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                image, dest.x, dest.y, dest.w, dest.h,
            )?;
        Ok(())
    }

    fn draw_image_region(&mut self, image: &HtmlImageElement, src: Rect, dest: Rect) -> Result<()> {
        self.ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image, src.x, src.y, src.w, src.h, dest.x, dest.y, dest.w, dest.h,
            )?;
        Ok(())
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64, max_width: f64) -> Result<()> {
        self.ctx.stroke_text_with_max_width(text, x, y, max_width)?;
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: f64) -> Result<()> {
        self.ctx.fill_text_with_max_width(text, x, y, max_width)?;
        Ok(())
    }

    fn create_linear_gradient(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> CanvasGradient {
        self.ctx.create_linear_gradient(x1, y1, x2, y2)
    }

    fn create_radial_gradient(
        &mut self,
        x1: f64,
        y1: f64,
        r1: f64,
        x2: f64,
        y2: f64,
        r2: f64,
    ) -> Result<CanvasGradient> {
        Ok(self.ctx.create_radial_gradient(x1, y1, r1, x2, y2, r2)?)
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<()> {
        self.ctx.translate(x, y)?;
        Ok(())
    }

    fn rotate(&mut self, angle: f64) -> Result<()> {
        self.ctx.rotate(angle)?;
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        log::warn!("{message}");
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("failed to show alert: {e:?}");
            }
        }
    }
}
