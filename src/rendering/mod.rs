//! The presentation surface the engine draws on
//!
//! [`Surface`] mirrors the subset of a 2D canvas context the engine needs.
//! [`canvas::CanvasSurface`] drives a browser `<canvas>`;
//! [`recording::RecordingSurface`] keeps a call log instead.

use crate::error::Result;
use crate::util::Color;

pub mod canvas;
pub mod recording;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub w_px: u32,
    pub h_px: u32,
}

/// A destination or source rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// Opaque gradient produced by a surface.
pub trait GradientHandle {
    fn add_color_stop(&self, ratio: f64, color: &Color) -> Result<()>;
}

pub trait Surface {
    type Image;
    type Gradient: GradientHandle;

    fn query_size(&self) -> SurfaceSize;
    fn resize(&mut self, w_px: u32, h_px: u32);

    fn set_stroke_color(&mut self, color: &Color);
    fn set_fill_color(&mut self, color: &Color);
    fn set_fill_gradient(&mut self, gradient: &Self::Gradient);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn rect(&mut self, rect: Rect);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<()>;
    fn stroke(&mut self);
    fn fill(&mut self);

    fn fill_rect(&mut self, rect: Rect);
    fn clear_rect(&mut self, rect: Rect);

    fn draw_image(&mut self, image: &Self::Image, dest: Rect) -> Result<()>;
    fn draw_image_region(&mut self, image: &Self::Image, src: Rect, dest: Rect) -> Result<()>;

    fn stroke_text(&mut self, text: &str, x: f64, y: f64, max_width: f64) -> Result<()>;
    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: f64) -> Result<()>;

    fn create_linear_gradient(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self::Gradient;
    #[allow(clippy::too_many_arguments)]
    fn create_radial_gradient(
        &mut self,
        x1: f64,
        y1: f64,
        r1: f64,
        x2: f64,
        y2: f64,
        r2: f64,
    ) -> Result<Self::Gradient>;

    fn translate(&mut self, x: f64, y: f64) -> Result<()>;
    fn rotate(&mut self, angle: f64) -> Result<()>;

    /// Shows a user-facing error message.
    fn notify(&mut self, message: &str) {
        log::error!("{message}");
    }
}
