//! In-memory surface that records every call
//!
//! Used by the test suite and by hosts that want to inspect a frame
//! without a browser. The current transform is tracked so callers can
//! check that rotated draws leave the frame where they found it.

use std::{cell::RefCell, rc::Rc};

use super::{GradientHandle, Rect, Surface, SurfaceSize};
use crate::error::{CoffeeError, Result};
use crate::util::Color;

/// Row-major 2D affine transform `[a c e; b d f]`, like a canvas matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    fn translated(&self, x: f64, y: f64) -> Transform {
        Transform {
            e: self.a * x + self.c * y + self.e,
            f: self.b * x + self.d * y + self.f,
            ..*self
        }
    }

    fn rotated(&self, angle: f64) -> Transform {
        let (sin, cos) = angle.sin_cos();
        Transform {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            ..*self
        }
    }

    /// Maps a local point into surface space.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    pub fn approx_eq(&self, other: &Transform, eps: f64) -> bool {
        [
            self.a - other.a,
            self.b - other.b,
            self.c - other.c,
            self.d - other.d,
            self.e - other.e,
            self.f - other.f,
        ]
        .iter()
        .all(|d| d.abs() <= eps)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    Resize { w_px: u32, h_px: u32 },
    StrokeColor(Color),
    FillColor(Color),
    FillGradient(usize),
    LineWidth(f64),
    Font(String),
    BeginPath,
    ClosePath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Rect(Rect),
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    Stroke,
    Fill,
    FillRect(Rect),
    ClearRect(Rect),
    DrawImage { image: String, src: Option<Rect>, dest: Rect, transform: Transform },
    StrokeText { text: String, x: f64, y: f64, max_width: f64 },
    FillText { text: String, x: f64, y: f64, max_width: f64 },
    CreateGradient(usize),
    LinearGradient { id: usize, x1: f64, y1: f64, x2: f64, y2: f64 },
    Translate(f64, f64),
    Rotate(f64),
    Notify(String),
}

/// Gradient handle of a [`RecordingSurface`]; stops are shared with clones.
#[derive(Clone, Debug)]
pub struct RecordedGradient {
    pub id: usize,
    stops: Rc<RefCell<Vec<(f64, Color)>>>,
}

impl RecordedGradient {
    pub fn stops(&self) -> Vec<(f64, Color)> {
        self.stops.borrow().clone()
    }
}

impl GradientHandle for RecordedGradient {
    fn add_color_stop(&self, ratio: f64, color: &Color) -> Result<()> {
        self.stops.borrow_mut().push((ratio, *color));
        Ok(())
    }
}

pub struct RecordingSurface {
    size: SurfaceSize,
    transform: Transform,
    calls: Vec<SurfaceCall>,
    gradients: usize,
}

impl RecordingSurface {
    pub fn new(w_px: u32, h_px: u32) -> Self {
        Self {
            size: SurfaceSize { w_px, h_px },
            transform: Transform::IDENTITY,
            calls: Vec::new(),
            gradients: 0,
        }
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    fn record(&mut self, call: SurfaceCall) {
        self.calls.push(call);
    }
}

impl Surface for RecordingSurface {
    /// Images are identified by name.
    type Image = String;
    type Gradient = RecordedGradient;

    fn query_size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, w_px: u32, h_px: u32) {
        self.size = SurfaceSize { w_px, h_px };
        // resizing a canvas resets its context state
        self.transform = Transform::IDENTITY;
        self.record(SurfaceCall::Resize { w_px, h_px });
    }

    fn set_stroke_color(&mut self, color: &Color) {
        self.record(SurfaceCall::StrokeColor(*color));
    }

    fn set_fill_color(&mut self, color: &Color) {
        self.record(SurfaceCall::FillColor(*color));
    }

    fn set_fill_gradient(&mut self, gradient: &RecordedGradient) {
        self.record(SurfaceCall::FillGradient(gradient.id));
    }

    fn set_line_width(&mut self, width: f64) {
        self.record(SurfaceCall::LineWidth(width));
    }

    fn set_font(&mut self, font: &str) {
        self.record(SurfaceCall::Font(font.to_string()));
    }

    fn begin_path(&mut self) {
        self.record(SurfaceCall::BeginPath);
    }

    fn close_path(&mut self) {
        self.record(SurfaceCall::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.record(SurfaceCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.record(SurfaceCall::LineTo(x, y));
    }

    fn rect(&mut self, rect: Rect) {
        self.record(SurfaceCall::Rect(rect));
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<()> {
        if radius < 0.0 {
            return Err(CoffeeError::Surface(format!(
                "IndexSizeError: the radius provided ({radius}) is negative"
            )));
        }
        self.record(SurfaceCall::Arc {
            x,
            y,
            radius,
            start,
            end,
        });
        Ok(())
    }

    fn stroke(&mut self) {
        self.record(SurfaceCall::Stroke);
    }

    fn fill(&mut self) {
        self.record(SurfaceCall::Fill);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.record(SurfaceCall::FillRect(rect));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.record(SurfaceCall::ClearRect(rect));
    }

    fn draw_image(&mut self, image: &String, dest: Rect) -> Result<()> {
        let transform = self.transform;
        self.record(SurfaceCall::DrawImage {
            image: image.clone(),
            src: None,
            dest,
            transform,
        });
        Ok(())
    }

    fn draw_image_region(&mut self, image: &String, src: Rect, dest: Rect) -> Result<()> {
        let transform = self.transform;
        self.record(SurfaceCall::DrawImage {
            image: image.clone(),
            src: Some(src),
            dest,
            transform,
        });
        Ok(())
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64, max_width: f64) -> Result<()> {
        self.record(SurfaceCall::StrokeText {
            text: text.to_string(),
            x,
            y,
            max_width,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: f64) -> Result<()> {
        self.record(SurfaceCall::FillText {
            text: text.to_string(),
            x,
            y,
            max_width,
        });
        Ok(())
    }

    fn create_linear_gradient(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> RecordedGradient {
        let gradient = self.next_gradient();
        self.record(SurfaceCall::LinearGradient {
            id: gradient.id,
            x1,
            y1,
            x2,
            y2,
        });
        gradient
    }

    fn create_radial_gradient(
        &mut self,
        _x1: f64,
        _y1: f64,
        r1: f64,
        _x2: f64,
        _y2: f64,
        r2: f64,
    ) -> Result<RecordedGradient> {
        if r1 < 0.0 || r2 < 0.0 {
            return Err(CoffeeError::Surface(
                "IndexSizeError: negative gradient radius".to_string(),
            ));
        }
        let gradient = self.next_gradient();
        self.record(SurfaceCall::CreateGradient(gradient.id));
        Ok(gradient)
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<()> {
        self.transform = self.transform.translated(x, y);
        self.record(SurfaceCall::Translate(x, y));
        Ok(())
    }

    fn rotate(&mut self, angle: f64) -> Result<()> {
        if !angle.is_finite() {
            return Err(CoffeeError::Surface(format!("non-finite rotation {angle}")));
        }
        self.transform = self.transform.rotated(angle);
        self.record(SurfaceCall::Rotate(angle));
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        log::warn!("{message}");
        self.record(SurfaceCall::Notify(message.to_string()));
    }
}

impl RecordingSurface {
    fn next_gradient(&mut self) -> RecordedGradient {
        let id = self.gradients;
        self.gradients += 1;
        RecordedGradient {
            id,
            stops: Rc::new(RefCell::new(Vec::new())),
        }
    }
}
