use serde::Deserialize;

use crate::util::Color;

/// Stroke, fill and font settings for one draw call.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Style {
    pub line_color: Color,
    pub line_width: f64,
    pub fill_color: Color,
    /// CSS font shorthand, e.g. `"16px monospace"`
    pub font: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_color: Color::BLACK,
            line_width: 1.0,
            fill_color: Color::BLACK,
            font: "50px serif".to_string(),
        }
    }
}

impl Style {
    pub fn with_line(mut self, color: Color, width: f64) -> Self {
        self.line_color = color;
        self.line_width = width;
        self
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }
}

/// Source rectangle for sprite draws. Cropping only applies when all four
/// fields are set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Crop {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub w: Option<f64>,
    pub h: Option<f64>,
}

impl Crop {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            w: Some(w),
            h: Some(h),
        }
    }

    /// `(x, y, w, h)` when the crop is active.
    pub fn active(&self) -> Option<(f64, f64, f64, f64)> {
        Some((self.x?, self.y?, self.w?, self.h?))
    }
}
