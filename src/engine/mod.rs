//! The drawing engine
//!
//! [`Engine`] owns a [`Surface`], the resolution multiplier, the sprite crop
//! rectangle and the collision registry. Stroke, fill and font come in
//! through an explicit [`Style`] on every call; the engine keeps no hidden
//! pen state between calls.

use std::f64::consts::TAU;

use crate::collision::{BoxHandle, BoxRegistry};
use crate::config::EngineConfig;
use crate::error::{CoffeeError, Result};
use crate::input::Point;
use crate::rendering::{Rect, Surface, SurfaceSize};
use crate::resources::{Gradient, GradientGeometry, Sprite, Sprites};
use crate::scene::GameObject;
use crate::util::Color;

mod style;
pub use style::{Crop, Style};

pub const DEFAULT_TEXT_WIDTH: f64 = 200.0;

const NEGATIVE_RADIUS_MESSAGE: &str = "Error: Circle radius cannot be negative.";

pub struct Engine<S: Surface> {
    surface: S,
    resolution_scale: f64,
    crop: Crop,
    boxes: BoxRegistry,
}

impl<S: Surface> Engine<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            resolution_scale: 1.0,
            crop: Crop::default(),
            boxes: BoxRegistry::new(),
        }
    }

    pub fn from_config(surface: S, config: &EngineConfig) -> Self {
        let mut engine = Self::new(surface);
        engine.resolution_scale = config.resolution_scale;
        engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn resolution_scale(&self) -> f64 {
        self.resolution_scale
    }

    pub fn set_resolution_scale(&mut self, scale: f64) {
        self.resolution_scale = scale;
    }

    // --- Window ---

    pub fn size(&self) -> SurfaceSize {
        self.surface.query_size()
    }

    /// Center of the surface.
    pub fn origin(&self) -> Point {
        let size = self.size();
        Point {
            x: size.w_px as f64 / 2.0,
            y: size.h_px as f64 / 2.0,
        }
    }

    pub fn resize_window(&mut self, w_px: u32, h_px: u32) {
        log::debug!("resizing window to {w_px}x{h_px}");
        self.surface.resize(w_px, h_px);
    }

    /// Rotates the whole coordinate frame around `(0, 0)`. The rotation
    /// stays in effect for every later draw.
    pub fn rotate_window(&mut self, angle: f64) -> Result<()> {
        self.surface.rotate(angle)
    }

    // --- Collision boxes ---

    /// Registers a static box at `(x, y)` of size `w` by `h`.
    pub fn register_box(&mut self, x: f64, y: f64, w: f64, h: f64) -> BoxHandle {
        self.boxes.register(x, y, w, h)
    }

    pub fn check_box_box(&self, a: BoxHandle, b: BoxHandle) -> Result<bool> {
        self.boxes.overlaps(a, b)
    }

    pub fn boxes(&self) -> &BoxRegistry {
        &self.boxes
    }

    // --- Sprites ---

    /// Draw only the `(ux, uy, uw, uh)` region of sprite images from now on.
    pub fn crop_sprite(&mut self, ux: f64, uy: f64, uw: f64, uh: f64) {
        self.crop = Crop::new(ux, uy, uw, uh);
    }

    pub fn set_crop(&mut self, crop: Crop) {
        self.crop = crop;
    }

    pub fn clear_crop(&mut self) {
        self.crop = Crop::default();
    }

    pub fn crop(&self) -> Crop {
        self.crop
    }

    pub fn draw_sprite(&mut self, sprite: &Sprite<S::Image>, x: f64, y: f64) -> Result<()> {
        let dest = self.scaled_rect(x, y, sprite.width, sprite.height);
        self.surface.begin_path();
        match self.crop.active() {
            Some((ux, uy, uw, uh)) => {
                log::trace!("drawing cropped sprite at {x},{y}");
                self.surface
                    .draw_image_region(&sprite.image, Rect::new(ux, uy, uw, uh), dest)
            }
            None => {
                log::trace!("drawing sprite at {x},{y}");
                self.surface.draw_image(&sprite.image, dest)
            }
        }
    }

    /// Draws a sprite rotated around its own center. The coordinate frame
    /// is restored afterwards, even if the draw itself fails.
    pub fn draw_sprite_rotated(
        &mut self,
        sprite: &Sprite<S::Image>,
        x: f64,
        y: f64,
        rotation: f64,
    ) -> Result<()> {
        let half_w = sprite.width / 2.0;
        let half_h = sprite.height / 2.0;
        let cx = (x + half_w) * self.resolution_scale;
        let cy = (y + half_h) * self.resolution_scale;

        self.surface.translate(cx, cy)?;
        if let Err(e) = self.surface.rotate(rotation) {
            self.surface.translate(-cx, -cy)?;
            return Err(e);
        }
        let drawn = self.draw_sprite(sprite, -half_w, -half_h);
        self.surface.rotate(-rotation)?;
        self.surface.translate(-cx, -cy)?;
        drawn
    }

    pub fn draw_object(&mut self, object: &GameObject, sprites: &Sprites<S::Image>) -> Result<()> {
        let sprite = object
            .sprite
            .and_then(|id| sprites.get(id))
            .ok_or(CoffeeError::MissingSprite)?;
        self.draw_sprite_rotated(sprite, object.x, object.y, object.rotation)
    }

    // --- Lines ---

    pub fn line(&mut self, style: &Style, x0: f64, y0: f64, x1: f64, y1: f64) {
        let s = self.resolution_scale;
        self.apply_stroke(style);
        self.surface.begin_path();
        self.surface.move_to(x0 * s, y0 * s);
        self.surface.line_to(x1 * s, y1 * s);
        self.surface.stroke();
    }

    /// Line from `(x, y)` of `length` units in direction `angle`, where an
    /// angle of 0 points along +y.
    pub fn angled_line(&mut self, style: &Style, x: f64, y: f64, angle: f64, length: f64) {
        let end_x = x + angle.sin() * length;
        let end_y = y + angle.cos() * length;
        self.line(style, x, y, end_x, end_y);
    }

    pub fn pixel(&mut self, x: f64, y: f64, color: Color) {
        self.surface.set_fill_color(&color);
        self.surface.begin_path();
        let rect = self.scaled_rect(x, y, 1.0, 1.0);
        self.surface.fill_rect(rect);
    }

    // --- Rectangles ---

    pub fn rect(&mut self, style: &Style, x: f64, y: f64, w: f64, h: f64) {
        self.apply_stroke(style);
        self.surface.begin_path();
        let rect = self.scaled_rect(x, y, w, h);
        self.surface.rect(rect);
        self.surface.stroke();
    }

    pub fn fill_rect(&mut self, style: &Style, x: f64, y: f64, w: f64, h: f64) {
        self.surface.set_fill_color(&style.fill_color);
        self.surface.begin_path();
        let rect = self.scaled_rect(x, y, w, h);
        self.surface.fill_rect(rect);
    }

    // --- Circles and arcs ---

    /// Circle outline centered at `(x, y)`.
    pub fn circle(&mut self, style: &Style, x: f64, y: f64, r: f64) -> Result<()> {
        self.arc(style, x, y, r, 0.0, TAU)
    }

    pub fn fill_circle(&mut self, style: &Style, x: f64, y: f64, r: f64) -> Result<()> {
        self.fill_arc(style, x, y, r, 0.0, TAU)
    }

    /// Arc outline from angle `start` to `end`, in radians.
    pub fn arc(&mut self, style: &Style, x: f64, y: f64, r: f64, start: f64, end: f64) -> Result<()> {
        self.check_radius(r)?;
        let s = self.resolution_scale;
        self.apply_stroke(style);
        self.surface.begin_path();
        self.surface.arc(x * s, y * s, r * s, start, end)?;
        self.surface.stroke();
        Ok(())
    }

    /// Filled arc, handy for half circles and pie slices.
    pub fn fill_arc(
        &mut self,
        style: &Style,
        x: f64,
        y: f64,
        r: f64,
        start: f64,
        end: f64,
    ) -> Result<()> {
        self.check_radius(r)?;
        let s = self.resolution_scale;
        self.surface.set_fill_color(&style.fill_color);
        self.surface.begin_path();
        self.surface.arc(x * s, y * s, r * s, start, end)?;
        self.surface.fill();
        Ok(())
    }

    // --- Triangles ---

    #[allow(clippy::too_many_arguments)]
    pub fn triangle(&mut self, style: &Style, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.triangle_path([(x1, y1), (x2, y2), (x3, y3)]);
        self.apply_stroke(style);
        self.surface.stroke();
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        style: &Style,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    ) {
        self.triangle_path([(x1, y1), (x2, y2), (x3, y3)]);
        self.surface.set_fill_color(&style.fill_color);
        self.surface.fill();
    }

    fn triangle_path(&mut self, points: [(f64, f64); 3]) {
        let s = self.resolution_scale;
        let [(x1, y1), (x2, y2), (x3, y3)] = points;
        self.surface.begin_path();
        self.surface.move_to(x1 * s, y1 * s);
        self.surface.line_to(x2 * s, y2 * s);
        self.surface.line_to(x3 * s, y3 * s);
        self.surface.close_path();
    }

    // --- Text ---

    /// Outlined text. `max_width` defaults to [`DEFAULT_TEXT_WIDTH`].
    pub fn text(&mut self, style: &Style, text: &str, x: f64, y: f64, max_width: Option<f64>) -> Result<()> {
        let s = self.resolution_scale;
        let max_width = max_width.unwrap_or(DEFAULT_TEXT_WIDTH);
        self.surface.set_font(&style.font);
        self.apply_stroke(style);
        self.surface.stroke_text(text, x * s, y * s, max_width * s)
    }

    pub fn fill_text(
        &mut self,
        style: &Style,
        text: &str,
        x: f64,
        y: f64,
        max_width: Option<f64>,
    ) -> Result<()> {
        let s = self.resolution_scale;
        let max_width = max_width.unwrap_or(DEFAULT_TEXT_WIDTH);
        self.surface.set_font(&style.font);
        self.surface.set_fill_color(&style.fill_color);
        self.surface.fill_text(text, x * s, y * s, max_width * s)
    }

    // --- Whole surface ---

    /// Clears the whole surface.
    pub fn wipe(&mut self) {
        let rect = self.full_rect();
        self.surface.clear_rect(rect);
    }

    /// Paints the whole surface with one color.
    pub fn cover(&mut self, color: Color) {
        let rect = self.full_rect();
        self.surface.set_fill_color(&color);
        self.surface.begin_path();
        self.surface.fill_rect(rect);
    }

    // --- Gradients ---

    pub fn linear_gradient(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Gradient<S::Gradient> {
        let s = self.resolution_scale;
        let handle = self
            .surface
            .create_linear_gradient(x1 * s, y1 * s, x2 * s, y2 * s);
        Gradient::new(GradientGeometry::Linear { x1, y1, x2, y2 }, handle)
    }

    /// Radial gradient between the circles `(x1, y1, r1)` and `(x2, y2, r2)`.
    pub fn radial_gradient(
        &mut self,
        x1: f64,
        y1: f64,
        r1: f64,
        x2: f64,
        y2: f64,
        r2: f64,
    ) -> Result<Gradient<S::Gradient>> {
        self.check_radius(r1)?;
        self.check_radius(r2)?;
        let s = self.resolution_scale;
        let handle = self
            .surface
            .create_radial_gradient(x1 * s, y1 * s, r1 * s, x2 * s, y2 * s, r2 * s)?;
        Ok(Gradient::new(
            GradientGeometry::Radial {
                x1,
                y1,
                r1,
                x2,
                y2,
                r2,
            },
            handle,
        ))
    }

    pub fn fill_gradient(&mut self, gradient: &Gradient<S::Gradient>, x: f64, y: f64, w: f64, h: f64) {
        self.surface.set_fill_gradient(gradient.handle());
        self.surface.begin_path();
        let rect = self.scaled_rect(x, y, w, h);
        self.surface.fill_rect(rect);
    }

    // --- Helpers ---

    fn apply_stroke(&mut self, style: &Style) {
        self.surface.set_stroke_color(&style.line_color);
        self.surface.set_line_width(style.line_width * self.resolution_scale);
    }

    fn scaled_rect(&self, x: f64, y: f64, w: f64, h: f64) -> Rect {
        let s = self.resolution_scale;
        Rect::new(x * s, y * s, w * s, h * s)
    }

    fn full_rect(&self) -> Rect {
        let size = self.size();
        Rect::new(0.0, 0.0, size.w_px as f64, size.h_px as f64)
    }

    fn check_radius(&mut self, radius: f64) -> Result<()> {
        if radius < 0.0 {
            log::warn!("rejected negative radius {radius}");
            self.surface.notify(NEGATIVE_RADIUS_MESSAGE);
            return Err(CoffeeError::NegativeRadius { radius });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::rendering::recording::{RecordingSurface, SurfaceCall, Transform};

    fn engine() -> Engine<RecordingSurface> {
        Engine::new(RecordingSurface::new(320, 240))
    }

    fn calls(engine: &mut Engine<RecordingSurface>) -> Vec<SurfaceCall> {
        engine.surface_mut().take_calls()
    }

    #[test]
    fn test_origin_follows_resize() {
        let mut engine = engine();
        assert_eq!(engine.origin(), Point { x: 160.0, y: 120.0 });
        engine.resize_window(100, 50);
        assert_eq!(engine.origin(), Point { x: 50.0, y: 25.0 });
        assert_eq!(engine.size(), SurfaceSize { w_px: 100, h_px: 50 });
    }

    #[test]
    fn test_boxes_are_owned_by_engine() {
        let mut engine = engine();
        let a = engine.register_box(0.0, 0.0, 10.0, 10.0);
        let b = engine.register_box(5.0, 5.0, 10.0, 10.0);
        let c = engine.register_box(10.0, 0.0, 10.0, 10.0);
        assert!(engine.check_box_box(a, b).unwrap());
        assert!(!engine.check_box_box(a, c).unwrap());
        assert_eq!(engine.boxes().len(), 3);
    }

    #[test]
    fn test_box_does_not_follow_object() {
        let mut engine = engine();
        let mut player = GameObject::new();
        player.go_to(0.0, 0.0);
        let player_box = engine.register_box(player.x, player.y, 16.0, 16.0);
        let wall = engine.register_box(100.0, 0.0, 16.0, 16.0);

        player.go_to(100.0, 0.0);
        assert!(!engine.check_box_box(player_box, wall).unwrap());
        assert_eq!(engine.boxes().get(player_box).unwrap().left, 0.0);
    }

    #[test]
    fn test_fill_rect_is_scaled() {
        let mut engine = engine();
        engine.set_resolution_scale(2.0);
        let style = Style::default().with_fill(Color::WHITE);
        engine.fill_rect(&style, 1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            calls(&mut engine),
            vec![
                SurfaceCall::FillColor(Color::WHITE),
                SurfaceCall::BeginPath,
                SurfaceCall::FillRect(Rect::new(2.0, 4.0, 6.0, 8.0)),
            ]
        );
    }

    #[test]
    fn test_rect_outline_scales_line_width() {
        let mut engine = engine();
        engine.set_resolution_scale(3.0);
        let style = Style::default().with_line(Color::WHITE, 2.0);
        engine.rect(&style, 1.0, 1.0, 2.0, 2.0);
        assert_eq!(
            calls(&mut engine),
            vec![
                SurfaceCall::StrokeColor(Color::WHITE),
                SurfaceCall::LineWidth(6.0),
                SurfaceCall::BeginPath,
                SurfaceCall::Rect(Rect::new(3.0, 3.0, 6.0, 6.0)),
                SurfaceCall::Stroke,
            ]
        );
    }

    #[test]
    fn test_circle_is_a_full_arc() {
        let mut engine = engine();
        engine.circle(&Style::default(), 10.0, 20.0, 5.0).unwrap();
        let calls = calls(&mut engine);
        assert!(calls.contains(&SurfaceCall::Arc {
            x: 10.0,
            y: 20.0,
            radius: 5.0,
            start: 0.0,
            end: TAU,
        }));
        assert_eq!(calls.last(), Some(&SurfaceCall::Stroke));
    }

    #[test]
    fn test_negative_radius_draws_nothing() {
        let mut engine = engine();
        let style = Style::default();
        let results = [
            engine.circle(&style, 0.0, 0.0, -1.0),
            engine.fill_circle(&style, 0.0, 0.0, -1.0),
            engine.arc(&style, 0.0, 0.0, -2.0, 0.0, 1.0),
            engine.fill_arc(&style, 0.0, 0.0, -2.0, 0.0, 1.0),
        ];
        for result in results {
            assert!(matches!(result, Err(CoffeeError::NegativeRadius { .. })));
        }
        let notice = SurfaceCall::Notify(NEGATIVE_RADIUS_MESSAGE.to_string());
        assert_eq!(calls(&mut engine), vec![notice; 4]);
    }

    #[test]
    fn test_zero_radius_is_allowed() {
        let mut engine = engine();
        assert!(engine.fill_circle(&Style::default(), 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_angled_line_zero_points_down() {
        let mut engine = engine();
        engine.angled_line(&Style::default(), 10.0, 10.0, 0.0, 5.0);
        let calls = calls(&mut engine);
        assert!(calls.contains(&SurfaceCall::MoveTo(10.0, 10.0)));
        assert!(calls.contains(&SurfaceCall::LineTo(10.0, 15.0)));
    }

    #[test]
    fn test_angled_line_quarter_turn() {
        let mut engine = engine();
        engine.angled_line(&Style::default(), 0.0, 0.0, FRAC_PI_2, 4.0);
        let end = calls(&mut engine).into_iter().find_map(|c| match c {
            SurfaceCall::LineTo(x, y) => Some((x, y)),
            _ => None,
        });
        let (x, y) = end.unwrap();
        assert!((x - 4.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn test_triangle_path_is_closed() {
        let mut engine = engine();
        engine.fill_triangle(&Style::default(), 0.0, 0.0, 4.0, 0.0, 2.0, 3.0);
        assert_eq!(
            calls(&mut engine),
            vec![
                SurfaceCall::BeginPath,
                SurfaceCall::MoveTo(0.0, 0.0),
                SurfaceCall::LineTo(4.0, 0.0),
                SurfaceCall::LineTo(2.0, 3.0),
                SurfaceCall::ClosePath,
                SurfaceCall::FillColor(Color::BLACK),
                SurfaceCall::Fill,
            ]
        );
    }

    #[test]
    fn test_pixel() {
        let mut engine = engine();
        engine.set_resolution_scale(4.0);
        engine.pixel(2.0, 3.0, Color::WHITE);
        assert!(calls(&mut engine).contains(&SurfaceCall::FillRect(Rect::new(8.0, 12.0, 4.0, 4.0))));
    }

    #[test]
    fn test_text_default_width_and_font() {
        let mut engine = engine();
        let style = Style::default().with_font("12px monospace");
        engine.fill_text(&style, "score", 5.0, 6.0, None).unwrap();
        engine.text(&style, "hi", 1.0, 2.0, Some(50.0)).unwrap();
        let calls = calls(&mut engine);
        assert_eq!(calls[0], SurfaceCall::Font("12px monospace".to_string()));
        assert!(calls.contains(&SurfaceCall::FillText {
            text: "score".to_string(),
            x: 5.0,
            y: 6.0,
            max_width: DEFAULT_TEXT_WIDTH,
        }));
        assert!(calls.contains(&SurfaceCall::StrokeText {
            text: "hi".to_string(),
            x: 1.0,
            y: 2.0,
            max_width: 50.0,
        }));
    }

    #[test]
    fn test_wipe_and_cover_use_full_surface() {
        let mut engine = engine();
        engine.set_resolution_scale(2.0);
        engine.wipe();
        engine.cover(Color::BLACK);
        assert_eq!(
            calls(&mut engine),
            vec![
                SurfaceCall::ClearRect(Rect::new(0.0, 0.0, 320.0, 240.0)),
                SurfaceCall::FillColor(Color::BLACK),
                SurfaceCall::BeginPath,
                SurfaceCall::FillRect(Rect::new(0.0, 0.0, 320.0, 240.0)),
            ]
        );
    }

    #[test]
    fn test_gradient_fill() {
        let mut engine = engine();
        let mut gradient = engine.linear_gradient(0.0, 0.0, 320.0, 0.0);
        gradient.color_stop(0.0, Color::BLACK).unwrap();
        gradient.color_stop(1.0, Color::WHITE).unwrap();
        engine.fill_gradient(&gradient, 0.0, 0.0, 320.0, 240.0);
        let id = gradient.handle().id;
        assert_eq!(
            calls(&mut engine),
            vec![
                SurfaceCall::LinearGradient {
                    id,
                    x1: 0.0,
                    y1: 0.0,
                    x2: 320.0,
                    y2: 0.0,
                },
                SurfaceCall::FillGradient(id),
                SurfaceCall::BeginPath,
                SurfaceCall::FillRect(Rect::new(0.0, 0.0, 320.0, 240.0)),
            ]
        );
    }

    #[test]
    fn test_radial_gradient_rejects_negative_radius() {
        let mut engine = engine();
        let result = engine.radial_gradient(0.0, 0.0, 5.0, 0.0, 0.0, -5.0);
        assert!(matches!(result, Err(CoffeeError::NegativeRadius { radius }) if radius == -5.0));
        assert_eq!(
            calls(&mut engine),
            vec![SurfaceCall::Notify(NEGATIVE_RADIUS_MESSAGE.to_string())]
        );
        let gradient = engine.radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, 5.0).unwrap();
        assert!(matches!(gradient.geometry(), GradientGeometry::Radial { r2, .. } if *r2 == 5.0));
    }

    #[test]
    fn test_sprite_draw_and_crop() {
        let mut engine = engine();
        let sprite = Sprite::with_size("sheet.png".to_string(), 16.0, 16.0);
        engine.draw_sprite(&sprite, 4.0, 8.0).unwrap();
        engine.crop_sprite(16.0, 0.0, 16.0, 16.0);
        engine.draw_sprite(&sprite, 4.0, 8.0).unwrap();
        engine.clear_crop();
        engine.draw_sprite(&sprite, 4.0, 8.0).unwrap();

        let sources: Vec<_> = calls(&mut engine)
            .into_iter()
            .filter_map(|c| match c {
                SurfaceCall::DrawImage { src, dest, .. } => Some((src, dest)),
                _ => None,
            })
            .collect();
        let dest = Rect::new(4.0, 8.0, 16.0, 16.0);
        assert_eq!(
            sources,
            vec![
                (None, dest),
                (Some(Rect::new(16.0, 0.0, 16.0, 16.0)), dest),
                (None, dest),
            ]
        );
    }

    #[test]
    fn test_partial_crop_is_ignored() {
        let mut engine = engine();
        engine.set_crop(Crop {
            x: Some(0.0),
            ..Crop::default()
        });
        let sprite = Sprite::with_size("a".to_string(), 2.0, 2.0);
        engine.draw_sprite(&sprite, 0.0, 0.0).unwrap();
        assert!(calls(&mut engine)
            .iter()
            .any(|c| matches!(c, SurfaceCall::DrawImage { src: None, .. })));
    }

    #[test]
    fn test_rotated_sprite_restores_frame() {
        let mut engine = engine();
        let sprite = Sprite::with_size("ship".to_string(), 20.0, 10.0);
        engine.draw_sprite_rotated(&sprite, 50.0, 50.0, 0.9).unwrap();
        assert!(engine.surface().transform().approx_eq(&Transform::IDENTITY, 1e-9));

        engine.draw_sprite_rotated(&sprite, 100.0, 20.0, 0.0).unwrap();
        let draws: Vec<_> = calls(&mut engine)
            .into_iter()
            .filter_map(|c| match c {
                SurfaceCall::DrawImage { dest, transform, .. } => Some((dest, transform)),
                _ => None,
            })
            .collect();
        assert_eq!(draws.len(), 2);

        // the second sprite's top-left corner lands exactly at (100, 20)
        let (dest, transform) = draws[1];
        let (x, y) = transform.apply(dest.x, dest.y);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotated_sprite_spins_around_center() {
        let mut engine = engine();
        let sprite = Sprite::with_size("ship".to_string(), 20.0, 10.0);
        engine.draw_sprite_rotated(&sprite, 0.0, 0.0, std::f64::consts::PI).unwrap();
        let (dest, transform) = calls(&mut engine)
            .into_iter()
            .find_map(|c| match c {
                SurfaceCall::DrawImage { dest, transform, .. } => Some((dest, transform)),
                _ => None,
            })
            .unwrap();
        // a half turn maps the local top-left corner onto the bottom-right
        let (x, y) = transform.apply(dest.x, dest.y);
        assert!((x - 20.0).abs() < 1e-9);
        assert!((y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_failed_rotation_undoes_translation() {
        let mut engine = engine();
        let sprite = Sprite::with_size("ship".to_string(), 20.0, 10.0);
        let result = engine.draw_sprite_rotated(&sprite, 50.0, 50.0, f64::NAN);
        assert!(matches!(result, Err(CoffeeError::Surface(_))));
        assert!(engine.surface().transform().approx_eq(&Transform::IDENTITY, 1e-9));
        assert_eq!(
            calls(&mut engine),
            vec![
                SurfaceCall::Translate(60.0, 55.0),
                SurfaceCall::Translate(-60.0, -55.0),
            ]
        );
    }

    #[test]
    fn test_rotate_window_persists() {
        let mut engine = engine();
        engine.rotate_window(FRAC_PI_2).unwrap();
        assert_eq!(calls(&mut engine), vec![SurfaceCall::Rotate(FRAC_PI_2)]);
        let (x, y) = engine.surface().transform().apply(1.0, 0.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_outline() {
        let mut engine = engine();
        engine.set_resolution_scale(2.0);
        let style = Style::default().with_line(Color::WHITE, 1.5);
        engine.triangle(&style, 0.0, 0.0, 4.0, 0.0, 2.0, 3.0);
        assert_eq!(
            calls(&mut engine),
            vec![
                SurfaceCall::BeginPath,
                SurfaceCall::MoveTo(0.0, 0.0),
                SurfaceCall::LineTo(8.0, 0.0),
                SurfaceCall::LineTo(4.0, 6.0),
                SurfaceCall::ClosePath,
                SurfaceCall::StrokeColor(Color::WHITE),
                SurfaceCall::LineWidth(3.0),
                SurfaceCall::Stroke,
            ]
        );
    }

    #[test]
    fn test_arcs_keep_their_angles() {
        let mut engine = engine();
        engine.set_resolution_scale(2.0);
        let style = Style::default();
        engine.arc(&style, 10.0, 5.0, 3.0, 0.5, 2.0).unwrap();
        engine.fill_arc(&style, 1.0, 2.0, 4.0, FRAC_PI_2, TAU).unwrap();
        let calls = calls(&mut engine);
        let arcs: Vec<_> = calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Arc { .. }))
            .cloned()
            .collect();
        assert_eq!(
            arcs,
            vec![
                SurfaceCall::Arc {
                    x: 20.0,
                    y: 10.0,
                    radius: 6.0,
                    start: 0.5,
                    end: 2.0,
                },
                SurfaceCall::Arc {
                    x: 2.0,
                    y: 4.0,
                    radius: 8.0,
                    start: FRAC_PI_2,
                    end: TAU,
                },
            ]
        );
        assert_eq!(calls.last(), Some(&SurfaceCall::Fill));
        assert!(calls.contains(&SurfaceCall::Stroke));
    }

    #[test]
    fn test_linear_gradient_endpoints_are_scaled() {
        let mut engine = engine();
        engine.set_resolution_scale(2.0);
        let gradient = engine.linear_gradient(1.0, 2.0, 30.0, 40.0);
        let endpoints = calls(&mut engine).into_iter().find_map(|c| match c {
            SurfaceCall::LinearGradient { x1, y1, x2, y2, .. } => Some((x1, y1, x2, y2)),
            _ => None,
        });
        assert_eq!(endpoints, Some((2.0, 4.0, 60.0, 80.0)));
        assert!(matches!(
            gradient.geometry(),
            GradientGeometry::Linear { x2, .. } if *x2 == 30.0
        ));
    }

    #[test]
    fn test_draw_object() {
        let mut engine = engine();
        let mut sprites = Sprites::new();
        let id = sprites.insert(Sprite::with_size("enemy".to_string(), 8.0, 8.0));
        let mut enemy = GameObject::new();
        assert!(matches!(
            engine.draw_object(&enemy, &sprites),
            Err(CoffeeError::MissingSprite)
        ));

        enemy.set_sprite(id);
        enemy.go_to(30.0, 40.0);
        enemy.rotate_to(0.5);
        engine.draw_object(&enemy, &sprites).unwrap();
        let calls = calls(&mut engine);
        assert_eq!(calls[0], SurfaceCall::Translate(34.0, 44.0));
        assert_eq!(calls[1], SurfaceCall::Rotate(0.5));
        assert!(engine.surface().transform().approx_eq(&Transform::IDENTITY, 1e-9));
    }

    #[test]
    fn test_from_config_sets_scale() {
        let config = EngineConfig {
            resolution_scale: 2.5,
            ..EngineConfig::default()
        };
        let engine = Engine::from_config(RecordingSurface::new(1, 1), &config);
        assert_eq!(engine.resolution_scale(), 2.5);
    }
}
