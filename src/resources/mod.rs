//! Sprites, gradients and sounds
//!
//! These wrap opaque handles produced elsewhere: images and audio come from
//! a [`ResourceLoader`], gradients from the [`Surface`](crate::rendering::Surface).

use crate::error::{CoffeeError, Result};
use crate::rendering::GradientHandle;
use crate::util::Color;

pub mod dom;

pub const DEFAULT_SPRITE_SIZE: f64 = 128.0;

/// An image plus the size it is drawn at. The size is independent of the
/// image's native resolution.
#[derive(Clone, Debug)]
pub struct Sprite<I> {
    pub image: I,
    pub width: f64,
    pub height: f64,
}

impl<I> Sprite<I> {
    pub fn new(image: I) -> Self {
        Self::with_size(image, DEFAULT_SPRITE_SIZE, DEFAULT_SPRITE_SIZE)
    }

    pub fn with_size(image: I, width: f64, height: f64) -> Self {
        Self {
            image,
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteId(usize);

/// Owns sprites; objects refer to them by [`SpriteId`].
#[derive(Debug)]
pub struct Sprites<I> {
    sprites: Vec<Sprite<I>>,
}

impl<I> Default for Sprites<I> {
    fn default() -> Self {
        Self {
            sprites: Vec::new(),
        }
    }
}

impl<I> Sprites<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sprite: Sprite<I>) -> SpriteId {
        self.sprites.push(sprite);
        SpriteId(self.sprites.len() - 1)
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite<I>> {
        self.sprites.get(id.0)
    }

    pub fn get_mut(&mut self, id: SpriteId) -> Option<&mut Sprite<I>> {
        self.sprites.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientGeometry {
    Linear {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Radial {
        x1: f64,
        y1: f64,
        r1: f64,
        x2: f64,
        y2: f64,
        r2: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub ratio: f64,
    pub color: Color,
}

/// A gradient fill. Create one with
/// [`Engine::linear_gradient`](crate::engine::Engine::linear_gradient) or
/// [`Engine::radial_gradient`](crate::engine::Engine::radial_gradient).
#[derive(Clone, Debug)]
pub struct Gradient<G> {
    geometry: GradientGeometry,
    stops: Vec<ColorStop>,
    handle: G,
}

impl<G: GradientHandle> Gradient<G> {
    pub(crate) fn new(geometry: GradientGeometry, handle: G) -> Self {
        Self {
            geometry,
            stops: Vec::new(),
            handle,
        }
    }

    /// Adds a color stop at `ratio` (0 is the start, 1 the end).
    pub fn color_stop(&mut self, ratio: f64, color: Color) -> Result<()> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(CoffeeError::InvalidColorStop { ratio });
        }
        self.handle.add_color_stop(ratio, &color)?;
        self.stops.push(ColorStop { ratio, color });
        Ok(())
    }

    pub fn geometry(&self) -> &GradientGeometry {
        &self.geometry
    }

    /// Stops in the order they were added.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn handle(&self) -> &G {
        &self.handle
    }
}

/// Playback controls of a loaded audio clip.
pub trait AudioHandle {
    fn play(&self) -> Result<()>;
    fn pause(&self) -> Result<()>;
}

pub struct Sound<A> {
    handle: A,
}

impl<A: AudioHandle> Sound<A> {
    pub fn new(handle: A) -> Self {
        Self { handle }
    }

    pub fn play(&self) -> Result<()> {
        self.handle.play()
    }

    pub fn stop(&self) -> Result<()> {
        self.handle.pause()
    }
}

/// Turns a source locator into image and audio handles.
pub trait ResourceLoader {
    type Image;
    type Audio: AudioHandle;

    fn load_image(&mut self, src: &str) -> Result<Self::Image>;
    fn load_audio(&mut self, src: &str) -> Result<Self::Audio>;

    fn load_sprite(&mut self, src: &str, width: f64, height: f64) -> Result<Sprite<Self::Image>> {
        Ok(Sprite::with_size(self.load_image(src)?, width, height))
    }

    fn load_sound(&mut self, src: &str) -> Result<Sound<Self::Audio>> {
        Ok(Sound::new(self.load_audio(src)?))
    }
}
