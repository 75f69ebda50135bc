use crate::error::{CoffeeError, Result};
use crate::resources::{SpriteId, Sprites};

/// A positioned, rotatable thing in the game: a player, a crate, an enemy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameObject {
    pub x: f64,
    pub y: f64,
    /// Radians
    pub rotation: f64,
    pub sprite: Option<SpriteId>,
}

impl GameObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sprite(&mut self, sprite: SpriteId) {
        self.sprite = Some(sprite);
    }

    pub fn go_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn rotate_to(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    /// Resizes the sprite this object points at. Every object sharing that
    /// sprite changes size with it.
    pub fn scale_to<I>(&self, sprites: &mut Sprites<I>, w: f64, h: f64) -> Result<()> {
        let sprite = self
            .sprite
            .and_then(|id| sprites.get_mut(id))
            .ok_or(CoffeeError::MissingSprite)?;
        sprite.resize(w, h);
        Ok(())
    }
}
