//! Coffee: a small 2D drawing and game helper for the browser canvas.
//!
//! An [`Engine`] wraps a [`Surface`] and draws lines, shapes, text,
//! gradients and sprites on it. [`GameObject`]s place sprites in the scene,
//! [`InputState`] tracks keys and the pointer, and the engine's collision
//! registry answers box-overlap queries.

use wasm_bindgen::prelude::*;

pub mod collision;
pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod math;
pub mod rendering;
pub mod resources;
pub mod scene;
pub mod util;

pub use collision::{BoxHandle, BoxRegistry, CollisionBox};
pub use config::EngineConfig;
pub use engine::{Crop, Engine, Style};
pub use error::{CoffeeError, Result};
pub use input::{InputState, Point};
pub use rendering::Surface;
pub use resources::{Gradient, Sound, Sprite, SpriteId, Sprites};
pub use scene::GameObject;
pub use util::Color;

#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    let _ = logging::init(log::LevelFilter::Debug);
}
