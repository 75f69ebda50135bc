//! Error types for drawing, resources and the collision registry

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum CoffeeError {
    /// A circle, arc or radial gradient was given a negative radius
    #[error("Circle radius cannot be negative (got {radius})")]
    NegativeRadius { radius: f64 },

    /// Gradient color stops live in `0..=1`
    #[error("Color stop ratio {ratio} is outside 0..=1")]
    InvalidColorStop { ratio: f64 },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// No box was registered under this index
    #[error("No collision box with index {index}")]
    UnknownBox { index: usize },

    /// The object has no sprite, or its sprite id is stale
    #[error("Object has no sprite to draw")]
    MissingSprite,

    /// A call into the presentation surface or the DOM failed
    #[error("Surface call failed: {0}")]
    Surface(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for CoffeeError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        CoffeeError::Surface(message)
    }
}

pub type Result<T> = std::result::Result<T, CoffeeError>;
