use serde::Deserialize;

use crate::engine::Style;
use crate::error::Result;

/// Startup settings for the engine and its window. Every field has a
/// default, so `{}` is a complete configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub canvas_id: String,
    pub width: u32,
    pub height: u32,
    /// CSS border of the canvas element
    pub border: String,
    /// Multiplier applied to every coordinate and size handed to the surface
    pub resolution_scale: f64,
    /// Period of the demo tick in milliseconds
    pub tick_interval_ms: u32,
    pub log_level: log::LevelFilter,
    pub style: Style,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            canvas_id: "coffee_window".to_string(),
            width: 320,
            height: 240,
            border: "1px solid white".to_string(),
            resolution_scale: 1.0,
            tick_interval_ms: 10,
            log_level: log::LevelFilter::Debug,
            style: Style::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
