//! Sample game: a square steered with WASD or the arrow keys, plus a
//! marker that follows the mouse.

use std::{cell::RefCell, rc::Rc};

use anyhow::Context;
use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::engine::{Engine, Style};
use crate::input::{self, InputState, Point};
use crate::logging;
use crate::rendering::{Surface, canvas};
use crate::util::Color;

const PLAYER_SIZE: f64 = 16.0;
const CURSOR_SIZE: f64 = 8.0;

const UP: [&str; 2] = ["w", "ArrowUp"];
const DOWN: [&str; 2] = ["s", "ArrowDown"];
const LEFT: [&str; 2] = ["a", "ArrowLeft"];
const RIGHT: [&str; 2] = ["d", "ArrowRight"];

pub struct Player {
    pub pos: Point,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Point { x: 50.0, y: 50.0 },
        }
    }
}

impl Player {
    /// Moves one unit per tick along each held direction.
    pub fn step(&mut self, input: &InputState) {
        if input.any_pressed(&UP) {
            self.pos.y -= 1.0;
        }
        if input.any_pressed(&DOWN) {
            self.pos.y += 1.0;
        }
        if input.any_pressed(&LEFT) {
            self.pos.x -= 1.0;
        }
        if input.any_pressed(&RIGHT) {
            self.pos.x += 1.0;
        }
    }
}

pub struct Demo<S: Surface> {
    engine: Engine<S>,
    player: Player,
    style: Style,
}

impl<S: Surface> Demo<S> {
    pub fn new(engine: Engine<S>, style: Style) -> Self {
        Self {
            engine,
            player: Player::default(),
            style: style.with_fill(Color::WHITE),
        }
    }

    /// Draws the current frame, then applies input for the next one.
    pub fn tick(&mut self, input: &InputState) {
        self.engine.cover(Color::BLACK);
        let Point { x, y } = self.player.pos;
        self.engine
            .fill_rect(&self.style, x, y, PLAYER_SIZE, PLAYER_SIZE);
        if let Some(cursor) = input.pointer() {
            // the pointer is in surface pixels, drawing is in scaled units
            let scale = self.engine.resolution_scale();
            let half = CURSOR_SIZE / 2.0;
            self.engine.fill_rect(
                &self.style,
                cursor.x / scale - half,
                cursor.y / scale - half,
                CURSOR_SIZE,
                CURSOR_SIZE,
            );
        }
        self.player.step(input);
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn engine(&self) -> &Engine<S> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine<S> {
        &mut self.engine
    }
}

/// Starts the sample game in the current page. `config_json` is an optional
/// [`EngineConfig`] as JSON.
#[wasm_bindgen]
pub fn start_demo(config_json: Option<String>) -> Result<(), JsValue> {
    run(config_json.as_deref()).map_err(|e| {
        log::error!("demo failed to start: {e:#}");
        JsValue::from_str(&format!("{e:#}"))
    })
}

fn run(config_json: Option<&str>) -> anyhow::Result<()> {
    let config = match config_json {
        Some(json) => EngineConfig::from_json(json).context("parsing demo configuration")?,
        None => EngineConfig::default(),
    };
    logging::set_level(config.log_level);

    let surface = canvas::create_window(&config).context("creating window")?;
    canvas::display_window(&surface).context("displaying window")?;

    let state = Rc::new(RefCell::new(InputState::new()));
    input::web::bind(&state, &surface).context("attaching input listeners")?;

    let engine = Engine::from_config(surface, &config);
    let mut demo = Demo::new(engine, config.style.clone());

    log::info!("starting demo, ticking every {}ms", config.tick_interval_ms);
    Interval::new(config.tick_interval_ms, move || {
        demo.tick(&state.borrow());
    })
    .forget();
    Ok(())
}
