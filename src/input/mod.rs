//! Keyboard and pointer state
//!
//! The host owns an [`InputState`] and feeds it key and pointer
//! notifications; game code polls it once per tick. Only the latest state
//! is kept, so a press and release between two polls leaves no trace.

use std::collections::HashMap;

pub mod web;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
    pointer: Option<Point>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `key` is a DOM key name such as `"w"` or `"ArrowUp"`.
    pub fn key_down(&mut self, key: &str) {
        self.set_key(key, true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.set_key(key, false);
    }

    fn set_key(&mut self, key: &str, pressed: bool) {
        match self.keys.get_mut(key) {
            Some(state) => *state = pressed,
            None => {
                self.keys.insert(key.to_string(), pressed);
            }
        }
    }

    /// Keys never seen read as released.
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    pub fn any_pressed(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_pressed(k))
    }

    pub fn pointer_moved(&mut self, position: Point) {
        self.pointer = Some(position);
    }

    /// Last reported pointer position, if the pointer has moved at all.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }
}
