//! Axis-aligned collision boxes
//!
//! Boxes are static colliders: their edges are computed once at
//! registration and never follow the object they were made for.

use crate::error::{CoffeeError, Result};

/// Index of a box in the registry that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoxHandle(usize);

impl BoxHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl CollisionBox {
    pub fn from_rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            left: x,
            top: y,
            right: x + w,
            bottom: y + h,
        }
    }

    /// Strict overlap on both axes. Boxes that only share an edge do not
    /// overlap, and neither do boxes with zero width or height.
    pub fn overlaps(&self, other: &CollisionBox) -> bool {
        let horizontal = self.left < other.right && self.right > other.left;
        let vertical = self.top < other.bottom && self.bottom > other.top;
        horizontal && vertical
    }
}

#[derive(Default, Debug)]
pub struct BoxRegistry {
    boxes: Vec<CollisionBox>,
}

impl BoxRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `(x, y, x + w, y + h)`. Sizes are not validated.
    pub fn register(&mut self, x: f64, y: f64, w: f64, h: f64) -> BoxHandle {
        self.boxes.push(CollisionBox::from_rect(x, y, w, h));
        BoxHandle(self.boxes.len() - 1)
    }

    pub fn get(&self, handle: BoxHandle) -> Option<&CollisionBox> {
        self.boxes.get(handle.0)
    }

    pub fn overlaps(&self, a: BoxHandle, b: BoxHandle) -> Result<bool> {
        let lookup = |h: BoxHandle| self.get(h).ok_or(CoffeeError::UnknownBox { index: h.0 });
        Ok(lookup(a)?.overlaps(lookup(b)?))
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BoxHandle, &CollisionBox)> {
        self.boxes.iter().enumerate().map(|(i, b)| (BoxHandle(i), b))
    }
}
