//! Rectangle exercise: a plain value with a derived area.

use serde::{Deserialize, Serialize};

/// A rectangle defined by its width and height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The product of width and height.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
