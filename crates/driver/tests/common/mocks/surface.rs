//! Recording drawing surface.

use pinsim_core::replay::{Rect, Surface};

/// Surface that records every `fill_rect` call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// `(rect, color)` per fill, in order.
    pub fills: Vec<(Rect, String)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colors painted, in order.
    pub fn colors(&self) -> Vec<&str> {
        self.fills.iter().map(|(_, color)| color.as_str()).collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.fills.push((rect, color.to_owned()));
    }
}
