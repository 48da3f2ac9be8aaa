//! Progress bar geometry and drag state

use serde::{Deserialize, Serialize};

/// Horizontal extent of the progress bar in pointer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub left: f64,
    pub width: f64,
}

impl BarGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Fraction of the bar under `pointer_x`, clamped to `[0, 1]`
    pub fn fraction_at(&self, pointer_x: f64) -> f64 {
        if !self.width.is_finite() || self.width <= 0.0 || !pointer_x.is_finite() {
            return 0.0;
        }

        ((pointer_x - self.left) / self.width).clamp(0.0, 1.0)
    }
}

/// Whether the user is dragging along the progress bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeekDrag {
    dragging: bool,
}

impl SeekDrag {
    pub fn press(&mut self) {
        self.dragging = true;
    }

    /// A move only seeks while the drag is live and the primary button is down
    pub fn should_seek_on_move(&self, primary_held: bool) -> bool {
        self.dragging && primary_held
    }

    /// End the drag; returns whether one was in progress
    pub fn release(&mut self) -> bool {
        std::mem::take(&mut self.dragging)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}
