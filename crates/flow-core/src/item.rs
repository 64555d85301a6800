// crates/flow-core/src/item.rs
use crate::{Axis, Edges};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A rectangular item to be arranged: intrinsic size plus margins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub margin: Edges,
}

impl Item {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            margin: Edges::ZERO,
        }
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Intrinsic size plus margins.
    pub fn occupied_size(&self) -> Vec2 {
        self.size() + self.margin.size()
    }

    pub fn occupied(&self, axis: Axis) -> f32 {
        axis.of(self.occupied_size())
    }
}
