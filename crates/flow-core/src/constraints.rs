// crates/flow-core/src/constraints.rs
use crate::{Axis, Edges};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How the container's extent on one axis is decided.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureMode {
    /// The caller fixes the extent.
    Exact(f32),
    /// The extent wraps the content.
    Unspecified,
    /// The extent wraps the content but never exceeds the limit.
    AtMost(f32),
}

impl Default for MeasureMode {
    fn default() -> Self {
        MeasureMode::Unspecified
    }
}

impl MeasureMode {
    pub fn is_exact(&self) -> bool {
        matches!(self, MeasureMode::Exact(_))
    }

    pub fn exact_size(&self) -> Option<f32> {
        match self {
            MeasureMode::Exact(size) => Some(*size),
            _ => None,
        }
    }

    /// Resolves a content-derived extent against this mode.
    pub fn resolve(&self, content: f32) -> f32 {
        match self {
            MeasureMode::Exact(size) => *size,
            MeasureMode::Unspecified => content,
            MeasureMode::AtMost(limit) => content.min(*limit),
        }
    }
}

/// Per-axis sizing modes plus container padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConstraints {
    pub width: MeasureMode,
    pub height: MeasureMode,
    pub padding: Edges,
}

impl ContainerConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fixed_size(width: f32, height: f32) -> Self {
        Self {
            width: MeasureMode::Exact(width),
            height: MeasureMode::Exact(height),
            padding: Edges::ZERO,
        }
    }

    pub fn with_width(mut self, width: MeasureMode) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: MeasureMode) -> Self {
        self.height = height;
        self
    }

    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn mode(&self, axis: Axis) -> MeasureMode {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Both extents as a size, if both are fixed.
    pub fn fixed_size(&self) -> Option<Vec2> {
        Some(Vec2::new(self.width.exact_size()?, self.height.exact_size()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_mode_resolution() {
        assert_eq!(MeasureMode::Exact(100.0).resolve(250.0), 100.0);
        assert_eq!(MeasureMode::Unspecified.resolve(250.0), 250.0);
        assert_eq!(MeasureMode::AtMost(200.0).resolve(250.0), 200.0);
        assert_eq!(MeasureMode::AtMost(300.0).resolve(250.0), 250.0);
    }

    #[test]
    fn test_fixed_size_requires_both_axes() {
        let fixed = ContainerConstraints::with_fixed_size(120.0, 80.0);
        assert_eq!(fixed.fixed_size(), Some(Vec2::new(120.0, 80.0)));

        let free_height = fixed.with_height(MeasureMode::Unspecified);
        assert_eq!(free_height.fixed_size(), None);
        assert_eq!(free_height.mode(Axis::Horizontal), MeasureMode::Exact(120.0));
    }

    #[test]
    fn test_constraints_parse_from_json() {
        let json = r#"{
            "width": {"exact": 320},
            "height": "unspecified",
            "padding": {"left": 4, "top": 8}
        }"#;
        let constraints: ContainerConstraints = serde_json::from_str(json).unwrap();
        assert_eq!(constraints.width, MeasureMode::Exact(320.0));
        assert_eq!(constraints.height, MeasureMode::Unspecified);
        assert_eq!(constraints.padding, Edges::new(4.0, 8.0, 0.0, 0.0));
    }
}
