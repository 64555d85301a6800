// crates/flow-core/src/config.rs
use crate::{Axis, FlowError, Result};
use serde::{Deserialize, Serialize};

/// Direction items flow in before wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Left to right, wrapping into rows.
    #[default]
    Horizontal,
    /// Top to bottom, wrapping into columns.
    Vertical,
}

impl Orientation {
    /// Axis items advance along within a band.
    pub fn main_axis(self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::Horizontal,
            Orientation::Vertical => Axis::Vertical,
        }
    }

    /// Axis bands stack along.
    pub fn cross_axis(self) -> Axis {
        self.main_axis().cross()
    }
}

impl TryFrom<u8> for Orientation {
    type Error = FlowError;

    /// Decodes the attribute form: 0 = horizontal, 1 = vertical.
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Orientation::Horizontal),
            1 => Ok(Orientation::Vertical),
            other => Err(FlowError::InvalidOrientation(other)),
        }
    }
}

/// When an item that overflows the current band moves to a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapPolicy {
    /// Wrap only if the current band already holds an item. An oversized
    /// item on an empty band stays there.
    #[default]
    SkipEmptyBand,
    /// Wrap whenever the item overflows, even from an empty band.
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub orientation: Orientation,
    /// Gap between items in a row, and between columns.
    pub line_spacing_horizontal: f32,
    /// Gap between items in a column, and between rows.
    pub line_spacing_vertical: f32,
    pub wrap_policy: WrapPolicy,
    /// Mirror the main axis: right-to-left rows or bottom-to-top columns.
    pub reverse: bool,
    /// Add right/bottom padding to a cross-axis extent derived from content.
    /// A free main axis always includes it, since wraps are tested against it.
    pub include_trailing_padding: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            line_spacing_horizontal: 0.0,
            line_spacing_vertical: 0.0,
            wrap_policy: WrapPolicy::SkipEmptyBand,
            reverse: false,
            include_trailing_padding: false,
        }
    }
}

impl FlowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_spacing(mut self, horizontal: f32, vertical: f32) -> Self {
        self.line_spacing_horizontal = horizontal;
        self.line_spacing_vertical = vertical;
        self
    }

    pub fn with_wrap_policy(mut self, wrap_policy: WrapPolicy) -> Self {
        self.wrap_policy = wrap_policy;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_trailing_padding(mut self, include: bool) -> Self {
        self.include_trailing_padding = include;
        self
    }

    pub fn spacing(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.line_spacing_horizontal,
            Axis::Vertical => self.line_spacing_vertical,
        }
    }

    /// Rejects spacing values a layout pass cannot use.
    pub fn validate(&self) -> Result<()> {
        validate_spacing(Axis::Horizontal, self.line_spacing_horizontal)?;
        validate_spacing(Axis::Vertical, self.line_spacing_vertical)
    }
}

/// Spacing must be finite and non-negative.
pub fn validate_spacing(axis: Axis, value: f32) -> Result<()> {
    if !value.is_finite() {
        let field = match axis {
            Axis::Horizontal => "line_spacing_horizontal",
            Axis::Vertical => "line_spacing_vertical",
        };
        return Err(FlowError::NonFiniteValue { field, value });
    }
    if value < 0.0 {
        return Err(FlowError::NegativeSpacing { axis, value });
    }
    Ok(())
}
