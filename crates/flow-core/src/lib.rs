// crates/flow-core/src/lib.rs
pub mod geometry;
pub mod item;
pub mod constraints;
pub mod config;
pub mod scene;

pub use geometry::*;
pub use item::*;
pub use constraints::*;
pub use config::*;
pub use scene::*;

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Invalid orientation: {0} (expected 0 = horizontal or 1 = vertical)")]
    InvalidOrientation(u8),

    #[error("Negative {axis} line spacing: {value}")]
    NegativeSpacing { axis: Axis, value: f32 },

    #[error("Non-finite value for {field}: {value}")]
    NonFiniteValue { field: &'static str, value: f32 },

    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FlowError>;
