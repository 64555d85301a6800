// crates/flow-layout/src/observer.rs
use crate::measure::ItemMetrics;
use flow_core::Rect;
use glam::Vec2;
use tracing::{debug, trace};

/// Hooks a caller can inject to watch a layout pass. All methods default to no-ops.
pub trait FlowObserver {
    fn item_measured(&mut self, _index: usize, _metrics: &ItemMetrics) {}

    fn size_resolved(&mut self, _size: Vec2, _band_count: usize) {}

    /// Item `index` opened band `band` (zero-based).
    fn band_wrapped(&mut self, _index: usize, _band: usize) {}

    fn item_placed(&mut self, _index: usize, _rect: &Rect) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FlowObserver for NoopObserver {}

/// Forwards pass events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FlowObserver for TracingObserver {
    fn item_measured(&mut self, index: usize, metrics: &ItemMetrics) {
        trace!(index, size = ?metrics.size, occupied = ?metrics.occupied(), "measured item");
    }

    fn size_resolved(&mut self, size: Vec2, band_count: usize) {
        debug!(?size, band_count, "resolved container size");
    }

    fn band_wrapped(&mut self, index: usize, band: usize) {
        debug!(index, band, "wrapped to new band");
    }

    fn item_placed(&mut self, index: usize, rect: &Rect) {
        trace!(index, position = ?rect.position, size = ?rect.size, "placed item");
    }
}

/// Records every event, for tests and debugging tools.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingObserver {
    pub measured: Vec<usize>,
    pub wraps: Vec<(usize, usize)>,
    pub placed: Vec<(usize, Rect)>,
    pub resolved: Option<(Vec2, usize)>,
}

impl FlowObserver for RecordingObserver {
    fn item_measured(&mut self, index: usize, _metrics: &ItemMetrics) {
        self.measured.push(index);
    }

    fn size_resolved(&mut self, size: Vec2, band_count: usize) {
        self.resolved = Some((size, band_count));
    }

    fn band_wrapped(&mut self, index: usize, band: usize) {
        self.wraps.push((index, band));
    }

    fn item_placed(&mut self, index: usize, rect: &Rect) {
        self.placed.push((index, *rect));
    }
}
