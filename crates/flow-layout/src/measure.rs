// crates/flow-layout/src/measure.rs
//! Size scan: per-item occupied sizes and the largest occupied extent on each axis.

use crate::FlowObserver;
use flow_core::{Axis, ContainerConstraints, Edges, Item};
use glam::Vec2;

/// Anything that can report an intrinsic size and margins to the arranger.
pub trait Measurable {
    fn intrinsic_size(&self) -> Vec2;

    fn margin(&self) -> Edges {
        Edges::ZERO
    }
}

impl Measurable for Item {
    fn intrinsic_size(&self) -> Vec2 {
        self.size()
    }

    fn margin(&self) -> Edges {
        self.margin
    }
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn intrinsic_size(&self) -> Vec2 {
        (**self).intrinsic_size()
    }

    fn margin(&self) -> Edges {
        (**self).margin()
    }
}

/// Snapshot of one item's measurements for a single pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
    pub size: Vec2,
    pub margin: Edges,
}

impl ItemMetrics {
    pub fn of<M: Measurable + ?Sized>(item: &M) -> Self {
        Self {
            size: item.intrinsic_size(),
            margin: item.margin(),
        }
    }

    /// Intrinsic size plus margins.
    pub fn occupied(&self) -> Vec2 {
        self.size + self.margin.size()
    }
}

/// Largest occupied width and height over all items of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemExtents {
    pub max_item_width: f32,
    pub max_item_height: f32,
}

impl ItemExtents {
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.max_item_width,
            Axis::Vertical => self.max_item_height,
        }
    }

    pub fn include(&mut self, occupied: Vec2) {
        self.max_item_width = self.max_item_width.max(occupied.x);
        self.max_item_height = self.max_item_height.max(occupied.y);
    }

    /// Caps the extent on `axis` so no item reports more than the container itself.
    pub fn clamp_to(&mut self, axis: Axis, limit: f32) {
        match axis {
            Axis::Horizontal => self.max_item_width = self.max_item_width.min(limit),
            Axis::Vertical => self.max_item_height = self.max_item_height.min(limit),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SizeScan {
    pub metrics: Vec<ItemMetrics>,
    pub extents: ItemExtents,
}

/// Measures every item in order. Extents on axes the container fixes are clamped to that size.
pub fn scan<M: Measurable>(
    items: &[M],
    constraints: &ContainerConstraints,
    observer: &mut dyn FlowObserver,
) -> SizeScan {
    let mut extents = ItemExtents::default();
    let mut metrics = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let measured = ItemMetrics::of(item);
        extents.include(measured.occupied());
        observer.item_measured(index, &measured);
        metrics.push(measured);
    }

    for axis in [Axis::Horizontal, Axis::Vertical] {
        if let Some(size) = constraints.mode(axis).exact_size() {
            extents.clamp_to(axis, size);
        }
    }

    SizeScan { metrics, extents }
}
