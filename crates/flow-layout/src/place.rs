// crates/flow-layout/src/place.rs
//! Placement walker: the wrap-and-place pass that emits one rectangle per item.

use crate::band::BandCursor;
use crate::measure::ItemMetrics;
use crate::resolve::Resolution;
use crate::FlowObserver;
use flow_core::{Edges, FlowConfig, Orientation, Rect};
use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub rects: Vec<Rect>,
    pub band_count: usize,
}

pub fn place(
    config: &FlowConfig,
    metrics: &[ItemMetrics],
    resolution: &Resolution,
    padding: Edges,
    observer: &mut dyn FlowObserver,
) -> Placement {
    let main = config.orientation.main_axis();
    let cross = main.cross();
    // Cross-axis thickness of every band.
    let band = resolution.extents.along(cross);
    let band_stride = band + config.spacing(cross);

    let mut cursor = BandCursor::new(
        padding.leading(main),
        resolution.main_limit,
        padding.trailing(main),
        config.spacing(main),
        config.wrap_policy,
    );
    let mut band_start = padding.leading(cross);
    let mut band_index = 0;
    let mut rects = Vec::with_capacity(metrics.len());

    for (index, measured) in metrics.iter().enumerate() {
        let extent = main.of(measured.occupied());
        if cursor.should_wrap(extent) {
            cursor.wrap();
            band_start += band_stride;
            band_index += 1;
            observer.band_wrapped(index, band_index);
        }
        let item_start = cursor.advance(extent);

        let position = match config.orientation {
            // Rows are bottom-aligned within the band.
            Orientation::Horizontal => Vec2::new(
                item_start + measured.margin.left,
                band_start + band - measured.size.y - measured.margin.bottom,
            ),
            Orientation::Vertical => Vec2::new(
                band_start + measured.margin.left,
                item_start + measured.margin.top,
            ),
        };

        let mut rect = Rect::from_position_size(position, measured.size);
        if config.reverse {
            rect = mirror(rect, config.orientation, resolution.size);
        }
        observer.item_placed(index, &rect);
        rects.push(rect);
    }

    Placement {
        rects,
        band_count: if metrics.is_empty() { 0 } else { band_index + 1 },
    }
}

/// Reflects `rect` across the middle of the container's main axis.
fn mirror(rect: Rect, orientation: Orientation, container: Vec2) -> Rect {
    let mut position = rect.position;
    match orientation {
        Orientation::Horizontal => position.x = container.x - rect.right(),
        Orientation::Vertical => position.y = container.y - rect.bottom(),
    }
    Rect::from_position_size(position, rect.size)
}
