// crates/flow-layout/src/resolve.rs
//! Dimension resolver: derives the container size on any axis the caller left free
//! by dry-running the wrap walk over sizes only.

use crate::band::BandCursor;
use crate::measure::{ItemExtents, ItemMetrics};
use flow_core::{ContainerConstraints, Edges, FlowConfig, MeasureMode};
use glam::Vec2;

/// Container size and wrap bound for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub size: Vec2,
    /// Extents clamped to the resolved container size.
    pub extents: ItemExtents,
    /// Main-axis container extent wraps are tested against, `None` when the main
    /// axis grows with the content.
    pub main_limit: Option<f32>,
    pub band_count: usize,
}

pub fn resolve_size(
    config: &FlowConfig,
    metrics: &[ItemMetrics],
    extents: ItemExtents,
    constraints: &ContainerConstraints,
) -> Resolution {
    let main = config.orientation.main_axis();
    let cross = main.cross();
    let padding = constraints.padding;
    let mut extents = extents;

    let (main_extent, bounded) = match constraints.mode(main) {
        MeasureMode::Exact(size) => (size, true),
        MeasureMode::Unspecified => (single_band_extent(config, metrics, padding), false),
        MeasureMode::AtMost(limit) => {
            let natural = single_band_extent(config, metrics, padding);
            if natural > limit {
                (limit, true)
            } else {
                (natural, false)
            }
        }
    };
    if bounded {
        extents.clamp_to(main, main_extent);
    }
    let main_limit = bounded.then_some(main_extent);

    let band = extents.along(cross);
    let (band_count, extra_bands) = dry_run(config, metrics, padding, main_limit, band);

    let cross_extent = match constraints.mode(cross) {
        MeasureMode::Exact(size) => size,
        mode => {
            let content = if band_count == 0 { 0.0 } else { band + extra_bands };
            let mut natural = padding.leading(cross) + content;
            if config.include_trailing_padding {
                natural += padding.trailing(cross);
            }
            let resolved = mode.resolve(natural);
            if resolved < natural {
                extents.clamp_to(cross, resolved);
            }
            resolved
        }
    };

    Resolution {
        size: main.pack(main_extent, cross_extent),
        extents,
        main_limit,
        band_count,
    }
}

/// Main-axis extent when every item shares one band: the farthest band end
/// the walker will compute, so the same value fed back as a limit never wraps.
fn single_band_extent(config: &FlowConfig, metrics: &[ItemMetrics], padding: Edges) -> f32 {
    let main = config.orientation.main_axis();
    let mut cursor = BandCursor::new(
        padding.leading(main),
        None,
        padding.trailing(main),
        config.spacing(main),
        config.wrap_policy,
    );
    let mut end = cursor.band_end(0.0);
    for measured in metrics {
        let extent = main.of(measured.occupied());
        end = end.max(cursor.band_end(extent));
        cursor.advance(extent);
    }
    end
}

/// Walks the items with the placement wrap rule. Returns the band count and the
/// cross-axis extent added by every band after the first.
fn dry_run(
    config: &FlowConfig,
    metrics: &[ItemMetrics],
    padding: Edges,
    limit: Option<f32>,
    band: f32,
) -> (usize, f32) {
    let main = config.orientation.main_axis();
    let stride = band + config.spacing(main.cross());
    let mut cursor = BandCursor::new(
        padding.leading(main),
        limit,
        padding.trailing(main),
        config.spacing(main),
        config.wrap_policy,
    );
    let mut band_count = usize::from(!metrics.is_empty());
    let mut extra = 0.0;

    for measured in metrics {
        let extent = main.of(measured.occupied());
        if cursor.should_wrap(extent) {
            extra += stride;
            band_count += 1;
            cursor.wrap();
        }
        cursor.advance(extent);
    }

    (band_count, extra)
}
