// crates/flow-layout/src/lib.rs

use flow_core::{
    validate_spacing, Axis, ContainerConstraints, Edges, FlowConfig, MeasureMode, Orientation, Rect,
    Result, WrapPolicy,
};
use glam::Vec2;
use tracing::debug;

mod band;
pub mod measure;
pub mod observer;
pub mod place;
pub mod resolve;

pub use measure::*;
pub use observer::*;
pub use place::*;
pub use resolve::*;

#[derive(Debug, Clone, PartialEq)]
pub struct FlowResult {
    /// One rectangle per input item, in input order.
    pub rects: Vec<Rect>,
    /// Resolved container size.
    pub size: Vec2,
    pub band_count: usize,
    pub extents: ItemExtents,
}

impl FlowResult {
    pub fn rect(&self, index: usize) -> Option<&Rect> {
        self.rects.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Sizing call: the container size the items need under `constraints`.
pub fn measure<M: Measurable>(config: &FlowConfig, items: &[M], constraints: &ContainerConstraints) -> Vec2 {
    let scanned = scan(items, constraints, &mut NoopObserver);
    resolve_size(config, &scanned.metrics, scanned.extents, constraints).size
}

/// Placement call: arranges the items inside a container whose size is already known.
pub fn arrange<M: Measurable>(config: &FlowConfig, items: &[M], size: Vec2, padding: Edges) -> FlowResult {
    let constraints = ContainerConstraints::with_fixed_size(size.x, size.y).with_padding(padding);
    compute(config, items, &constraints)
}

/// Sizing and placement in one pass.
pub fn compute<M: Measurable>(config: &FlowConfig, items: &[M], constraints: &ContainerConstraints) -> FlowResult {
    compute_observed(config, items, constraints, &mut NoopObserver)
}

pub fn compute_observed<M: Measurable>(
    config: &FlowConfig,
    items: &[M],
    constraints: &ContainerConstraints,
    observer: &mut dyn FlowObserver,
) -> FlowResult {
    let scanned = scan(items, constraints, observer);
    run_pass(config, &scanned, constraints, observer)
}

fn run_pass(
    config: &FlowConfig,
    scanned: &SizeScan,
    constraints: &ContainerConstraints,
    observer: &mut dyn FlowObserver,
) -> FlowResult {
    let resolution = resolve_size(config, &scanned.metrics, scanned.extents, constraints);
    observer.size_resolved(resolution.size, resolution.band_count);

    let placement = place(config, &scanned.metrics, &resolution, constraints.padding, observer);
    debug_assert_eq!(placement.band_count, resolution.band_count);

    FlowResult {
        rects: placement.rects,
        size: resolution.size,
        band_count: placement.band_count,
        extents: resolution.extents,
    }
}

#[derive(Debug)]
struct CachedPass {
    metrics: Vec<ItemMetrics>,
    constraints: ContainerConstraints,
    result: FlowResult,
}

/// Flow container state: configuration owned across passes plus the last pass result.
#[derive(Debug)]
pub struct FlowLayout {
    config: FlowConfig,
    debug: bool,
    cache: Option<CachedPass>,
    layout_requested: bool,
}

impl FlowLayout {
    pub fn new() -> Self {
        Self {
            config: FlowConfig::default(),
            debug: false,
            cache: None,
            layout_requested: true,
        }
    }

    pub fn with_config(config: FlowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, ..Self::new() })
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.config.orientation != orientation {
            self.config.orientation = orientation;
            self.invalidate();
        }
    }

    /// Attribute form of [`FlowLayout::set_orientation`]: 0 = horizontal, 1 = vertical.
    pub fn set_orientation_index(&mut self, index: u8) -> Result<()> {
        self.set_orientation(Orientation::try_from(index)?);
        Ok(())
    }

    pub fn set_line_spacing_horizontal(&mut self, spacing: f32) -> Result<()> {
        self.set_spacing(Axis::Horizontal, spacing)
    }

    pub fn set_line_spacing_vertical(&mut self, spacing: f32) -> Result<()> {
        self.set_spacing(Axis::Vertical, spacing)
    }

    fn set_spacing(&mut self, axis: Axis, spacing: f32) -> Result<()> {
        validate_spacing(axis, spacing)?;
        let slot = match axis {
            Axis::Horizontal => &mut self.config.line_spacing_horizontal,
            Axis::Vertical => &mut self.config.line_spacing_vertical,
        };
        if *slot != spacing {
            *slot = spacing;
            self.invalidate();
        }
        Ok(())
    }

    pub fn set_wrap_policy(&mut self, wrap_policy: WrapPolicy) {
        if self.config.wrap_policy != wrap_policy {
            self.config.wrap_policy = wrap_policy;
            self.invalidate();
        }
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        if self.config.reverse != reverse {
            self.config.reverse = reverse;
            self.invalidate();
        }
    }

    pub fn set_include_trailing_padding(&mut self, include: bool) {
        if self.config.include_trailing_padding != include {
            self.config.include_trailing_padding = include;
            self.invalidate();
        }
    }

    /// Drops the cached pass and flags that a new layout is needed.
    pub fn invalidate(&mut self) {
        if self.debug {
            debug!("Flow layout invalidated: {:?}", self.config);
        }
        self.cache = None;
        self.layout_requested = true;
    }

    pub fn is_layout_requested(&self) -> bool {
        self.layout_requested
    }

    /// Runs a full pass, reusing the previous result when items and constraints are unchanged.
    pub fn compute<M: Measurable>(&mut self, items: &[M], constraints: &ContainerConstraints) -> &FlowResult {
        // Snapshot so the whole pass sees one configuration.
        let config = self.config;
        let mut tracing_observer = TracingObserver;
        let mut noop_observer = NoopObserver;
        let observer: &mut dyn FlowObserver = if self.debug {
            &mut tracing_observer
        } else {
            &mut noop_observer
        };

        let scanned = scan(items, constraints, observer);
        let pass = match self.cache.take() {
            Some(cached) if cached.metrics == scanned.metrics && cached.constraints == *constraints => {
                if self.debug {
                    debug!("Reusing cached flow layout for {} items", scanned.metrics.len());
                }
                cached
            }
            _ => {
                let result = run_pass(&config, &scanned, constraints, observer);
                if self.debug {
                    debug!(
                        "Flow layout: {} items in {} bands, size={:?}",
                        result.rects.len(),
                        result.band_count,
                        result.size
                    );
                }
                CachedPass {
                    metrics: scanned.metrics,
                    constraints: *constraints,
                    result,
                }
            }
        };

        self.layout_requested = false;
        &self.cache.insert(pass).result
    }

    /// Sizing call of the two-call protocol.
    pub fn measure<M: Measurable>(&mut self, items: &[M], constraints: &ContainerConstraints) -> Vec2 {
        self.compute(items, constraints).size
    }

    /// Placement call of the two-call protocol, once the container size is fixed.
    pub fn arrange<M: Measurable>(&mut self, items: &[M], size: Vec2, padding: Edges) -> &FlowResult {
        let constraints = ContainerConstraints {
            width: MeasureMode::Exact(size.x),
            height: MeasureMode::Exact(size.y),
            padding,
        };
        self.compute(items, &constraints)
    }
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self::new()
    }
}
