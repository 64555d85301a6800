// crates/flow-layout/src/band.rs
//! Main-axis cursor shared by the dimension resolver and the placement walker.
//! Both passes must wrap at the same items, so the overflow test lives only here.

use flow_core::WrapPolicy;

#[derive(Debug, Clone, Copy)]
pub(crate) struct BandCursor {
    start: f32,
    position: f32,
    /// Container extent on the main axis. `None` never wraps.
    limit: Option<f32>,
    /// Padding after the last item of a band.
    trailing: f32,
    spacing: f32,
    policy: WrapPolicy,
    items_in_band: usize,
}

impl BandCursor {
    pub fn new(start: f32, limit: Option<f32>, trailing: f32, spacing: f32, policy: WrapPolicy) -> Self {
        Self {
            start,
            position: start,
            limit,
            trailing,
            spacing,
            policy,
            items_in_band: 0,
        }
    }

    /// Whether an item occupying `extent` must start a new band.
    pub fn should_wrap(&self, extent: f32) -> bool {
        let Some(limit) = self.limit else {
            return false;
        };
        // Compared unsubtracted: a free main extent is built from `band_end` too.
        let overflows = self.band_end(extent) > limit;
        match self.policy {
            WrapPolicy::SkipEmptyBand => overflows && self.items_in_band > 0,
            WrapPolicy::Always => overflows,
        }
    }

    /// Far edge of an item occupying `extent` at the cursor, plus trailing padding.
    pub fn band_end(&self, extent: f32) -> f32 {
        self.position + extent + self.trailing
    }

    pub fn wrap(&mut self) {
        self.position = self.start;
        self.items_in_band = 0;
    }

    /// Consumes `extent` plus trailing spacing; returns where the item starts.
    pub fn advance(&mut self, extent: f32) -> f32 {
        let at = self.position;
        self.position += extent + self.spacing;
        self.items_in_band += 1;
        at
    }
}
