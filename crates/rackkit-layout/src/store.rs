//! Canonical per-cabinet placement state.
//!
//! The store replaces the ambient view-state the rendering layer would
//! otherwise keep: every cabinet's latest known 2D and 3D placement lives
//! here, with well-defined read/write contracts and no rendering-framework
//! ties. Updates replace whole placement values; callers never observe a
//! half-written position.

use std::collections::HashMap;

use rackkit_core::{natural_cmp, CabinetName, CabinetPlacement2D, CabinetPlacement3D, GridConfig};
use tracing::{debug, warn};

use crate::mapper;

/// Lifecycle of one cabinet's placement.
///
/// `Initialized -> Edited -> Committed`, looping back to `Edited` on further
/// floor-plan drags. Absence from the store is the uninitialized state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    /// Placed by the initial layout; both spaces agree.
    Initialized,
    /// The 2D placement was edited and not yet applied to the 3D scene.
    Edited,
    /// The 3D placement was recomputed from the current 2D placement.
    Committed,
}

#[derive(Debug, Clone)]
struct CabinetEntry {
    position_2d: Option<CabinetPlacement2D>,
    position_3d: Option<CabinetPlacement3D>,
    state: PlacementState,
}

/// Key-value store of cabinet placements, keyed by cabinet name.
#[derive(Debug, Clone, Default)]
pub struct PositionStore {
    entries: HashMap<CabinetName, CabinetEntry>,
}

impl PositionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all placements with an initial layout for `names`.
    ///
    /// Cabinets are laid edge-to-edge along world X at z = 0, centered
    /// around x = 0, in natural-sort order; the matching 2D positions are
    /// derived through the mapper. Entries from a previous dataset are
    /// discarded, never merged.
    pub fn initialize_layout(&mut self, names: &[CabinetName], config: &GridConfig) {
        self.entries.clear();

        let mut sorted: Vec<&CabinetName> = names.iter().collect();
        sorted.sort_by(|a, b| natural_cmp(a, b));

        let width = config.cabinet_footprint_width_m;
        let total_width = sorted.len() as f64 * width;
        let first_x = -total_width / 2.0 + width / 2.0;
        let y = config.frame_total_height_m() / 2.0;

        for (i, name) in sorted.iter().enumerate() {
            let position_3d = CabinetPlacement3D::new(first_x + i as f64 * width, y, 0.0);
            let mut position_2d = mapper::to_floor_plan_2d(&position_3d, config);
            if !position_2d.is_finite() {
                warn!(cabinet = %name, "derived initial 2D position is not finite; using origin");
                position_2d = CabinetPlacement2D::new(0.0, 0.0);
            }
            self.entries.insert(
                (*name).clone(),
                CabinetEntry {
                    position_2d: Some(position_2d),
                    position_3d: Some(position_3d),
                    state: PlacementState::Initialized,
                },
            );
        }
        debug!(cabinets = self.entries.len(), "initialized layout");
    }

    /// Stores a 2D placement, quantized to the nearest multiple of
    /// `grid_size_px` (no quantization when zero).
    ///
    /// Non-finite input is rejected and the prior position preserved.
    /// Returns the stored 2D position after the call.
    pub fn set_position_2d(
        &mut self,
        name: &str,
        raw: CabinetPlacement2D,
        grid_size_px: f64,
    ) -> Option<CabinetPlacement2D> {
        if !raw.is_finite() {
            warn!(
                cabinet = name,
                x_px = raw.x_px,
                y_px = raw.y_px,
                "rejecting non-finite 2D position update"
            );
            return self.get_position_2d(name);
        }

        let snapped = snap_to_grid(raw, grid_size_px);
        let entry = self
            .entries
            .entry(name.to_string())
            .or_insert(CabinetEntry {
                position_2d: None,
                position_3d: None,
                state: PlacementState::Edited,
            });
        entry.position_2d = Some(snapped);
        entry.state = PlacementState::Edited;
        Some(snapped)
    }

    /// Writes the committed 3D placement for a cabinet. Restricted to the
    /// synchronizer, which is the only writer across both spaces.
    pub(crate) fn commit_position_3d(&mut self, name: &str, position: CabinetPlacement3D) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.position_3d = Some(position);
            entry.state = PlacementState::Committed;
        }
    }

    /// Latest 2D placement, or `None` for unknown cabinets ("not yet
    /// renderable", never an error).
    pub fn get_position_2d(&self, name: &str) -> Option<CabinetPlacement2D> {
        self.entries.get(name).and_then(|entry| entry.position_2d)
    }

    /// Latest 3D placement, or `None` for unknown cabinets.
    pub fn get_position_3d(&self, name: &str) -> Option<CabinetPlacement3D> {
        self.entries.get(name).and_then(|entry| entry.position_3d)
    }

    /// Drops a cabinet's 2D placement, leaving any 3D placement in place.
    /// Only used by tests to simulate upstream state gaps.
    #[cfg(test)]
    pub(crate) fn clear_position_2d(&mut self, name: &str) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.position_2d = None;
        }
    }

    /// Placement lifecycle state, or `None` for unknown cabinets.
    pub fn placement_state(&self, name: &str) -> Option<PlacementState> {
        self.entries.get(name).map(|entry| entry.state)
    }

    /// Names of all stored cabinets, in arbitrary order.
    pub fn cabinet_names(&self) -> impl Iterator<Item = &CabinetName> {
        self.entries.keys()
    }

    /// Number of stored cabinets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no cabinets are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Quantizes a position to the nearest multiple of `grid_size_px`.
/// Non-positive grid sizes disable snapping.
fn snap_to_grid(position: CabinetPlacement2D, grid_size_px: f64) -> CabinetPlacement2D {
    if grid_size_px > 0.0 {
        CabinetPlacement2D {
            x_px: (position.x_px / grid_size_px).round() * grid_size_px,
            y_px: (position.y_px / grid_size_px).round() * grid_size_px,
        }
    } else {
        position
    }
}
