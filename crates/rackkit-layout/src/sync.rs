//! Layout synchronization across the 2D and 3D coordinate spaces.
//!
//! The synchronizer is the only writer that touches both spaces. Floor-plan
//! drags stay local to the 2D placement until the user explicitly applies
//! the layout; only then is the 3D scene recomputed. This matches the
//! deliberate "stage, then apply" workflow rather than reactive syncing.

use rackkit_core::{CabinetName, CabinetPlacement2D, GridConfig};
use tracing::{debug, warn};

use crate::mapper;
use crate::store::PositionStore;

/// Orchestrates placement edits and keeps the two coordinate spaces
/// consistent. All operations run synchronously to completion; events are
/// never interleaved.
#[derive(Debug, Clone, Default)]
pub struct LayoutSynchronizer {
    store: PositionStore,
}

impl LayoutSynchronizer {
    /// Creates a synchronizer with an empty position store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the placement store for the renderers.
    pub fn store(&self) -> &PositionStore {
        &self.store
    }

    /// Loads a freshly parsed dataset, fully replacing all prior placements
    /// with the initial natural-sorted layout.
    pub fn load_dataset(&mut self, names: &[CabinetName], config: &GridConfig) {
        debug!(cabinets = names.len(), "loading dataset; replacing placements");
        self.store.initialize_layout(names, config);
    }

    /// Applies a floor-plan drag for one cabinet. Updates only the 2D
    /// placement; the 3D scene is untouched until an explicit commit.
    /// Returns the stored (possibly snapped) position.
    pub fn apply_floor_plan_edit(
        &mut self,
        name: &str,
        raw: CabinetPlacement2D,
        grid_size_px: f64,
    ) -> Option<CabinetPlacement2D> {
        self.store.set_position_2d(name, raw, grid_size_px)
    }

    /// Commits the current floor plan to the 3D scene.
    ///
    /// Every cabinet with a finite 2D placement gets its 3D placement
    /// recomputed through the mapper. Cabinets with a missing or non-finite
    /// 2D placement are skipped and keep whatever 3D placement they had;
    /// they are never overwritten with garbage. Returns the number of
    /// cabinets committed.
    pub fn commit_floor_plan_to_world(&mut self, config: &GridConfig) -> usize {
        let names: Vec<CabinetName> = self.store.cabinet_names().cloned().collect();
        let mut committed = 0;
        for name in names {
            match self.store.get_position_2d(&name) {
                Some(position_2d) if position_2d.is_finite() => {
                    let position_3d = mapper::to_world_3d(&position_2d, config);
                    self.store.commit_position_3d(&name, position_3d);
                    committed += 1;
                }
                _ => {
                    warn!(
                        cabinet = %name,
                        "skipping commit: missing or non-finite 2D placement; keeping prior 3D position"
                    );
                }
            }
        }
        debug!(committed, "applied floor plan to world space");
        committed
    }
}
