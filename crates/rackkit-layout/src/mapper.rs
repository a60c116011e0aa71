//! Coordinate conversion between the 2D floor plan and the 3D scene.
//!
//! Floor-plan placements are the top-left pixel of a cabinet footprint with
//! (0,0) at the canvas top-left; world placements are the footprint center
//! with the grid's meter-space center at the world origin. Both conversions
//! are pure, stateless, and exact inverses of each other.
//!
//! The vertical world coordinate is always half the total frame height so
//! the cabinet sits on the ground plane; the floor plan carries no height.

use rackkit_core::{CabinetPlacement2D, CabinetPlacement3D, GridConfig};

/// Converts a floor-plan placement to a world placement.
///
/// Formula:
/// ```text
/// world_x = x_px / pixels_per_meter + footprint_width / 2 - grid_width / 2
/// world_z = y_px / pixels_per_meter + footprint_depth / 2 - grid_depth / 2
/// world_y = frame_total_height / 2
/// ```
///
/// Total over finite inputs; placements outside the nominal grid are legal
/// and map to world positions outside the grid.
pub fn to_world_3d(placement: &CabinetPlacement2D, config: &GridConfig) -> CabinetPlacement3D {
    let top_left_x_m = placement.x_px / config.pixels_per_meter;
    let top_left_z_m = placement.y_px / config.pixels_per_meter;
    CabinetPlacement3D {
        x: top_left_x_m + config.cabinet_footprint_width_m / 2.0 - config.world_grid_width_m / 2.0,
        y: config.frame_total_height_m() / 2.0,
        z: top_left_z_m + config.cabinet_footprint_depth_m / 2.0 - config.world_grid_depth_m / 2.0,
    }
}

/// Converts a world placement back to a floor-plan placement.
///
/// Exact inverse of [`to_world_3d`]; the world `y` coordinate is ignored
/// because the floor plan is a top-down projection.
pub fn to_floor_plan_2d(placement: &CabinetPlacement3D, config: &GridConfig) -> CabinetPlacement2D {
    let top_left_x_m =
        placement.x - config.cabinet_footprint_width_m / 2.0 + config.world_grid_width_m / 2.0;
    let top_left_z_m =
        placement.z - config.cabinet_footprint_depth_m / 2.0 + config.world_grid_depth_m / 2.0;
    CabinetPlacement2D {
        x_px: top_left_x_m * config.pixels_per_meter,
        y_px: top_left_z_m * config.pixels_per_meter,
    }
}
