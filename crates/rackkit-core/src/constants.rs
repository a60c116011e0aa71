//! Scale constants shared by the floor plan and the 3D scene.
//!
//! All physical measurements are in meters before scaling. The cabinet scale
//! factor enlarges every cabinet dimension uniformly so the 3D scene reads
//! well at typical camera distances; [`crate::GridConfig::default`] bakes
//! these into a single configuration value so nothing reads them ambiently.

/// Number of rack units in every cabinet. Unit 1 is at the bottom.
pub const RACK_TOTAL_U: u32 = 42;

/// Height of one rack unit in meters (1.75 in), before scaling.
pub const BASE_U_HEIGHT_M: f64 = 0.0889;

/// Thickness of the top and bottom frame caps in meters, before scaling.
pub const BASE_FRAME_CAP_THICKNESS_M: f64 = 0.1;

/// Interior width of the rack in meters (19-inch rail standard plus
/// clearance), before scaling.
pub const BASE_RACK_INNER_WIDTH_M: f64 = 0.9652;

/// Thickness of each vertical side post in meters, before scaling.
pub const BASE_FRAME_SIDE_THICKNESS_M: f64 = 0.1;

/// Depth of the cabinet footprint in meters, before scaling.
pub const BASE_RACK_FRAME_DEPTH_M: f64 = 1.8;

/// Uniform enlargement applied to all cabinet dimensions.
pub const CABINET_SCALE_FACTOR: f64 = 2.3;

/// Floor-plan canvas scale: pixels per world meter.
pub const PIXELS_PER_METER: f64 = 40.0;

/// Nominal floor-plan grid size, in cabinet-footprint slots per axis.
pub const GRID_COLS_SLOTS: u32 = 10;

/// See [`GRID_COLS_SLOTS`].
pub const GRID_ROWS_SLOTS: u32 = 10;

/// Face-column token marking a rear-mounted device (matched case-insensitively).
pub const REAR_FACE_TOKEN: &str = "rear";

/// Display label substituted for unnamed devices when the normalizer is
/// configured to keep them.
pub const UNNAMED_DEVICE_LABEL: &str = "Unknown";
