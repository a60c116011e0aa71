//! # RackKit Layout
//!
//! The rack slot layout engine and the 2D/3D coordinate synchronization
//! layer. Consumes validated device records and position-edit events,
//! produces unit-space geometry and cabinet placements for the renderers.
//!
//! Modules:
//! - `normalizer`: raw spreadsheet rows to validated device records
//! - `slots`: per-cabinet slot geometry and overflow handling
//! - `mapper`: pure conversion between floor-plan pixels and world space
//! - `store`: canonical per-cabinet placement state with grid snapping
//! - `sync`: the single writer that keeps both coordinate spaces consistent

pub mod mapper;
pub mod normalizer;
pub mod slots;
pub mod store;
pub mod sync;

pub use normalizer::{normalize_entry, normalize_records, NormalizerOptions};
pub use slots::{clip_device, compute_cabinet_geometry, CabinetGeometry, OverflowSlab};
pub use store::{PlacementState, PositionStore};
pub use sync::LayoutSynchronizer;
