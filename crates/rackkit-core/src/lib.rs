//! # RackKit Core
//!
//! Core types, constants, and utilities for RackKit.
//! Provides the shared data model for device records, cabinet placements,
//! and the scale configuration that ties the 2D floor plan to the 3D scene.

pub mod constants;
pub mod error;
pub mod model;
pub mod sort;

pub use error::{DeviceRejection, Error, Result};

pub use model::{
    CabinetName, CabinetPlacement2D, CabinetPlacement3D, DeviceGeometry, DeviceRecord, Face,
    FieldValue, GridConfig, RawDeviceEntry,
};

pub use sort::natural_cmp;
