//! Rack slot layout engine.
//!
//! Converts a cabinet's normalized device records into unit-space rendering
//! geometry. Rack numbering is bottom-up (unit 1 at the bottom) while both
//! renderers draw top-down, so the engine emits offsets measured from the
//! top of the rack interior.
//!
//! The engine never arbitrates overlapping devices; input data may overlap
//! and the renderer draws in array order, which this module preserves.

use rackkit_core::{DeviceGeometry, DeviceRecord, GridConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The degraded representation of a cabinet whose declared occupancy
/// exceeds its capacity: one slab spanning the whole rack (unit 1 through
/// `rack_units`), labeled with the first drawable device's name. Individual
/// devices are not drawn in this state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverflowSlab {
    /// Name of the first drawable device, standing in for the cabinet.
    pub label: String,
    /// Highest declared occupied unit, shown in the overflow annotation
    /// (e.g. "taller than 42U (51U)").
    pub occupied_units: f64,
}

/// Renderable geometry for one cabinet.
///
/// `NoData` (no device records at all) is deliberately distinct from
/// `Slots(vec![])` (every device started beyond the rack top): the first
/// renders a "no data" placeholder, the second an empty rack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CabinetGeometry {
    /// The cabinet has no device records.
    NoData,
    /// Declared occupancy exceeds capacity; render a single representative
    /// slab instead of individual devices.
    Overflow(OverflowSlab),
    /// Per-device slots in input order.
    Slots(Vec<DeviceGeometry>),
}

impl CabinetGeometry {
    /// True when the cabinet degraded to the overflow slab.
    pub fn is_overflowing(&self) -> bool {
        matches!(self, CabinetGeometry::Overflow(_))
    }
}

/// Computes the rendering geometry for one cabinet.
///
/// Devices starting beyond the rack top are excluded before anything else:
/// they can never be drawn, and a single absurd start row must not collapse
/// an otherwise valid cabinet. The overflow check then runs over the
/// remaining devices' declared end units.
pub fn compute_cabinet_geometry(
    devices: &[DeviceRecord],
    config: &GridConfig,
) -> CabinetGeometry {
    if devices.is_empty() {
        return CabinetGeometry::NoData;
    }
    let rack_units = f64::from(config.rack_units);

    let drawable: Vec<(usize, &DeviceRecord)> = devices
        .iter()
        .enumerate()
        .filter(|(_, device)| {
            let in_range = f64::from(device.start_unit) <= rack_units;
            if !in_range {
                debug!(
                    device = %device.brand_model,
                    start_unit = device.start_unit,
                    "device starts beyond the rack top; excluded from geometry"
                );
            }
            in_range
        })
        .collect();

    if drawable.is_empty() {
        return CabinetGeometry::Slots(Vec::new());
    }

    let max_occupied = drawable
        .iter()
        .map(|(_, device)| declared_end_unit(device))
        .fold(0.0_f64, f64::max);

    if max_occupied > rack_units {
        debug!(
            occupied = max_occupied,
            capacity = config.rack_units,
            "cabinet occupancy exceeds capacity; collapsing to a single slab"
        );
        return CabinetGeometry::Overflow(OverflowSlab {
            label: drawable[0].1.brand_model.clone(),
            occupied_units: max_occupied,
        });
    }

    let slots = drawable
        .into_iter()
        .filter_map(|(index, device)| clip_device(device, index, config.rack_units))
        .collect();
    CabinetGeometry::Slots(slots)
}

/// Clips one device to the rack envelope and converts it to top-down
/// unit-space geometry.
///
/// A device starting within range but nominally extending past the top is
/// truncated, never wrapped or dropped; a device whose `start_unit` already
/// exceeds the rack yields `None`. The rendered span is floored at one unit
/// so fractional rows stay visible.
///
/// Formula (post-clip):
/// ```text
/// end_unit         = min(start_unit + unit_span - 1, rack_units)
/// top_offset_units = rack_units - end_unit
/// span_units       = end_unit - start_unit + 1
/// ```
pub fn clip_device(
    device: &DeviceRecord,
    device_index: usize,
    rack_units: u32,
) -> Option<DeviceGeometry> {
    let rack_units = f64::from(rack_units);
    let start = f64::from(device.start_unit);
    if start > rack_units {
        return None;
    }

    let mut end = declared_end_unit(device);
    let mut overflowed = false;
    if end > rack_units {
        end = rack_units;
        overflowed = true;
    }

    Some(DeviceGeometry {
        device_index,
        top_offset_units: rack_units - end,
        span_units: (end - start + 1.0).max(1.0),
        overflowed,
    })
}

fn declared_end_unit(device: &DeviceRecord) -> f64 {
    f64::from(device.start_unit) + device.unit_span - 1.0
}
