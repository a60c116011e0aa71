//! Shared data model for device records and cabinet placements.
//!
//! Raw entries arrive from the spreadsheet-parsing collaborator as loosely
//! typed rows (numbers and strings mixed freely); the types here model that
//! input faithfully and the strongly typed records the layout engine consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants;

/// Unique cabinet identifier. One spreadsheet sheet per cabinet.
pub type CabinetName = String;

/// A loosely typed spreadsheet cell: the parser emits numbers where the sheet
/// had numbers and strings everywhere else, so both must deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Numeric cell value.
    Number(f64),
    /// Text cell value.
    Text(String),
}

impl FieldValue {
    /// Renders the value the way the source sheet displayed it: integral
    /// numbers without a trailing `.0`, everything else verbatim.
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::Number(n) if n.is_finite() && n.fract() == 0.0 => {
                format!("{}", *n as i64)
            }
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    /// Numeric reading of the value. Text is parsed by its leading numeric
    /// prefix ("4U" reads as 4), matching how the original pipeline coerced
    /// cells; text with no numeric prefix yields `None`.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => parse_leading_f64(s.trim()),
        }
    }
}

/// Parses the leading floating-point prefix of a string, if any.
fn parse_leading_f64(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}

/// Which side of the cabinet a device mounts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// Front-mounted (the default for unrecognized face values).
    #[default]
    Front,
    /// Rear-mounted.
    Rear,
}

impl Face {
    /// Interprets a free-form face cell. Only the rear token is recognized
    /// (case-insensitively); anything else, including `None`, is front.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if t.trim().eq_ignore_ascii_case(constants::REAR_FACE_TOKEN) => Face::Rear,
            _ => Face::Front,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Front => write!(f, "front"),
            Face::Rear => write!(f, "rear"),
        }
    }
}

/// One row of a cabinet sheet as produced by the parser collaborator.
///
/// Field names match the spreadsheet column headers. `rack` and `unit_span`
/// are free-form; the normalizer is responsible for all coercion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDeviceEntry {
    /// Starting rack unit, free-form (may carry a face suffix like "12 rear").
    #[serde(rename = "Rack", default)]
    pub rack: Option<FieldValue>,
    /// Height in rack units, free-form.
    #[serde(rename = "U", default)]
    pub unit_span: Option<FieldValue>,
    /// Device display name.
    #[serde(rename = "BrandModel", default)]
    pub brand_model: Option<String>,
    /// Mounting face, free-form.
    #[serde(rename = "Face", default)]
    pub face: Option<String>,
    /// Owning team or person.
    #[serde(rename = "Owner", default)]
    pub owner: Option<String>,
    /// Serial number.
    #[serde(rename = "Serial", default)]
    pub serial: Option<String>,
}

/// A validated, clamped device placement.
///
/// Invariants: `start_unit >= 1`, `unit_span > 0`. `start_unit` is 1-based
/// counting from the bottom of the rack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Lowest rack unit the device occupies.
    pub start_unit: u32,
    /// Height in rack units. Fractional spans occur in real sheets.
    pub unit_span: f64,
    /// Display name.
    pub brand_model: String,
    /// Mounting face.
    pub face: Face,
    /// Owning team or person, if recorded.
    pub owner: Option<String>,
    /// Serial number, if recorded.
    pub serial: Option<String>,
}

/// Derived rendering geometry for one device, in unit space.
///
/// Offsets are measured from the top of the rack interior because both
/// renderers draw top-down; the engine performs the bottom-up to top-down
/// conversion. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceGeometry {
    /// Index of the source record in the cabinet's input list, so the
    /// renderer can fetch labels while drawing in input order.
    pub device_index: usize,
    /// Distance from the top of the rack interior to the top of the device,
    /// in units.
    pub top_offset_units: f64,
    /// Rendered height in units (post-clip).
    pub span_units: f64,
    /// True if the device was truncated at the top of the rack.
    pub overflowed: bool,
}

/// Top-left pixel position of a cabinet footprint on the floor-plan canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CabinetPlacement2D {
    /// Horizontal pixel offset from the canvas left edge.
    pub x_px: f64,
    /// Vertical pixel offset from the canvas top edge.
    pub y_px: f64,
}

impl CabinetPlacement2D {
    /// Creates a placement from pixel coordinates.
    pub fn new(x_px: f64, y_px: f64) -> Self {
        Self { x_px, y_px }
    }

    /// True if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x_px.is_finite() && self.y_px.is_finite()
    }
}

/// World-space center of a cabinet footprint in the 3D scene.
///
/// `y` is always half the total frame height so the cabinet sits on the
/// ground plane; `z` corresponds to floor-plan `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CabinetPlacement3D {
    /// World X (east-west on the floor).
    pub x: f64,
    /// World Y (height above the ground plane).
    pub y: f64,
    /// World Z (north-south on the floor).
    pub z: f64,
}

impl CabinetPlacement3D {
    /// Creates a placement from world coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// True if all coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// All scale constants tying meters, floor-plan pixels, and 3D world units
/// together. Passed explicitly everywhere; nothing reads module globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Rack capacity in units, identical for every cabinet.
    pub rack_units: u32,
    /// Scaled height of one rack unit, in meters.
    pub unit_height_m: f64,
    /// Scaled thickness of the top and bottom frame caps, in meters.
    pub frame_cap_thickness_m: f64,
    /// Floor-plan scale in pixels per meter.
    pub pixels_per_meter: f64,
    /// Cabinet footprint width (interior plus side posts), in meters.
    pub cabinet_footprint_width_m: f64,
    /// Cabinet footprint depth, in meters.
    pub cabinet_footprint_depth_m: f64,
    /// Total floor-plan grid width, in meters.
    pub world_grid_width_m: f64,
    /// Total floor-plan grid depth, in meters.
    pub world_grid_depth_m: f64,
}

impl GridConfig {
    /// Total exterior cabinet height: all units plus both frame caps.
    pub fn frame_total_height_m(&self) -> f64 {
        f64::from(self.rack_units) * self.unit_height_m + 2.0 * self.frame_cap_thickness_m
    }

    /// Floor-plan canvas width in pixels.
    pub fn stage_width_px(&self) -> f64 {
        self.world_grid_width_m * self.pixels_per_meter
    }

    /// Floor-plan canvas height in pixels.
    pub fn stage_height_px(&self) -> f64 {
        self.world_grid_depth_m * self.pixels_per_meter
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        let scale = constants::CABINET_SCALE_FACTOR;
        let footprint_width_m = (constants::BASE_RACK_INNER_WIDTH_M
            + 2.0 * constants::BASE_FRAME_SIDE_THICKNESS_M)
            * scale;
        let footprint_depth_m = constants::BASE_RACK_FRAME_DEPTH_M * scale;
        Self {
            rack_units: constants::RACK_TOTAL_U,
            unit_height_m: constants::BASE_U_HEIGHT_M * scale,
            frame_cap_thickness_m: constants::BASE_FRAME_CAP_THICKNESS_M * scale,
            pixels_per_meter: constants::PIXELS_PER_METER,
            cabinet_footprint_width_m: footprint_width_m,
            cabinet_footprint_depth_m: footprint_depth_m,
            world_grid_width_m: f64::from(constants::GRID_COLS_SLOTS) * footprint_width_m,
            world_grid_depth_m: f64::from(constants::GRID_ROWS_SLOTS) * footprint_depth_m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_value_accepts_numbers_and_strings() {
        let entry: RawDeviceEntry =
            serde_json::from_str(r#"{"Rack": 5, "U": "2", "BrandModel": "Switch X"}"#)
                .expect("entry should deserialize");
        assert_eq!(entry.rack, Some(FieldValue::Number(5.0)));
        assert_eq!(entry.unit_span, Some(FieldValue::Text("2".to_string())));
    }

    #[test]
    fn numeric_reads_leading_prefix() {
        assert_eq!(FieldValue::Text("4U".into()).numeric(), Some(4.0));
        assert_eq!(FieldValue::Text(" 2.5 rear".into()).numeric(), Some(2.5));
        assert_eq!(FieldValue::Text("BLADE".into()).numeric(), None);
        assert_eq!(FieldValue::Number(3.0).numeric(), Some(3.0));
    }

    #[test]
    fn display_text_drops_integral_fraction() {
        assert_eq!(FieldValue::Number(12.0).display_text(), "12");
        assert_eq!(FieldValue::Number(1.5).display_text(), "1.5");
        assert_eq!(FieldValue::Text("7 rear".into()).display_text(), "7 rear");
    }

    #[test]
    fn face_token_is_case_insensitive() {
        assert_eq!(Face::from_token(Some("REAR")), Face::Rear);
        assert_eq!(Face::from_token(Some(" rear ")), Face::Rear);
        assert_eq!(Face::from_token(Some("front")), Face::Front);
        assert_eq!(Face::from_token(Some("back")), Face::Front);
        assert_eq!(Face::from_token(None), Face::Front);
    }

    #[test]
    fn default_config_frame_height() {
        let config = GridConfig::default();
        let expected = 42.0 * 0.0889 * 2.3 + 2.0 * 0.1 * 2.3;
        assert!((config.frame_total_height_m() - expected).abs() < 1e-12);
    }
}
