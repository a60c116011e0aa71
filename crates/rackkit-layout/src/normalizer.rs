//! Device record normalization.
//!
//! Spreadsheet rows arrive with free-form unit fields: a rack position like
//! `"12 rear"`, a span like `"2"`, `4`, or `"BLADE"`. This module coerces
//! each row into a valid [`DeviceRecord`] or rejects it. Pure per record;
//! a bad row never affects its siblings.

use rackkit_core::constants::UNNAMED_DEVICE_LABEL;
use rackkit_core::{DeviceRecord, DeviceRejection, Face, RawDeviceEntry};
use tracing::debug;

/// Normalization policy knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizerOptions {
    /// Keep entries without a brand/model name, substituting the
    /// "Unknown" placeholder label. Off by default: nameless rows are
    /// usually stray spreadsheet artifacts.
    pub allow_unnamed: bool,
}

/// Normalizes one raw row into a validated device record.
///
/// Defaulting rules:
/// - `start_unit`: first embedded integer of the rack field; absent,
///   unparsable, or zero defaults to 1.
/// - `unit_span`: numeric value of the span field; absent or non-numeric
///   defaults to 1. An explicitly non-positive span rejects the record.
/// - `face`: the rear token (case-insensitive) maps to [`Face::Rear`],
///   anything else to [`Face::Front`].
pub fn normalize_entry(
    entry: &RawDeviceEntry,
    options: &NormalizerOptions,
) -> Result<DeviceRecord, DeviceRejection> {
    let brand_model = match entry.brand_model.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ if options.allow_unnamed => UNNAMED_DEVICE_LABEL.to_string(),
        _ => return Err(DeviceRejection::MissingName),
    };

    let start_unit = entry
        .rack
        .as_ref()
        .and_then(|value| first_embedded_integer(&value.display_text()))
        .filter(|&unit| unit >= 1)
        .unwrap_or(1);

    let unit_span = match entry.unit_span.as_ref().and_then(|value| value.numeric()) {
        None => 1.0,
        Some(span) if span.is_finite() && span > 0.0 => span,
        Some(span) => return Err(DeviceRejection::InvalidUnitSpan { span }),
    };

    Ok(DeviceRecord {
        start_unit,
        unit_span,
        brand_model,
        face: Face::from_token(entry.face.as_deref()),
        owner: non_blank(entry.owner.as_deref()),
        serial: non_blank(entry.serial.as_deref()),
    })
}

/// Normalizes a whole cabinet's rows, dropping rejected entries and
/// preserving input order.
pub fn normalize_records(
    entries: &[RawDeviceEntry],
    options: &NormalizerOptions,
) -> Vec<DeviceRecord> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(row, entry)| match normalize_entry(entry, options) {
            Ok(record) => Some(record),
            Err(rejection) => {
                debug!(row, %rejection, "dropping device entry");
                None
            }
        })
        .collect()
}

/// Extracts the first run of digits as an integer. Values too large for
/// `u32` saturate rather than fail; the layout engine excludes them anyway.
fn first_embedded_integer(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(rest[..end].parse().unwrap_or(u32::MAX))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rackkit_core::FieldValue;

    fn entry(rack: Option<FieldValue>, span: Option<FieldValue>, name: &str) -> RawDeviceEntry {
        RawDeviceEntry {
            rack,
            unit_span: span,
            brand_model: Some(name.to_string()),
            ..RawDeviceEntry::default()
        }
    }

    #[test]
    fn start_unit_reads_first_embedded_integer() {
        let raw = entry(
            Some(FieldValue::Text("12 rear".into())),
            Some(FieldValue::Number(2.0)),
            "Server A",
        );
        let record = normalize_entry(&raw, &NormalizerOptions::default()).unwrap();
        assert_eq!(record.start_unit, 12);
        assert_eq!(record.unit_span, 2.0);
    }

    #[test]
    fn missing_or_zero_start_defaults_to_one() {
        let no_rack = entry(None, None, "Server A");
        assert_eq!(
            normalize_entry(&no_rack, &NormalizerOptions::default())
                .unwrap()
                .start_unit,
            1
        );

        let zero_rack = entry(Some(FieldValue::Number(0.0)), None, "Server A");
        assert_eq!(
            normalize_entry(&zero_rack, &NormalizerOptions::default())
                .unwrap()
                .start_unit,
            1
        );
    }

    #[test]
    fn non_numeric_span_defaults_to_one() {
        let blade = entry(
            Some(FieldValue::Number(3.0)),
            Some(FieldValue::Text("BLADE".into())),
            "Blade Chassis",
        );
        let record = normalize_entry(&blade, &NormalizerOptions::default()).unwrap();
        assert_eq!(record.unit_span, 1.0);
    }

    #[test]
    fn non_positive_span_is_rejected() {
        let raw = entry(
            Some(FieldValue::Number(3.0)),
            Some(FieldValue::Number(-2.0)),
            "Server A",
        );
        assert_eq!(
            normalize_entry(&raw, &NormalizerOptions::default()),
            Err(DeviceRejection::InvalidUnitSpan { span: -2.0 })
        );
    }

    #[test]
    fn nameless_entry_rejected_unless_allowed() {
        let raw = RawDeviceEntry {
            rack: Some(FieldValue::Number(1.0)),
            brand_model: Some("   ".to_string()),
            ..RawDeviceEntry::default()
        };
        assert_eq!(
            normalize_entry(&raw, &NormalizerOptions::default()),
            Err(DeviceRejection::MissingName)
        );

        let options = NormalizerOptions { allow_unnamed: true };
        let record = normalize_entry(&raw, &options).unwrap();
        assert_eq!(record.brand_model, "Unknown");
    }

    #[test]
    fn rear_face_detected_case_insensitively() {
        let mut raw = entry(None, None, "Patch Panel");
        raw.face = Some("Rear".to_string());
        let record = normalize_entry(&raw, &NormalizerOptions::default()).unwrap();
        assert_eq!(record.face, Face::Rear);
    }

    #[test]
    fn rejected_rows_do_not_affect_siblings() {
        let rows = vec![
            entry(Some(FieldValue::Number(1.0)), None, "Good One"),
            RawDeviceEntry::default(), // nameless
            entry(Some(FieldValue::Number(5.0)), None, "Good Two"),
        ];
        let records = normalize_records(&rows, &NormalizerOptions::default());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].brand_model, "Good One");
        assert_eq!(records[1].brand_model, "Good Two");
    }
}
