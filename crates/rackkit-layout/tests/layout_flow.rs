//! End-to-end flow: parser output -> normalization -> slot geometry ->
//! placement lifecycle, the way the application drives the engine.

use rackkit_core::{CabinetPlacement2D, GridConfig, RawDeviceEntry};
use rackkit_layout::{
    compute_cabinet_geometry, normalize_records, CabinetGeometry, LayoutSynchronizer,
    NormalizerOptions,
};

/// A cabinet sheet as the spreadsheet collaborator delivers it: one JSON
/// array of loosely typed rows.
fn parse_rows(json: &str) -> Vec<RawDeviceEntry> {
    serde_json::from_str(json).expect("parser output should deserialize")
}

#[test]
fn parsed_sheet_renders_as_slots() {
    let rows = parse_rows(
        r#"[
            {"Rack": 1, "U": 2, "BrandModel": "Server X", "Face": "front", "Owner": "core-infra"},
            {"Rack": "12 rear", "U": "4", "BrandModel": "Storage Y", "Face": "REAR"},
            {"Rack": 40, "U": "BLADE", "BrandModel": "Blade Chassis"}
        ]"#,
    );
    let records = normalize_records(&rows, &NormalizerOptions::default());
    assert_eq!(records.len(), 3);

    let config = GridConfig::default();
    let geometry = compute_cabinet_geometry(&records, &config);
    let CabinetGeometry::Slots(slots) = geometry else {
        panic!("expected slots, got {geometry:?}");
    };
    assert_eq!(slots.len(), 3);

    // "Rack 1, U 2" occupies units 1-2: offset 40 from the top of a 42U rack.
    assert_eq!(slots[0].top_offset_units, 40.0);
    assert_eq!(slots[0].span_units, 2.0);
    // "12 rear" parses as start unit 12; the BLADE span defaults to 1U.
    assert_eq!(slots[1].top_offset_units, 42.0 - 15.0);
    assert_eq!(slots[2].span_units, 1.0);
}

#[test]
fn oversized_sheet_collapses_and_annotates() {
    let rows = parse_rows(
        r#"[
            {"Rack": 1, "U": 4, "BrandModel": "Core Router"},
            {"Rack": 30, "U": 20, "BrandModel": "Modular Chassis"}
        ]"#,
    );
    let records = normalize_records(&rows, &NormalizerOptions::default());
    let geometry = compute_cabinet_geometry(&records, &GridConfig::default());

    let CabinetGeometry::Overflow(slab) = geometry else {
        panic!("expected overflow slab, got {geometry:?}");
    };
    assert_eq!(slab.label, "Core Router");
    assert_eq!(slab.occupied_units, 49.0);
}

#[test]
fn load_edit_commit_lifecycle() {
    let config = GridConfig::default();
    let mut sync = LayoutSynchronizer::new();
    let names: Vec<String> = ["Cab2", "Cab10", "Cab1"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    sync.load_dataset(&names, &config);

    // Natural order on the world X axis.
    let x1 = sync.store().get_position_3d("Cab1").unwrap().x;
    let x2 = sync.store().get_position_3d("Cab2").unwrap().x;
    let x10 = sync.store().get_position_3d("Cab10").unwrap().x;
    assert!(x1 < x2 && x2 < x10);

    // Drag Cab1 with a 10px grid; the stored position snaps.
    let snapped = sync
        .apply_floor_plan_edit("Cab1", CabinetPlacement2D::new(103.0, 96.0), 10.0)
        .unwrap();
    assert_eq!(snapped, CabinetPlacement2D::new(100.0, 100.0));

    // A broken drag event for Cab2 changes nothing, for any cabinet.
    let before_2 = sync.store().get_position_2d("Cab2").unwrap();
    let before_10 = sync.store().get_position_2d("Cab10").unwrap();
    sync.apply_floor_plan_edit("Cab2", CabinetPlacement2D::new(f64::NAN, 5.0), 10.0);
    assert_eq!(sync.store().get_position_2d("Cab2"), Some(before_2));
    assert_eq!(sync.store().get_position_2d("Cab10"), Some(before_10));

    // Commit applies the staged floor plan to world space.
    let committed = sync.commit_floor_plan_to_world(&config);
    assert_eq!(committed, 3);
    let cab1_world = sync.store().get_position_3d("Cab1").unwrap();
    assert_eq!(cab1_world.y, config.frame_total_height_m() / 2.0);
}

#[test]
fn reload_replaces_the_whole_dataset() {
    let config = GridConfig::default();
    let mut sync = LayoutSynchronizer::new();
    sync.load_dataset(&["Old".to_string()], &config);
    sync.apply_floor_plan_edit("Old", CabinetPlacement2D::new(50.0, 50.0), 0.0);

    sync.load_dataset(&["New".to_string()], &config);
    assert!(sync.store().get_position_2d("Old").is_none());
    assert!(sync.store().get_position_2d("New").is_some());
    assert_eq!(sync.store().len(), 1);
}

#[test]
fn empty_and_fully_excluded_cabinets_render_differently() {
    let config = GridConfig::default();
    assert_eq!(
        compute_cabinet_geometry(&[], &config),
        CabinetGeometry::NoData
    );

    let rows = parse_rows(r#"[{"Rack": 50, "U": 1, "BrandModel": "Lost Server"}]"#);
    let records = normalize_records(&rows, &NormalizerOptions::default());
    assert_eq!(
        compute_cabinet_geometry(&records, &config),
        CabinetGeometry::Slots(Vec::new())
    );
}
