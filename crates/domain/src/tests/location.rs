// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Accessibility, CapacitySnapshot, GridDimensions, GridPosition, LocationFieldValues,
    LocationRecord, LocationStatus, OccupancySummary, Suitability,
};
use std::str::FromStr;
use uuid::Uuid;

fn create_test_record(status: LocationStatus) -> LocationRecord {
    LocationRecord::new(
        Uuid::new_v4(),
        String::from("A-01-1"),
        status,
        LocationFieldValues::from_pairs(&[("aisle", "A"), ("rack", "01"), ("level", "1")]),
    )
}

#[test]
fn test_status_parses_case_insensitively() {
    assert_eq!(
        LocationStatus::from_str("Occupied").unwrap(),
        LocationStatus::Occupied
    );
    assert!(LocationStatus::from_str("full").is_err());
    assert_eq!(LocationStatus::Reserved.to_string(), "reserved");
}

#[test]
fn test_accessibility_parsing() {
    assert_eq!(Accessibility::parse("Forklift"), Accessibility::Forklift);
    assert_eq!(Accessibility::parse("targonca"), Accessibility::Forklift);
    assert_eq!(Accessibility::parse("kézi"), Accessibility::Manual);
    assert_eq!(Accessibility::parse(" daru "), Accessibility::Crane);
    assert_eq!(
        Accessibility::parse("ladder"),
        Accessibility::Other(String::from("ladder"))
    );
}

#[test]
fn test_deactivated_record_is_effectively_inactive() {
    let record: LocationRecord = create_test_record(LocationStatus::Empty).deactivated();
    assert_eq!(record.effective_status(), LocationStatus::Inactive);
}

#[test]
fn test_record_deserializes_backend_json() {
    let json: &str = r#"{
        "id": "6f1c1f5e-1c1a-4c55-9a55-0d6a9b0f1a01",
        "code": "A-01-1",
        "status": "occupied",
        "structure_data": {"aisle": "A", "rack": "01", "level": "1"},
        "max_weight": 500.0,
        "accessibility": "forklift"
    }"#;

    let record: LocationRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.status, LocationStatus::Occupied);
    assert_eq!(record.location_data.get("rack"), Some("01"));
    assert_eq!(record.max_weight, Some(500.0));
    assert_eq!(record.max_height, None);
    assert_eq!(record.accessibility, Some(Accessibility::Forklift));
    assert!(record.is_active);
}

#[test]
fn test_capacity_snapshot_derives_available_weight() {
    let snapshot: CapacitySnapshot = CapacitySnapshot::new(Some(1000.0), None, 250.0);
    assert_eq!(snapshot.available_weight, Some(750.0));
    assert!(snapshot.has_capacity_limits());

    let unlimited: CapacitySnapshot = CapacitySnapshot::new(None, None, 40.0);
    assert_eq!(unlimited.available_weight, None);
    assert!(!unlimited.has_capacity_limits());
}

#[test]
fn test_capacity_snapshot_deserialization_derives_available_weight() {
    let json: &str = r#"{"max_weight": 100.0, "current_weight": 30.0}"#;

    let snapshot: CapacitySnapshot = serde_json::from_str(json).unwrap();

    assert_eq!(snapshot, CapacitySnapshot::new(Some(100.0), None, 30.0));
    assert_eq!(snapshot.available_weight, Some(70.0));
}

#[test]
fn test_capacity_snapshot_deserialization_keeps_explicit_available_weight() {
    let json: &str = r#"{"max_weight": 100.0, "current_weight": 30.0, "available_weight": 10.0}"#;

    let snapshot: CapacitySnapshot = serde_json::from_str(json).unwrap();

    assert_eq!(
        snapshot,
        CapacitySnapshot {
            max_weight: Some(100.0),
            max_height: None,
            current_weight: 30.0,
            available_weight: Some(10.0),
        }
    );
}

#[test]
fn test_capacity_snapshot_deserialization_without_limits() {
    let snapshot: CapacitySnapshot = serde_json::from_str("{}").unwrap();

    assert_eq!(snapshot, CapacitySnapshot::new(None, None, 0.0));
    assert!(!snapshot.has_capacity_limits());
}

#[test]
fn test_capacity_snapshot_from_record() {
    let empty: LocationRecord =
        create_test_record(LocationStatus::Empty).with_capacity(Some(800.0), Some(180.0));
    let snapshot: CapacitySnapshot = CapacitySnapshot::from_record(&empty);
    assert_eq!(snapshot.available_weight, Some(800.0));
    assert_eq!(snapshot.max_height, Some(180.0));

    let occupied: LocationRecord =
        create_test_record(LocationStatus::Occupied).with_capacity(Some(800.0), None);
    assert_eq!(CapacitySnapshot::from_record(&occupied).available_weight, None);
}

#[test]
fn test_suitability_bands() {
    assert_eq!(Suitability::from_score(100), Suitability::Excellent);
    assert_eq!(Suitability::from_score(80), Suitability::Excellent);
    assert_eq!(Suitability::from_score(79), Suitability::Good);
    assert_eq!(Suitability::from_score(60), Suitability::Good);
    assert_eq!(Suitability::from_score(59), Suitability::Fair);
    assert_eq!(Suitability::from_score(40), Suitability::Fair);
    assert_eq!(Suitability::from_score(39), Suitability::Poor);
    assert_eq!(Suitability::from_score(1), Suitability::Poor);
    assert_eq!(Suitability::from_score(0), Suitability::Unsuitable);
    assert!(Suitability::Excellent > Suitability::Good);
}

#[test]
fn test_grid_cell_lookup() {
    let first: Uuid = Uuid::new_v4();
    let second: Uuid = Uuid::new_v4();
    let mut grid: GridDimensions = GridDimensions::default();
    grid.positions.insert(first, GridPosition { row: 0, col: 1 });
    grid.positions.insert(second, GridPosition { row: 1, col: 1 });

    assert_eq!(grid.cell(0, 1), vec![first]);
    assert!(grid.cell(1, 0).is_empty());
    assert_eq!(grid.position_of(&second), Some(GridPosition { row: 1, col: 1 }));
}

#[test]
fn test_occupancy_summary() {
    let records: Vec<LocationRecord> = vec![
        create_test_record(LocationStatus::Occupied),
        create_test_record(LocationStatus::Empty),
        create_test_record(LocationStatus::Empty),
        create_test_record(LocationStatus::Reserved).deactivated(),
    ];

    let summary: OccupancySummary = OccupancySummary::from_records(&records);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.occupied, 1);
    assert_eq!(summary.empty, 2);
    assert_eq!(summary.reserved, 0);
    assert_eq!(summary.inactive, 1);
    assert!((summary.utilization_percent - 25.0).abs() < f64::EPSILON);
}

#[test]
fn test_occupancy_summary_rounds_to_two_decimals() {
    let records: Vec<LocationRecord> = vec![
        create_test_record(LocationStatus::Occupied),
        create_test_record(LocationStatus::Empty),
        create_test_record(LocationStatus::Empty),
    ];
    let summary: OccupancySummary = OccupancySummary::from_records(&records);
    assert!((summary.utilization_percent - 33.33).abs() < 1e-9);

    let empty: OccupancySummary = OccupancySummary::from_records(&[]);
    assert!(empty.utilization_percent.abs() < f64::EPSILON);
}
