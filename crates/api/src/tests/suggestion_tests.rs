// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for location suggestions.

use binloc_domain::{
    Accessibility, CapacitySnapshot, LocationId, LocationRecord, LocationStatus, ScoringCriteria,
    Suitability,
};
use std::collections::BTreeMap;

use super::helpers::create_test_record;
use crate::{SuggestionResponse, rank_locations};

fn create_candidates() -> Vec<LocationRecord> {
    vec![
        create_test_record("A", "10", "1", LocationStatus::Empty),
        create_test_record("A", "2", "1", LocationStatus::Empty),
        create_test_record("A", "1", "3", LocationStatus::Empty),
        create_test_record("B", "1", "1", LocationStatus::Reserved),
        create_test_record("B", "2", "1", LocationStatus::Empty)
            .with_accessibility(Accessibility::Forklift),
        create_test_record("C", "1", "1", LocationStatus::Empty).deactivated(),
    ]
}

#[test]
fn test_rank_locations_orders_best_first() {
    let candidates: Vec<LocationRecord> = create_candidates();

    let response: SuggestionResponse =
        rank_locations(&candidates, &BTreeMap::new(), &ScoringCriteria::default(), None);

    let codes: Vec<&str> = response
        .suggestions
        .iter()
        .map(|s| s.code.as_str())
        .collect();
    assert_eq!(response.evaluated, 6);
    assert_eq!(codes, vec!["B-2-1", "A-2-1", "A-10-1", "A-1-3"]);
    assert_eq!(response.suggestions[0].score, 85);
    assert_eq!(response.suggestions[1].score, 75);
}

#[test]
fn test_rank_locations_respects_limit() {
    let candidates: Vec<LocationRecord> = create_candidates();

    let response: SuggestionResponse =
        rank_locations(&candidates, &BTreeMap::new(), &ScoringCriteria::default(), Some(2));

    assert_eq!(response.suggestions.len(), 2);
    assert_eq!(response.suggestions[0].code, "B-2-1");
}

#[test]
fn test_rank_locations_drops_blocked_candidates() {
    let candidates: Vec<LocationRecord> = vec![
        create_test_record("A", "1", "1", LocationStatus::Empty).with_capacity(Some(100.0), None),
        create_test_record("A", "2", "1", LocationStatus::Empty).with_capacity(Some(1000.0), None),
    ];
    let criteria: ScoringCriteria = ScoringCriteria {
        required_weight: Some(700.0),
        ..ScoringCriteria::default()
    };

    let response: SuggestionResponse = rank_locations(&candidates, &BTreeMap::new(), &criteria, None);

    assert_eq!(response.suggestions.len(), 1);
    assert_eq!(response.suggestions[0].code, "A-2-1");
    assert_eq!(response.suggestions[0].score, 40 + 30 + 20);
}

#[test]
fn test_rank_locations_breaks_ties_by_id() {
    let mut first: LocationRecord = create_test_record("A", "1", "1", LocationStatus::Empty);
    let mut second: LocationRecord = create_test_record("A", "1", "1", LocationStatus::Empty);
    if second.id < first.id {
        std::mem::swap(&mut first, &mut second);
    }

    let forward: SuggestionResponse =
        rank_locations(&[first.clone(), second.clone()], &BTreeMap::new(), &ScoringCriteria::default(), None);
    let backward: SuggestionResponse =
        rank_locations(&[second, first.clone()], &BTreeMap::new(), &ScoringCriteria::default(), None);

    assert_eq!(forward, backward);
    assert_eq!(forward.suggestions[0].location_id, first.id);
}

#[test]
fn test_rank_locations_uses_capacity_snapshots() {
    let loaded: LocationRecord = create_test_record("A", "1", "1", LocationStatus::Occupied)
        .with_capacity(Some(1000.0), None);
    let spare: LocationRecord = create_test_record("A", "2", "1", LocationStatus::Occupied)
        .with_capacity(Some(1000.0), None);
    let snapshots: BTreeMap<LocationId, CapacitySnapshot> = [
        (loaded.id, CapacitySnapshot::new(Some(1000.0), None, 900.0)),
        (spare.id, CapacitySnapshot::new(Some(1000.0), None, 100.0)),
    ]
    .into_iter()
    .collect();
    let criteria: ScoringCriteria = ScoringCriteria {
        required_weight: Some(500.0),
        ..ScoringCriteria::default()
    };

    let response: SuggestionResponse =
        rank_locations(&[loaded, spare.clone()], &snapshots, &criteria, None);

    assert_eq!(response.evaluated, 2);
    assert_eq!(response.suggestions.len(), 1);
    assert_eq!(response.suggestions[0].location_id, spare.id);
    assert_ne!(response.suggestions[0].suitability, Suitability::Unsuitable);
}

#[test]
fn test_rank_locations_without_snapshot_bounds_by_weight_limit() {
    let candidates: Vec<LocationRecord> = vec![
        create_test_record("A", "1", "1", LocationStatus::Occupied).with_capacity(Some(100.0), None),
    ];
    let criteria: ScoringCriteria = ScoringCriteria {
        required_weight: Some(500.0),
        ..ScoringCriteria::default()
    };

    let response: SuggestionResponse =
        rank_locations(&candidates, &BTreeMap::new(), &criteria, None);

    assert!(response.suggestions.is_empty());
}
