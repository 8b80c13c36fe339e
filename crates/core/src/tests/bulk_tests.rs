// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for bulk location generation.

use binloc_domain::{LocationField, LocationTemplate};

use super::helpers::{create_compact_template, create_ranges, create_test_template};
use crate::{
    GeneratedLocation, GenerationError, MAX_BULK_COMBINATIONS, RangeMap, RangeSpec,
    count_combinations, generate_code, generate_locations, missing_required_ranges,
};

fn codes(locations: &[GeneratedLocation]) -> Vec<&str> {
    locations.iter().map(|l| l.code.as_str()).collect()
}

#[test]
fn test_generate_locations_product_order() {
    let template: LocationTemplate = create_compact_template();
    let ranges: RangeMap = create_ranges(vec![
        ("aisle", RangeSpec::alphabetic("A-B")),
        ("rack", RangeSpec::numeric(1, 2)),
    ]);

    let locations: Vec<GeneratedLocation> = generate_locations(&template, &ranges).unwrap();

    assert_eq!(codes(&locations), vec!["A1", "A2", "B1", "B2"]);
}

#[test]
fn test_generate_locations_follows_field_order_not_name_order() {
    let template: LocationTemplate = create_test_template()
        .with_field_order("level", 0)
        .unwrap();
    let ranges: RangeMap = create_ranges(vec![
        ("aisle", RangeSpec::list("A")),
        ("rack", RangeSpec::numeric(1, 2)),
        ("level", RangeSpec::numeric(1, 2)),
    ]);

    let locations: Vec<GeneratedLocation> = generate_locations(&template, &ranges).unwrap();

    // level varies slowest now
    assert_eq!(
        codes(&locations),
        vec!["A-01-01", "A-02-01", "A-01-02", "A-02-02"]
    );
}

#[test]
fn test_generated_codes_round_trip() {
    let template: LocationTemplate = create_test_template();
    let ranges: RangeMap = create_ranges(vec![
        ("aisle", RangeSpec::alphabetic("a-c")),
        ("rack", RangeSpec::numeric(9, 11)),
        ("level", RangeSpec::list("1, top")),
    ]);

    let locations: Vec<GeneratedLocation> = generate_locations(&template, &ranges).unwrap();

    assert_eq!(locations.len(), 18);
    for location in &locations {
        assert_eq!(
            generate_code(template.code_format(), &location.location_data, template.rules()),
            location.code
        );
    }
    assert_eq!(locations[0].code, "A-09-01");
    assert_eq!(locations[1].code, "A-09-TOP");
    assert_eq!(locations[0].location_data.get("level"), Some("01"));
}

#[test]
fn test_generate_locations_count_matches_combinations() {
    let template: LocationTemplate = create_test_template();
    let ranges: RangeMap = create_ranges(vec![
        ("aisle", RangeSpec::alphabetic("A-D")),
        ("rack", RangeSpec::numeric(1, 5)),
        ("level", RangeSpec::numeric(1, 3)),
    ]);

    let count: u64 = count_combinations(&template, &ranges).unwrap();
    let locations: Vec<GeneratedLocation> = generate_locations(&template, &ranges).unwrap();

    assert_eq!(count, 60);
    assert_eq!(locations.len() as u64, count);
}

#[test]
fn test_missing_required_ranges_are_reported_together() {
    let template: LocationTemplate = create_test_template();
    let ranges: RangeMap = create_ranges(vec![
        ("rack", RangeSpec::numeric(1, 2)),
        ("level", RangeSpec::numeric(3, 1)),
    ]);

    let result: Result<Vec<GeneratedLocation>, GenerationError> =
        generate_locations(&template, &ranges);

    assert_eq!(
        result.unwrap_err(),
        GenerationError::MissingRequiredRanges {
            fields: vec![String::from("aisle"), String::from("level")]
        }
    );
    assert_eq!(
        missing_required_ranges(&template, &ranges),
        vec!["aisle", "level"]
    );
}

#[test]
fn test_optional_field_without_range_contributes_empty_value() {
    let template: LocationTemplate = LocationTemplate::new(
        vec![
            LocationField::new("aisle", "Sor", 1, true),
            LocationField::new("bin", "Rekesz", 2, false),
        ],
        "{aisle}{bin}",
    )
    .unwrap();
    let ranges: RangeMap = create_ranges(vec![("aisle", RangeSpec::list("A,B"))]);

    let locations: Vec<GeneratedLocation> = generate_locations(&template, &ranges).unwrap();

    assert_eq!(codes(&locations), vec!["A", "B"]);
    assert_eq!(locations[0].location_data.get("bin"), Some(""));
}

#[test]
fn test_ceiling_is_checked_before_enumeration() {
    let template: LocationTemplate = create_test_template();
    let ranges: RangeMap = create_ranges(vec![
        ("aisle", RangeSpec::alphabetic("A-Z")),
        ("rack", RangeSpec::numeric(1, 1_000_000_000)),
        ("level", RangeSpec::numeric(1, 1_000_000_000)),
    ]);

    let result: Result<u64, GenerationError> = count_combinations(&template, &ranges);

    assert!(matches!(
        result.unwrap_err(),
        GenerationError::TooManyCombinations {
            max: MAX_BULK_COMBINATIONS,
            ..
        }
    ));
}

#[test]
fn test_ceiling_is_inclusive() {
    let template: LocationTemplate = create_compact_template();
    let at_limit: RangeMap = create_ranges(vec![
        ("aisle", RangeSpec::list("A")),
        ("rack", RangeSpec::numeric(1, 10_000)),
    ]);
    let over_limit: RangeMap = create_ranges(vec![
        ("aisle", RangeSpec::list("A")),
        ("rack", RangeSpec::numeric(1, 10_001)),
    ]);

    assert_eq!(count_combinations(&template, &at_limit).unwrap(), 10_000);
    assert_eq!(
        count_combinations(&template, &over_limit).unwrap_err(),
        GenerationError::TooManyCombinations {
            count: 10_001,
            max: MAX_BULK_COMBINATIONS
        }
    );
}

#[test]
fn test_template_without_fields_generates_nothing() {
    let template: LocationTemplate = LocationTemplate::new(Vec::new(), "FIXED").unwrap();

    assert_eq!(count_combinations(&template, &RangeMap::new()).unwrap(), 0);
    assert!(generate_locations(&template, &RangeMap::new()).unwrap().is_empty());
}

#[test]
fn test_generation_error_messages() {
    let missing: GenerationError = GenerationError::MissingRequiredRanges {
        fields: vec![String::from("aisle"), String::from("rack")],
    };
    let too_many: GenerationError = GenerationError::TooManyCombinations {
        count: 20_000,
        max: 10_000,
    };

    assert_eq!(missing.to_string(), "Missing range for required fields: aisle, rack");
    assert!(too_many.to_string().starts_with("Too many combinations: 20000"));
}
