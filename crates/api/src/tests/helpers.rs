// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use binloc::{RangeMap, RangeSpec};
use binloc_domain::{
    FieldName, LocationField, LocationFieldValues, LocationRecord, LocationStatus,
    LocationTemplate,
};
use uuid::Uuid;

pub fn create_test_template() -> LocationTemplate {
    LocationTemplate::new(
        vec![
            LocationField::new("aisle", "Sor", 1, true),
            LocationField::new("rack", "Allvany", 2, true),
            LocationField::new("level", "Szint", 3, true),
        ],
        "{aisle}-{rack}-{level}",
    )
    .unwrap()
}

/// Aisles A-B, racks 1-3, levels 1-2: twelve locations.
pub fn create_test_ranges() -> RangeMap {
    [
        ("aisle", RangeSpec::alphabetic("A-B")),
        ("rack", RangeSpec::numeric(1, 3)),
        ("level", RangeSpec::numeric(1, 2)),
    ]
    .into_iter()
    .map(|(name, spec)| (FieldName::new(name), spec))
    .collect()
}

pub fn create_test_record(aisle: &str, rack: &str, level: &str, status: LocationStatus) -> LocationRecord {
    LocationRecord::new(
        Uuid::new_v4(),
        format!("{aisle}-{rack}-{level}"),
        status,
        LocationFieldValues::from_pairs(&[("aisle", aisle), ("rack", rack), ("level", level)]),
    )
}
