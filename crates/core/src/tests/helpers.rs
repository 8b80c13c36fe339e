// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use binloc_domain::{
    FieldName, FormatRules, LocationField, LocationFieldValues, LocationRecord, LocationStatus,
    LocationTemplate,
};
use uuid::Uuid;

use crate::{RangeMap, RangeSpec};

/// Aisle, rack and level, formatted as `{aisle}-{rack}-{level}`.
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

/// Two fields formatted as `{aisle}{rack}` without padding.
pub fn create_compact_template() -> LocationTemplate {
    LocationTemplate::new(
        vec![
            LocationField::new("aisle", "Sor", 1, true),
            LocationField::new("rack", "Allvany", 2, true),
        ],
        "{aisle}{rack}",
    )
    .unwrap()
    .with_rules(FormatRules {
        auto_uppercase: true,
        zero_padding: false,
    })
}

pub fn create_ranges(pairs: Vec<(&str, RangeSpec)>) -> RangeMap {
    pairs
        .into_iter()
        .map(|(name, spec)| (FieldName::new(name), spec))
        .collect()
}

pub fn create_test_record(code: &str, status: LocationStatus, data: &[(&str, &str)]) -> LocationRecord {
    LocationRecord::new(
        Uuid::new_v4(),
        String::from(code),
        status,
        LocationFieldValues::from_pairs(data),
    )
}

/// An empty record at aisle/rack/level with the given level.
pub fn create_level_record(level: &str) -> LocationRecord {
    create_test_record(
        &format!("A-01-{level}"),
        LocationStatus::Empty,
        &[("aisle", "A"), ("rack", "01"), ("level", level)],
    )
}
