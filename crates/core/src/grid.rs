// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Projection of an arbitrary-dimensional location hierarchy onto a 2-D grid.
//!
//! ## Partition rule
//!
//! Template fields in order are split in two: the first `ceil(n / 2)` form the
//! row group and the rest form the column group. A record's row key is its
//! row-group values joined with the template separator (a missing value
//! contributes an empty string); its column key is built the same way.
//!
//! ## Invariants
//!
//! - Row and column keys are distinct and in natural order.
//! - The result depends only on the set of input records, never on their order.
//! - Records sharing an id are collapsed to one: the record with the smallest
//!   `(code, row key, column key)` wins.
//!
//! Callers filter records to one layer (for example one level) beforehand;
//! [`partition_layers`] helps with that.

use crate::natural::{natural_cmp, natural_sort};
use binloc_domain::{
    GridDimensions, GridPosition, LocationField, LocationId, LocationRecord, LocationTemplate,
};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Template fields split into the row group and the column group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPartition<'a> {
    /// Fields whose values make up the row key.
    pub row_fields: Vec<&'a LocationField>,
    /// Fields whose values make up the column key.
    pub col_fields: Vec<&'a LocationField>,
}

/// Splits the template's ordered fields into row and column groups.
#[must_use]
pub fn partition_fields(template: &LocationTemplate) -> FieldPartition<'_> {
    let mut row_fields: Vec<&LocationField> = template.ordered_fields();
    let row_count: usize = row_fields.len().div_ceil(2);
    let col_fields: Vec<&LocationField> = row_fields.split_off(row_count);
    FieldPartition {
        row_fields,
        col_fields,
    }
}

fn join_key(record: &LocationRecord, fields: &[&LocationField], separator: &str) -> String {
    fields
        .iter()
        .map(|field| record.location_data.get(field.name.as_str()).unwrap_or(""))
        .collect::<Vec<&str>>()
        .join(separator)
}

/// Computes the grid placement of a layer of locations.
///
/// # Arguments
///
/// * `template` - The template whose field order drives the partition
/// * `records` - The locations of one layer, in any order
///
/// # Returns
///
/// The sorted row and column keys and one position per distinct record id.
#[must_use]
pub fn calculate_grid_layout(
    template: &LocationTemplate,
    records: &[LocationRecord],
) -> GridDimensions {
    let partition: FieldPartition<'_> = partition_fields(template);
    let separator: &str = template.separator();

    // (code, row key, col key) per id; the smallest tuple wins
    let mut keyed: BTreeMap<LocationId, (&str, String, String)> = BTreeMap::new();
    for record in records {
        let candidate: (&str, String, String) = (
            record.code.as_str(),
            join_key(record, &partition.row_fields, separator),
            join_key(record, &partition.col_fields, separator),
        );
        match keyed.entry(record.id) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
            Entry::Occupied(mut slot) => {
                if candidate < *slot.get() {
                    slot.insert(candidate);
                }
            }
        }
    }

    let mut row_keys: Vec<String> = keyed
        .values()
        .map(|(_, row, _)| row.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();
    let mut col_keys: Vec<String> = keyed
        .values()
        .map(|(_, _, col)| col.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();
    natural_sort(&mut row_keys);
    natural_sort(&mut col_keys);

    let row_index: HashMap<&str, usize> = index_of(&row_keys);
    let col_index: HashMap<&str, usize> = index_of(&col_keys);

    let positions: BTreeMap<LocationId, GridPosition> = keyed
        .iter()
        .filter_map(|(id, (_, row, col))| {
            let row: usize = *row_index.get(row.as_str())?;
            let col: usize = *col_index.get(col.as_str())?;
            Some((*id, GridPosition { row, col }))
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        rows = row_keys.len(),
        cols = col_keys.len(),
        mapped = positions.len(),
        "Calculated grid layout"
    );

    GridDimensions {
        rows: row_keys.len(),
        cols: col_keys.len(),
        row_keys,
        col_keys,
        positions,
    }
}

fn index_of(keys: &[String]) -> HashMap<&str, usize> {
    keys.iter()
        .enumerate()
        .map(|(index, key)| (key.as_str(), index))
        .collect()
}

/// Groups records by the value of one field, in natural value order.
///
/// Records without the field are grouped under an empty value. Within a
/// group, records keep their input order.
///
/// # Arguments
///
/// * `records` - The locations to group
/// * `field` - The layer field, e.g. `level`
#[must_use]
pub fn partition_layers<'a>(
    records: &'a [LocationRecord],
    field: &str,
) -> Vec<(String, Vec<&'a LocationRecord>)> {
    let mut layers: BTreeMap<&'a str, Vec<&'a LocationRecord>> = BTreeMap::new();
    for record in records {
        let value: &str = record.location_data.get(field).unwrap_or("");
        layers.entry(value).or_default().push(record);
    }

    let mut ordered: Vec<(String, Vec<&'a LocationRecord>)> = layers
        .into_iter()
        .map(|(value, members)| (value.to_string(), members))
        .collect();
    ordered.sort_by(|(a, _), (b, _)| natural_cmp(a, b));
    ordered
}
