// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk location generation.
//!
//! Every field of a template receives a [`RangeSpec`]; the generated
//! locations are the Cartesian product of the expanded ranges.
//!
//! ## Rules
//!
//! - Fields are taken in template order (`order`, then `name`).
//! - A required field must have a range that expands to at least one token.
//!   Missing required ranges are reported together and nothing is generated.
//! - An optional field with no range, or with a range that expands to nothing,
//!   contributes a single empty value.
//! - The number of combinations is computed from the ranges before anything is
//!   expanded and may not exceed [`MAX_BULK_COMBINATIONS`].
//! - Output order is the product order: the first field varies slowest, and
//!   each field follows its own token order.

use crate::codegen::{format_value, generate_code};
use crate::error::GenerationError;
use crate::range::RangeSpec;
use binloc_domain::{
    FieldName, FormatRules, LocationField, LocationFieldValues, LocationTemplate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Upper bound on the number of locations a single bulk generation may produce.
pub const MAX_BULK_COMBINATIONS: u64 = 10_000;

/// Ranges for a bulk generation, keyed by field name.
pub type RangeMap = BTreeMap<FieldName, RangeSpec>;

/// One location produced by bulk generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLocation {
    /// The generated code.
    pub code: String,
    /// The formatted value of every field.
    pub location_data: LocationFieldValues,
}

/// Returns the required fields whose range is absent or expands to nothing,
/// in template order.
#[must_use]
pub fn missing_required_ranges(template: &LocationTemplate, ranges: &RangeMap) -> Vec<String> {
    template
        .ordered_fields()
        .into_iter()
        .filter(|field| field.required)
        .filter(|field| {
            ranges
                .get(field.name.as_str())
                .is_none_or(|spec| spec.token_count() == 0)
        })
        .map(|field| field.name.to_string())
        .collect()
}

/// Counts the locations a bulk generation would produce, without producing them.
///
/// A template without fields produces nothing.
///
/// # Errors
///
/// Returns an error if:
/// - A required field has no usable range
/// - The count exceeds [`MAX_BULK_COMBINATIONS`]
pub fn count_combinations(
    template: &LocationTemplate,
    ranges: &RangeMap,
) -> Result<u64, GenerationError> {
    let missing: Vec<String> = missing_required_ranges(template, ranges);
    if !missing.is_empty() {
        return Err(GenerationError::MissingRequiredRanges { fields: missing });
    }

    let fields: Vec<&LocationField> = template.ordered_fields();
    if fields.is_empty() {
        return Ok(0);
    }

    let count: u64 = fields
        .iter()
        .map(|field| {
            ranges
                .get(field.name.as_str())
                .map_or(0, RangeSpec::token_count)
                .max(1)
        })
        .fold(1_u64, u64::saturating_mul);

    if count > MAX_BULK_COMBINATIONS {
        tracing::warn!(
            count,
            max = MAX_BULK_COMBINATIONS,
            "Bulk generation exceeds combination ceiling"
        );
        return Err(GenerationError::TooManyCombinations {
            count,
            max: MAX_BULK_COMBINATIONS,
        });
    }

    Ok(count)
}

/// Expands the ranges of every field, substituting a single empty token for
/// fields that expand to nothing.
fn token_lists(
    fields: &[&LocationField],
    ranges: &RangeMap,
    rules: FormatRules,
) -> Vec<Vec<String>> {
    fields
        .iter()
        .map(|field| {
            let tokens: Vec<String> = ranges
                .get(field.name.as_str())
                .map(|spec| spec.tokens(rules))
                .unwrap_or_default();
            if tokens.is_empty() {
                vec![String::new()]
            } else {
                tokens
            }
        })
        .collect()
}

/// Generates every location described by the ranges.
///
/// Enumeration is iterative (an odometer over per-field token indices), so the
/// number of fields does not affect stack depth.
///
/// # Arguments
///
/// * `template` - The template whose fields and format drive generation
/// * `ranges` - One range per field; optional fields may be omitted
///
/// # Returns
///
/// The generated locations in product order. Applying
/// [`generate_code`] to a row's `location_data` reproduces its `code`.
///
/// # Errors
///
/// Returns an error if:
/// - A required field has no usable range
/// - The ranges describe more than [`MAX_BULK_COMBINATIONS`] locations
pub fn generate_locations(
    template: &LocationTemplate,
    ranges: &RangeMap,
) -> Result<Vec<GeneratedLocation>, GenerationError> {
    let count: u64 = count_combinations(template, ranges)?;
    if count == 0 {
        return Ok(Vec::new());
    }

    let fields: Vec<&LocationField> = template.ordered_fields();
    let rules: FormatRules = template.rules();
    let tokens: Vec<Vec<String>> = token_lists(&fields, ranges, rules);

    tracing::debug!(
        field_count = fields.len(),
        count,
        "Enumerating bulk location combinations"
    );

    let mut locations: Vec<GeneratedLocation> =
        Vec::with_capacity(usize::try_from(count).unwrap_or_default());
    let mut indices: Vec<usize> = vec![0; fields.len()];

    loop {
        let location_data: LocationFieldValues = fields
            .iter()
            .zip(&tokens)
            .zip(&indices)
            .map(|((field, field_tokens), &index)| {
                (field.name.clone(), format_value(&field_tokens[index], rules))
            })
            .collect();
        let code: String = generate_code(template.code_format(), &location_data, rules);
        locations.push(GeneratedLocation {
            code,
            location_data,
        });

        // Advance the last field first; stop once the first field wraps.
        let mut position: usize = indices.len();
        loop {
            if position == 0 {
                return Ok(locations);
            }
            position -= 1;
            indices[position] += 1;
            if indices[position] < tokens[position].len() {
                break;
            }
            indices[position] = 0;
        }
    }
}
