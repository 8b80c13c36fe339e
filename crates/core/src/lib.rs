// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod bulk;
mod codegen;
mod error;
mod grid;
mod natural;
mod range;
mod scoring;

#[cfg(test)]
mod tests;

use binloc_domain::{LocationFieldValues, LocationTemplate, TemplateIssue};

// Re-export public types and functions
pub use bulk::{
    GeneratedLocation, MAX_BULK_COMBINATIONS, RangeMap, count_combinations, generate_locations,
    missing_required_ranges,
};
pub use codegen::{
    ZERO_PAD_WIDTH, extract_field_names, format_value, format_values, generate_code,
    validate_format,
};
pub use error::GenerationError;
pub use grid::{FieldPartition, calculate_grid_layout, partition_fields, partition_layers};
pub use natural::{natural_cmp, natural_sort};
pub use range::{RangeSpec, numeric_range, parse_alphabetic_range, parse_list};
pub use scoring::{LEVEL_FIELD_ALIASES, ZONE_FIELD_ALIASES, score_location};

/// Validates a template completely.
///
/// This is a read-only check that never fails.
///
/// # Arguments
///
/// * `template` - The template to validate
///
/// # Returns
///
/// The structural issues of the template followed by the problems of its
/// code format. An empty list means the template is valid.
#[must_use]
pub fn validate_template(template: &LocationTemplate) -> Vec<TemplateIssue> {
    let mut issues: Vec<TemplateIssue> = binloc_domain::validate_template_structure(template);
    issues.extend(
        validate_format(template.code_format(), template.ordered_fields())
            .into_iter()
            .map(TemplateIssue::from),
    );
    issues
}

/// Generates a code from a template's own format and formatting rules.
#[must_use]
pub fn generate_template_code(template: &LocationTemplate, values: &LocationFieldValues) -> String {
    generate_code(template.code_format(), values, template.rules())
}
