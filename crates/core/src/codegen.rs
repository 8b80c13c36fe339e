// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Location code generation.
//!
//! A code format is plain text with `{field}` placeholders. Generation walks
//! the format once from left to right: placeholders with a value are replaced
//! by the formatted value, placeholders without one are copied verbatim, and
//! substituted values are never scanned again.
//!
//! Values are formatted one field at a time before substitution:
//! 1. with `auto_uppercase`, a value made only of letters is uppercased;
//! 2. with `zero_padding`, a value made only of digits is left-padded with
//!    `'0'` to [`ZERO_PAD_WIDTH`] characters.
//!
//! The padding width is fixed: a `1..200` range still pads `1` to `01`.

use binloc_domain::{FormatError, FormatRules, LocationField, LocationFieldValues};
use std::collections::HashSet;

/// Width that digit-only values are padded to.
pub const ZERO_PAD_WIDTH: usize = 2;

/// A piece of a parsed code format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Splits a format into literal text and `{name}` placeholders.
///
/// A placeholder is a `{`, one or more characters other than braces, and a
/// closing `}`. Anything else (`{}`, an unclosed `{`) is literal text.
fn segments(format: &str) -> Vec<Segment<'_>> {
    let mut parts: Vec<Segment<'_>> = Vec::new();
    let mut rest: &str = format;

    while let Some(open) = rest.find('{') {
        let after_open: &str = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            break;
        };

        let inner: &str = &after_open[..close];
        if let Some(nested) = inner.rfind('{') {
            // `{a{b}`: only the innermost brace can start a placeholder
            let literal_end: usize = open + 1 + nested;
            parts.push(Segment::Literal(&rest[..literal_end]));
            rest = &rest[literal_end..];
            continue;
        }

        let literal_end: usize = open + 1 + close + 1;
        if inner.is_empty() {
            parts.push(Segment::Literal(&rest[..literal_end]));
        } else {
            if open > 0 {
                parts.push(Segment::Literal(&rest[..open]));
            }
            parts.push(Segment::Placeholder(inner));
        }
        rest = &rest[literal_end..];
    }

    if !rest.is_empty() {
        parts.push(Segment::Literal(rest));
    }
    parts
}

fn is_letters_only(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

fn is_digits_only(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Applies the case and padding rules to a single field value.
///
/// Formatting is idempotent: formatting an already formatted value returns it
/// unchanged.
#[must_use]
pub fn format_value(value: &str, rules: FormatRules) -> String {
    let mut formatted: String = value.to_string();

    if rules.auto_uppercase && is_letters_only(&formatted) {
        formatted = formatted.to_uppercase();
    }

    if rules.zero_padding && is_digits_only(&formatted) {
        formatted = format!("{formatted:0>width$}", width = ZERO_PAD_WIDTH);
    }

    formatted
}

/// Generates a location code by substituting field values into a format.
///
/// # Arguments
///
/// * `format` - The code format, e.g. `{aisle}-{rack}`
/// * `values` - Raw field values keyed by field name
/// * `rules` - Formatting applied to each value before substitution
///
/// # Returns
///
/// The code. Placeholders with no value in `values` are left as written.
#[must_use]
pub fn generate_code(format: &str, values: &LocationFieldValues, rules: FormatRules) -> String {
    let mut code: String = String::with_capacity(format.len());

    for segment in segments(format) {
        match segment {
            Segment::Literal(text) => code.push_str(text),
            Segment::Placeholder(name) => match values.get(name) {
                Some(value) => code.push_str(&format_value(value, rules)),
                None => {
                    code.push('{');
                    code.push_str(name);
                    code.push('}');
                }
            },
        }
    }

    code
}

/// Formats every value with the same rules, keeping the field names.
#[must_use]
pub fn format_values(values: &LocationFieldValues, rules: FormatRules) -> LocationFieldValues {
    values
        .iter()
        .map(|(name, value)| (name.clone(), format_value(value, rules)))
        .collect()
}

/// Returns the inner names of all `{...}` placeholders in order of
/// appearance, duplicates included.
#[must_use]
pub fn extract_field_names(format: &str) -> Vec<String> {
    segments(format)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.to_string()),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Checks a code format against a set of fields.
///
/// This function never fails; problems are returned as a list.
///
/// # Arguments
///
/// * `format` - The code format to check
/// * `fields` - The fields the format should reference
///
/// # Returns
///
/// One [`FormatError::MissingPlaceholder`] per field whose placeholder is
/// absent (in the order given), followed by [`FormatError::NoPlaceholders`]
/// when the format has no placeholders at all. An empty list means the format
/// is valid.
pub fn validate_format<'a, I>(format: &str, fields: I) -> Vec<FormatError>
where
    I: IntoIterator<Item = &'a LocationField>,
{
    let names: Vec<String> = extract_field_names(format);
    let present: HashSet<&str> = names.iter().map(String::as_str).collect();

    let mut errors: Vec<FormatError> = fields
        .into_iter()
        .map(|field| &field.name)
        .filter(|name| !present.contains(name.as_str()))
        .map(|name| FormatError::MissingPlaceholder {
            field: name.to_string(),
        })
        .collect();

    if names.is_empty() {
        errors.push(FormatError::NoPlaceholders);
    }

    errors
}
