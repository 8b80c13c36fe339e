// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::template::{LocationField, LocationTemplate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Longest accepted field name.
pub const MAX_FIELD_NAME_LENGTH: usize = 50;
/// Longest accepted field label.
pub const MAX_FIELD_LABEL_LENGTH: usize = 100;
/// Longest accepted separator.
pub const MAX_SEPARATOR_LENGTH: usize = 5;

/// A problem with a code format relative to a field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatError {
    /// The format never references the field.
    MissingPlaceholder {
        /// The unreferenced field.
        field: String,
    },
    /// The format references no field at all.
    NoPlaceholders,
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPlaceholder { field } => {
                write!(f, "Code format does not contain the {{{field}}} placeholder")
            }
            Self::NoPlaceholders => write!(f, "Code format contains no placeholders"),
        }
    }
}

impl std::error::Error for FormatError {}

/// A problem with a location template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateIssue {
    /// The template defines no fields.
    NoFields,
    /// A field name is empty or too long.
    InvalidFieldName {
        /// The offending name.
        field: String,
    },
    /// A field label is empty or too long.
    InvalidFieldLabel {
        /// The field carrying the label.
        field: String,
    },
    /// A field order is below 1.
    InvalidFieldOrder {
        /// The field.
        field: String,
        /// Its order.
        order: i32,
    },
    /// Two or more fields share an order.
    DuplicateFieldOrder {
        /// The shared order.
        order: i32,
        /// The fields sharing it, in name order.
        fields: Vec<String>,
    },
    /// The separator is longer than allowed.
    SeparatorTooLong {
        /// The separator length in characters.
        length: usize,
    },
    /// The code format does not fit the fields.
    Format(FormatError),
}

impl std::fmt::Display for TemplateIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFields => write!(f, "Template must define at least one field"),
            Self::InvalidFieldName { field } => write!(
                f,
                "Field name '{field}' must be between 1 and {MAX_FIELD_NAME_LENGTH} characters"
            ),
            Self::InvalidFieldLabel { field } => write!(
                f,
                "Label of field '{field}' must be between 1 and {MAX_FIELD_LABEL_LENGTH} characters"
            ),
            Self::InvalidFieldOrder { field, order } => {
                write!(f, "Field '{field}' has order {order}. Must be at least 1")
            }
            Self::DuplicateFieldOrder { order, fields } => {
                write!(f, "Fields {} share order {order}", fields.join(", "))
            }
            Self::SeparatorTooLong { length } => write!(
                f,
                "Separator is {length} characters long. Must be at most {MAX_SEPARATOR_LENGTH}"
            ),
            Self::Format(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for TemplateIssue {}

impl From<FormatError> for TemplateIssue {
    fn from(err: FormatError) -> Self {
        Self::Format(err)
    }
}

/// Validates the structure of a template's fields and separator.
///
/// The code format is not inspected here; callers combine this with code
/// format validation. This function is pure and never fails.
///
/// # Arguments
///
/// * `template` - The template to validate
///
/// # Returns
///
/// Every issue found, in field order. An empty list means the structure is valid.
#[must_use]
pub fn validate_template_structure(template: &LocationTemplate) -> Vec<TemplateIssue> {
    let mut issues: Vec<TemplateIssue> = Vec::new();
    let fields: Vec<&LocationField> = template.ordered_fields();

    // Rule: at least one field
    if fields.is_empty() {
        issues.push(TemplateIssue::NoFields);
    }

    let mut by_order: BTreeMap<i32, Vec<String>> = BTreeMap::new();
    for field in &fields {
        let name: &str = field.name.as_str();

        let name_length: usize = name.chars().count();
        if name_length == 0 || name_length > MAX_FIELD_NAME_LENGTH {
            issues.push(TemplateIssue::InvalidFieldName {
                field: name.to_string(),
            });
        }

        let label_length: usize = field.label.chars().count();
        if label_length == 0 || label_length > MAX_FIELD_LABEL_LENGTH {
            issues.push(TemplateIssue::InvalidFieldLabel {
                field: name.to_string(),
            });
        }

        if field.order < 1 {
            issues.push(TemplateIssue::InvalidFieldOrder {
                field: name.to_string(),
                order: field.order,
            });
        }

        by_order
            .entry(field.order)
            .or_default()
            .push(name.to_string());
    }

    // Rule: orders are unique
    for (order, mut names) in by_order {
        if names.len() > 1 {
            names.sort();
            issues.push(TemplateIssue::DuplicateFieldOrder {
                order,
                fields: names,
            });
        }
    }

    let separator_length: usize = template.separator().chars().count();
    if separator_length > MAX_SEPARATOR_LENGTH {
        issues.push(TemplateIssue::SeparatorTooLong {
            length: separator_length,
        });
    }

    issues
}
