// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Location template model.
//!
//! A template describes how a warehouse's storage-location codes are built:
//! an ordered set of location fields (aisle, rack, level, ...) and a code
//! format such as `{aisle}-{rack}-{level}` that references them.
//!
//! Fields live in a store keyed by [`FieldName`]. Reordering a field only
//! changes its `order` integer, never its identity, so values keyed by name
//! stay valid across reorders.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The separator used when a template does not specify one.
pub const DEFAULT_SEPARATOR: &str = "-";

/// The identifying key of a location field.
///
/// Names are trimmed on construction. Comparison is plain string comparison,
/// which keeps [`FieldName`] usable as a `BTreeMap` key that can be looked up
/// by `&str`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FieldName(String);

impl FieldName {
    /// Creates a new field name.
    ///
    /// # Arguments
    ///
    /// * `name` - The field name (surrounding whitespace is removed)
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_string())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `{name}` placeholder that references this field in a code format.
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("{{{}}}", self.0)
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl From<FieldName> for String {
    fn from(name: FieldName) -> Self {
        name.0
    }
}

const fn default_true() -> bool {
    true
}

/// A single dimension of a location hierarchy (aisle, rack, level, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationField {
    /// The unique key of the field within its template.
    pub name: FieldName,
    /// Display label shown to operators.
    pub label: String,
    /// Position of the field in the template's total order.
    pub order: i32,
    /// Whether bulk generation requires a non-empty range for this field.
    #[serde(default = "default_true")]
    pub required: bool,
}

impl LocationField {
    /// Creates a new location field.
    ///
    /// # Arguments
    ///
    /// * `name` - The unique field key
    /// * `label` - The display label
    /// * `order` - The field's position in the template order
    /// * `required` - Whether the field must receive a range during bulk generation
    #[must_use]
    pub fn new(name: &str, label: &str, order: i32, required: bool) -> Self {
        Self {
            name: FieldName::new(name),
            label: label.trim().to_string(),
            order,
            required,
        }
    }

    /// Total order over fields: by `order`, ties broken by `name`.
    #[must_use]
    pub fn compare_order(&self, other: &Self) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Case and padding rules applied to field values before they enter a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatRules {
    /// Uppercase values that consist only of letters.
    pub auto_uppercase: bool,
    /// Left-pad values that consist only of digits to a width of two.
    pub zero_padding: bool,
}

impl Default for FormatRules {
    fn default() -> Self {
        Self {
            auto_uppercase: true,
            zero_padding: true,
        }
    }
}

impl FormatRules {
    /// Rules that leave every value untouched.
    #[must_use]
    pub const fn verbatim() -> Self {
        Self {
            auto_uppercase: false,
            zero_padding: false,
        }
    }
}

/// The structure of every location code in one warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TemplateWire", into = "TemplateWire")]
pub struct LocationTemplate {
    fields: BTreeMap<FieldName, LocationField>,
    code_format: String,
    separator: String,
    rules: FormatRules,
}

/// Flat, backend-compatible representation of a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TemplateWire {
    fields: Vec<LocationField>,
    code_format: String,
    #[serde(default = "default_separator")]
    separator: String,
    #[serde(default = "default_true")]
    auto_uppercase: bool,
    #[serde(default = "default_true")]
    zero_padding: bool,
}

fn default_separator() -> String {
    String::from(DEFAULT_SEPARATOR)
}

impl TryFrom<TemplateWire> for LocationTemplate {
    type Error = DomainError;

    fn try_from(wire: TemplateWire) -> Result<Self, Self::Error> {
        let template: Self = Self::new(wire.fields, &wire.code_format)?
            .with_separator(&wire.separator)
            .with_rules(FormatRules {
                auto_uppercase: wire.auto_uppercase,
                zero_padding: wire.zero_padding,
            });
        Ok(template)
    }
}

impl From<LocationTemplate> for TemplateWire {
    fn from(template: LocationTemplate) -> Self {
        let fields: Vec<LocationField> = template.ordered_fields().into_iter().cloned().collect();
        Self {
            fields,
            code_format: template.code_format,
            separator: template.separator,
            auto_uppercase: template.rules.auto_uppercase,
            zero_padding: template.rules.zero_padding,
        }
    }
}

impl LocationTemplate {
    /// Creates a template with the default separator and formatting rules.
    ///
    /// The code format is stored as given; whether it references every field is
    /// checked by template validation, not here.
    ///
    /// # Arguments
    ///
    /// * `fields` - The location fields, in any order
    /// * `code_format` - The code format, e.g. `{aisle}-{rack}`
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateFieldName`] if two fields share a name.
    pub fn new(fields: Vec<LocationField>, code_format: &str) -> Result<Self, DomainError> {
        let mut store: BTreeMap<FieldName, LocationField> = BTreeMap::new();
        for field in fields {
            if store.contains_key(&field.name) {
                return Err(DomainError::DuplicateFieldName(field.name.to_string()));
            }
            store.insert(field.name.clone(), field);
        }

        Ok(Self {
            fields: store,
            code_format: code_format.to_string(),
            separator: default_separator(),
            rules: FormatRules::default(),
        })
    }

    /// Returns this template with a different separator.
    #[must_use]
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    /// Returns this template with different formatting rules.
    #[must_use]
    pub fn with_rules(mut self, rules: FormatRules) -> Self {
        self.rules = rules;
        self
    }

    /// Returns a copy of this template with one field moved to a new order.
    ///
    /// Only the field's `order` changes; its name and every other field are
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownField`] if the template has no such field.
    pub fn with_field_order(&self, name: &str, order: i32) -> Result<Self, DomainError> {
        let mut updated: Self = self.clone();
        let field: &mut LocationField = updated
            .fields
            .get_mut(name)
            .ok_or_else(|| DomainError::UnknownField(name.to_string()))?;
        field.order = order;
        Ok(updated)
    }

    /// Returns the fields sorted by `order`, ties broken by `name`.
    #[must_use]
    pub fn ordered_fields(&self) -> Vec<&LocationField> {
        let mut fields: Vec<&LocationField> = self.fields.values().collect();
        fields.sort_by(|a, b| a.compare_order(b));
        fields
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&LocationField> {
        self.fields.get(name)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns the code format string.
    #[must_use]
    pub fn code_format(&self) -> &str {
        &self.code_format
    }

    /// Returns the separator used to join field values into grid keys.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns the formatting rules.
    #[must_use]
    pub const fn rules(&self) -> FormatRules {
        self.rules
    }
}

/// Values for the fields of one location, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationFieldValues(BTreeMap<FieldName, String>);

impl LocationFieldValues {
    /// Creates an empty value map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builds a value map from `(name, value)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .map(|(name, value)| (FieldName::new(name), (*value).to_string()))
            .collect()
    }

    /// Returns the value for a field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Sets the value for a field, replacing any previous value.
    pub fn insert(&mut self, name: FieldName, value: String) {
        self.0.insert(name, value);
    }

    /// Returns the first value whose field name matches one of `aliases`,
    /// ignoring ASCII case. Aliases are tried in the order given.
    #[must_use]
    pub fn get_by_alias(&self, aliases: &[&str]) -> Option<&str> {
        aliases.iter().find_map(|alias| {
            self.0
                .iter()
                .find(|(name, _)| name.as_str().eq_ignore_ascii_case(alias))
                .map(|(_, value)| value.as_str())
        })
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &str)> {
        self.0.iter().map(|(name, value)| (name, value.as_str()))
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the map holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(FieldName, String)> for LocationFieldValues {
    fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
