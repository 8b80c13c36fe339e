// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing or editing domain values.
///
/// Validation of user-authored templates does not go through this type;
/// see [`crate::TemplateIssue`], which is collected into lists instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Two fields in the same template share a name.
    DuplicateFieldName(String),
    /// A field name was referenced that the template does not define.
    UnknownField(String),
    /// A location status string could not be parsed.
    InvalidLocationStatus(String),
    /// A suitability label could not be parsed.
    InvalidSuitability(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateFieldName(name) => {
                write!(f, "Field '{name}' is defined more than once in the template")
            }
            Self::UnknownField(name) => write!(f, "Field '{name}' is not part of the template"),
            Self::InvalidLocationStatus(status) => {
                write!(
                    f,
                    "Invalid location status: '{status}'. Must be one of empty, occupied, reserved, inactive"
                )
            }
            Self::InvalidSuitability(label) => write!(f, "Invalid suitability: '{label}'"),
        }
    }
}

impl std::error::Error for DomainError {}
