// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use binloc::GenerationError;
use binloc_domain::DomainError;
use thiserror::Error;

/// Most conflicting codes named in a conflict error.
pub const CONFLICT_REPORT_LIMIT: usize = 5;

/// API-level errors.
///
/// These wrap core and domain errors and represent the API contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Bulk generation was rejected before enumeration.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// A domain rule was violated.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The ranges describe no location at all.
    #[error("The ranges do not describe any location")]
    NoCreatableLocations,

    /// Generated codes already exist in the warehouse.
    #[error("Locations already exist: {}", .codes.join(", "))]
    ConflictingCodes {
        /// The first conflicting codes, in generation order.
        codes: Vec<String>,
        /// The total number of conflicts.
        total: usize,
    },

    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}

impl ApiError {
    /// Builds a conflict error naming at most [`CONFLICT_REPORT_LIMIT`] codes.
    #[must_use]
    pub fn conflicting(conflicts: &[String]) -> Self {
        Self::ConflictingCodes {
            codes: conflicts
                .iter()
                .take(CONFLICT_REPORT_LIMIT)
                .cloned()
                .collect(),
            total: conflicts.len(),
        }
    }

    /// Returns the input field this error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::Generation(GenerationError::MissingRequiredRanges { .. }) => Some("ranges"),
            Self::Domain(DomainError::DuplicateFieldName(_) | DomainError::UnknownField(_)) => {
                Some("fields")
            }
            _ => None,
        }
    }
}
