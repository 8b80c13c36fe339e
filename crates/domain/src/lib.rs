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

mod error;
mod expiry;
mod location;
mod occupancy;
mod results;
mod template;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use expiry::{ExpiryUrgency, days_until_expiry};
pub use location::{
    Accessibility, CapacitySnapshot, LocationId, LocationRecord, LocationStatus,
};
pub use occupancy::OccupancySummary;
pub use results::{
    GridDimensions, GridPosition, LocationScore, ScoringCriteria, Suitability,
};
pub use template::{
    DEFAULT_SEPARATOR, FieldName, FormatRules, LocationField, LocationFieldValues,
    LocationTemplate,
};
pub use validation::{
    FormatError, MAX_FIELD_LABEL_LENGTH, MAX_FIELD_NAME_LENGTH, MAX_SEPARATOR_LENGTH,
    TemplateIssue, validate_template_structure,
};
