// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use binloc::RangeMap;
use binloc_domain::{
    Accessibility, ExpiryUrgency, GridDimensions, LocationId, LocationScore, LocationStatus,
    ScoringCriteria, Suitability, TemplateIssue,
};
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

/// Attributes applied to every location of a bulk creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkDefaults {
    /// Maximum load in kilograms; must be positive.
    #[serde(default)]
    pub max_weight: Option<f64>,
    /// Maximum goods height in centimetres; must be positive.
    #[serde(default)]
    pub max_height: Option<f64>,
    /// How goods reach the locations.
    #[serde(default)]
    pub accessibility: Option<Accessibility>,
}

/// Request handed to the creation collaborator.
///
/// Carries the ranges, never the materialized locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkCreateRequest {
    /// The warehouse receiving the locations.
    pub warehouse_id: Uuid,
    /// One range per template field.
    pub ranges: RangeMap,
    /// Attributes shared by all created locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<BulkDefaults>,
}

/// Summary of what a bulk creation would produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkPreviewResponse {
    /// Number of locations the ranges describe.
    pub count: u64,
    /// The first generated codes.
    pub sample_codes: Vec<String>,
    /// Generated codes that already exist, in generation order.
    pub conflicts: Vec<String>,
    /// Whether creation would succeed.
    pub valid: bool,
}

/// Result of validating a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateValidationResponse {
    /// Whether the template has no issues.
    pub valid: bool,
    /// The issues found.
    pub issues: Vec<TemplateIssue>,
    /// One human-readable message per issue.
    pub messages: Vec<String>,
}

/// A ranked candidate location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSuggestion {
    /// The location's identity.
    pub location_id: LocationId,
    /// The location code.
    pub code: String,
    /// Score between 0 and 100.
    pub score: u8,
    /// Band derived from `score`.
    pub suitability: Suitability,
    /// Explanations for the score.
    pub reasons: Vec<String>,
}

impl LocationSuggestion {
    /// Combines a location's identity with its score.
    #[must_use]
    pub fn new(location_id: LocationId, code: String, score: LocationScore) -> Self {
        Self {
            location_id,
            code,
            score: score.score,
            suitability: score.suitability,
            reasons: score.reasons,
        }
    }
}

/// Request to suggest locations for an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// What the item needs.
    #[serde(flatten)]
    pub criteria: ScoringCriteria,
    /// Most suggestions to return.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Ranked suggestions, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// Number of candidates scored.
    pub evaluated: usize,
    /// The suitable candidates.
    pub suggestions: Vec<LocationSuggestion>,
}

/// A location placed on the map grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// The location's identity.
    pub location_id: LocationId,
    /// The location code.
    pub code: String,
    /// The effective occupancy state.
    pub status: LocationStatus,
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

/// One layer of the warehouse map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayerResponse {
    /// The layer value, or `None` when the records were not split into layers.
    pub layer: Option<String>,
    /// Grid keys and positions.
    pub grid: GridDimensions,
    /// Placed locations in row, column, code order.
    pub cells: Vec<GridCell>,
}

/// Urgency of stock with a use-by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryResponse {
    /// The use-by date.
    pub use_by: Date,
    /// Days left, negative once expired.
    pub days_until_expiry: i64,
    /// Band derived from `days_until_expiry`.
    pub urgency: ExpiryUrgency,
}
