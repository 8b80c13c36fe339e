// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Handlers take already-loaded collaborator data (templates, stored locations,
//! existing codes) and return response DTOs. They never perform I/O.

use crate::error::ApiError;
use crate::request_response::{
    BulkCreateRequest, BulkDefaults, BulkPreviewResponse, ExpiryResponse, GridCell,
    GridLayerResponse, LocationSuggestion, SuggestionResponse, TemplateValidationResponse,
};
use binloc::{
    GeneratedLocation, RangeMap, calculate_grid_layout, count_combinations, generate_locations,
    natural_cmp, partition_layers, score_location, validate_template,
};
use binloc_domain::{
    CapacitySnapshot, ExpiryUrgency, GridDimensions, GridPosition, LocationId, LocationRecord,
    LocationScore, LocationTemplate, OccupancySummary, ScoringCriteria, Suitability,
    TemplateIssue, days_until_expiry,
};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use time::Date;
use uuid::Uuid;

/// Number of generated codes returned by a bulk preview.
pub const PREVIEW_SAMPLE_LIMIT: usize = 20;

/// Longest accepted accessibility value in bulk defaults.
pub const MAX_ACCESSIBILITY_LENGTH: usize = 50;

/// Validates a template and reports every issue.
#[must_use]
pub fn validate_template_request(template: &LocationTemplate) -> TemplateValidationResponse {
    let issues: Vec<TemplateIssue> = validate_template(template);
    if !issues.is_empty() {
        tracing::warn!(issue_count = issues.len(), "Template failed validation");
    }

    TemplateValidationResponse {
        valid: issues.is_empty(),
        messages: issues.iter().map(ToString::to_string).collect(),
        issues,
    }
}

fn find_conflicts(locations: &[GeneratedLocation], existing_codes: &[String]) -> Vec<String> {
    let existing: HashSet<&str> = existing_codes.iter().map(String::as_str).collect();
    locations
        .iter()
        .filter(|location| existing.contains(location.code.as_str()))
        .map(|location| location.code.clone())
        .collect()
}

/// Previews a bulk creation without creating anything.
///
/// # Arguments
///
/// * `template` - The warehouse's location template
/// * `ranges` - One range per template field
/// * `existing_codes` - Codes already present in the warehouse
///
/// # Returns
///
/// The number of locations, the first [`PREVIEW_SAMPLE_LIMIT`] codes, the
/// generated codes that already exist, and whether creation would succeed.
///
/// # Errors
///
/// Returns an error if:
/// - A required field has no usable range
/// - The ranges describe too many locations
pub fn preview_bulk(
    template: &LocationTemplate,
    ranges: &RangeMap,
    existing_codes: &[String],
) -> Result<BulkPreviewResponse, ApiError> {
    let locations: Vec<GeneratedLocation> = generate_locations(template, ranges).map_err(|e| {
        tracing::warn!(error = %e, "Bulk preview rejected");
        ApiError::from(e)
    })?;
    let conflicts: Vec<String> = find_conflicts(&locations, existing_codes);

    tracing::info!(
        count = locations.len(),
        conflicts = conflicts.len(),
        "Bulk preview generated"
    );

    Ok(BulkPreviewResponse {
        count: locations.len() as u64,
        sample_codes: locations
            .iter()
            .take(PREVIEW_SAMPLE_LIMIT)
            .map(|location| location.code.clone())
            .collect(),
        valid: conflicts.is_empty() && !locations.is_empty(),
        conflicts,
    })
}

fn validate_limit(field: &str, value: Option<f64>) -> Result<(), ApiError> {
    match value {
        Some(limit) if !limit.is_finite() || limit <= 0.0 => Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Must be a positive number, got {limit}"),
        }),
        _ => Ok(()),
    }
}

/// Validates the shared attributes of a bulk creation.
///
/// # Errors
///
/// Returns an error if a capacity limit is not positive or the accessibility
/// value is too long.
pub fn validate_bulk_defaults(defaults: &BulkDefaults) -> Result<(), ApiError> {
    validate_limit("max_weight", defaults.max_weight)?;
    validate_limit("max_height", defaults.max_height)?;

    if let Some(accessibility) = &defaults.accessibility {
        let length: usize = accessibility.as_str().chars().count();
        if length > MAX_ACCESSIBILITY_LENGTH {
            return Err(ApiError::InvalidInput {
                field: String::from("accessibility"),
                message: format!(
                    "Must be at most {MAX_ACCESSIBILITY_LENGTH} characters, got {length}"
                ),
            });
        }
    }

    Ok(())
}

/// Assembles the request handed to the creation collaborator.
///
/// The ranges are checked the way creation would check them, but the
/// request carries the ranges, not the generated locations.
///
/// # Arguments
///
/// * `warehouse_id` - The warehouse receiving the locations
/// * `template` - The warehouse's location template
/// * `ranges` - One range per template field
/// * `defaults` - Attributes shared by all created locations
/// * `existing_codes` - Codes already present in the warehouse
///
/// # Errors
///
/// Returns an error if:
/// - A default is invalid
/// - A required field has no usable range
/// - The ranges describe too many locations
/// - The ranges describe no location
/// - A generated code already exists
pub fn build_bulk_create_request(
    warehouse_id: Uuid,
    template: &LocationTemplate,
    ranges: RangeMap,
    defaults: Option<BulkDefaults>,
    existing_codes: &[String],
) -> Result<BulkCreateRequest, ApiError> {
    if let Some(defaults) = &defaults {
        validate_bulk_defaults(defaults)?;
    }

    if count_combinations(template, &ranges)? == 0 {
        tracing::warn!(%warehouse_id, "Bulk creation describes no locations");
        return Err(ApiError::NoCreatableLocations);
    }

    let locations: Vec<GeneratedLocation> = generate_locations(template, &ranges)?;
    let conflicts: Vec<String> = find_conflicts(&locations, existing_codes);
    if !conflicts.is_empty() {
        tracing::warn!(
            %warehouse_id,
            conflicts = conflicts.len(),
            "Bulk creation conflicts with existing locations"
        );
        return Err(ApiError::conflicting(&conflicts));
    }

    tracing::info!(%warehouse_id, count = locations.len(), "Bulk creation request built");

    Ok(BulkCreateRequest {
        warehouse_id,
        ranges,
        defaults,
    })
}

fn compare_suggestions(a: &LocationSuggestion, b: &LocationSuggestion) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| natural_cmp(&a.code, &b.code))
        .then_with(|| a.location_id.cmp(&b.location_id))
}

/// Scores candidate locations and returns the suitable ones, best first.
///
/// Ties are broken by natural code order, then by id.
///
/// # Arguments
///
/// * `candidates` - Stored locations to consider
/// * `snapshots` - Current capacity per location; candidates without one are
///   scored from their own attributes
/// * `criteria` - What the item needs
/// * `limit` - Most suggestions to return; `None` returns all
#[must_use]
pub fn rank_locations(
    candidates: &[LocationRecord],
    snapshots: &BTreeMap<LocationId, CapacitySnapshot>,
    criteria: &ScoringCriteria,
    limit: Option<usize>,
) -> SuggestionResponse {
    let mut suggestions: Vec<LocationSuggestion> = candidates
        .iter()
        .filter_map(|record| {
            let score: LocationScore =
                score_location(record, snapshots.get(&record.id), criteria);
            (score.suitability != Suitability::Unsuitable)
                .then(|| LocationSuggestion::new(record.id, record.code.clone(), score))
        })
        .collect();

    suggestions.sort_by(compare_suggestions);
    if let Some(limit) = limit {
        suggestions.truncate(limit);
    }

    tracing::info!(
        evaluated = candidates.len(),
        snapshots = snapshots.len(),
        suggested = suggestions.len(),
        "Location suggestions ranked"
    );

    SuggestionResponse {
        evaluated: candidates.len(),
        suggestions,
    }
}

fn grid_cells(grid: &GridDimensions, records: &[&LocationRecord]) -> Vec<GridCell> {
    let mut seen: HashSet<Uuid> = HashSet::new();
    let mut cells: Vec<GridCell> = records
        .iter()
        .filter_map(|record| {
            let position: GridPosition = grid.position_of(&record.id)?;
            Some((position, *record))
        })
        .map(|(position, record)| GridCell {
            location_id: record.id,
            code: record.code.clone(),
            status: record.effective_status(),
            row: position.row,
            col: position.col,
        })
        .collect();

    cells.sort_by(|a, b| {
        (a.row, a.col)
            .cmp(&(b.row, b.col))
            .then_with(|| a.code.cmp(&b.code))
            .then_with(|| a.location_id.cmp(&b.location_id))
    });
    // one cell per id, matching the grid's own duplicate resolution
    cells.retain(|cell| seen.insert(cell.location_id));
    cells
}

fn build_layer(
    template: &LocationTemplate,
    layer: Option<String>,
    records: &[&LocationRecord],
) -> GridLayerResponse {
    let owned: Vec<LocationRecord> = records.iter().map(|record| (*record).clone()).collect();
    let grid: GridDimensions = calculate_grid_layout(template, &owned);
    let cells: Vec<GridCell> = grid_cells(&grid, records);
    GridLayerResponse { layer, grid, cells }
}

/// Builds the warehouse map.
///
/// # Arguments
///
/// * `template` - The warehouse's location template
/// * `records` - The stored locations
/// * `layer_field` - Field to split the map by (e.g. `level`); `None` maps
///   all records on one grid
///
/// # Returns
///
/// One grid per layer, in natural layer order.
#[must_use]
pub fn build_grid(
    template: &LocationTemplate,
    records: &[LocationRecord],
    layer_field: Option<&str>,
) -> Vec<GridLayerResponse> {
    let layers: Vec<GridLayerResponse> = match layer_field {
        Some(field) => partition_layers(records, field)
            .into_iter()
            .map(|(value, members)| build_layer(template, Some(value), &members))
            .collect(),
        None => {
            let all: Vec<&LocationRecord> = records.iter().collect();
            vec![build_layer(template, None, &all)]
        }
    };

    tracing::info!(
        records = records.len(),
        layers = layers.len(),
        "Warehouse map built"
    );

    layers
}

/// Summarizes occupancy of a warehouse's locations.
#[must_use]
pub fn warehouse_stats(records: &[LocationRecord]) -> OccupancySummary {
    let summary: OccupancySummary = OccupancySummary::from_records(records);
    tracing::info!(
        total = summary.total,
        occupied = summary.occupied,
        "Warehouse statistics computed"
    );
    summary
}

/// Reports how urgently stock with the given use-by date must move.
#[must_use]
pub fn expiry_status(use_by: Date, today: Date) -> ExpiryResponse {
    let days: i64 = days_until_expiry(use_by, today);
    ExpiryResponse {
        use_by,
        days_until_expiry: days,
        urgency: ExpiryUrgency::from_days(days),
    }
}
