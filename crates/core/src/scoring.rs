// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scoring of candidate locations for an item to be stored.
//!
//! A candidate is first checked against blocking conditions, in order:
//! inactive, reserved, not enough available weight (the weight limit when
//! the current load is unknown), too tall. The first one that applies makes
//! the location unsuitable with a score of zero.
//!
//! Otherwise points are accumulated, and one reason recorded per contribution,
//! in this order: capacity band, height fit, level, occupancy, accessibility,
//! preferred zone. The total is capped at 100.

use binloc_domain::{
    Accessibility, CapacitySnapshot, LocationRecord, LocationScore, LocationStatus,
    ScoringCriteria, Suitability,
};

/// Field names that hold the level of a location.
pub const LEVEL_FIELD_ALIASES: [&str; 4] = ["level", "szint", "emelet", "floor"];

/// Field names that hold the zone of a location.
pub const ZONE_FIELD_ALIASES: [&str; 4] = ["zone", "zona", "area", "terulet"];

const MAX_SCORE: u32 = 100;

/// Load ratio band that scores best.
const OPTIMAL_RATIO_LOW: f64 = 0.6;
const OPTIMAL_RATIO_HIGH: f64 = 0.8;

fn blocking_reason(
    record: &LocationRecord,
    capacity: &CapacitySnapshot,
    criteria: &ScoringCriteria,
) -> Option<String> {
    match record.effective_status() {
        LocationStatus::Inactive => return Some("Location is inactive".to_string()),
        LocationStatus::Reserved => return Some("Location is reserved".to_string()),
        LocationStatus::Empty | LocationStatus::Occupied => {}
    }

    // available weight never exceeds the limit, so the limit bounds an unknown load
    match (
        criteria.required_weight,
        capacity.available_weight.or(capacity.max_weight),
    ) {
        (Some(required), Some(available)) if required > available => {
            return Some(format!(
                "Insufficient capacity: {available} kg available, {required} kg required"
            ));
        }
        _ => {}
    }

    match (criteria.required_height, capacity.max_height) {
        (Some(required), Some(max)) if required > max => Some(format!(
            "Item too tall: {required} cm required, {max} cm allowed"
        )),
        _ => None,
    }
}

fn capacity_points(capacity: &CapacitySnapshot, criteria: &ScoringCriteria) -> Option<(u32, String)> {
    if !capacity.has_capacity_limits() {
        return Some((25, "No capacity limits".to_string()));
    }

    let (Some(required), Some(max)) = (criteria.required_weight, capacity.max_weight) else {
        return None;
    };
    if max <= 0.0 {
        return None;
    }

    let ratio: f64 = required / max;
    let percent: f64 = (ratio * 100.0).round();
    if (OPTIMAL_RATIO_LOW..=OPTIMAL_RATIO_HIGH).contains(&ratio) {
        Some((40, format!("Optimal capacity utilization ({percent}%)")))
    } else if ratio > OPTIMAL_RATIO_HIGH {
        Some((30, format!("High capacity utilization ({percent}%)")))
    } else {
        Some((20, format!("Low capacity utilization ({percent}%)")))
    }
}

fn height_points(capacity: &CapacitySnapshot, criteria: &ScoringCriteria) -> Option<(u32, String)> {
    match (criteria.required_height, capacity.max_height) {
        (Some(required), Some(max)) if required <= max => {
            Some((10, format!("Height fits ({required} cm of {max} cm)")))
        }
        _ => None,
    }
}

fn level_points(record: &LocationRecord) -> Option<(u32, String)> {
    let level: i64 = record
        .location_data
        .get_by_alias(&LEVEL_FIELD_ALIASES)?
        .trim()
        .parse()
        .ok()?;

    match level {
        0 | 1 => Some((30, "Ground level access".to_string())),
        2 => Some((20, "Low level (2)".to_string())),
        3 => Some((10, "Middle level (3)".to_string())),
        4.. => Some((5, format!("High level ({level})"))),
        _ => None,
    }
}

fn occupancy_points(record: &LocationRecord) -> (u32, String) {
    if record.effective_status() == LocationStatus::Empty {
        (20, "Location is empty".to_string())
    } else {
        (5, "Location is partially occupied".to_string())
    }
}

fn accessibility_points(record: &LocationRecord) -> Option<(u32, String)> {
    match record.accessibility.as_ref()? {
        Accessibility::Forklift => Some((10, "Forklift accessible".to_string())),
        Accessibility::Manual => Some((7, "Manually accessible".to_string())),
        Accessibility::Crane => Some((5, "Crane accessible".to_string())),
        Accessibility::Other(_) => None,
    }
}

fn zone_points(record: &LocationRecord, criteria: &ScoringCriteria) -> Option<(u32, String)> {
    let preferred: &str = criteria.preferred_zone.as_deref()?.trim();
    let zone: &str = record.location_data.get_by_alias(&ZONE_FIELD_ALIASES)?.trim();
    if preferred.is_empty() || !zone.eq_ignore_ascii_case(preferred) {
        return None;
    }
    Some((10, format!("In preferred zone ({zone})")))
}

/// Scores a candidate location for an item.
///
/// # Arguments
///
/// * `record` - The candidate location
/// * `capacity` - Current capacity of the location; derived from the record
///   when absent
/// * `criteria` - What the item needs
///
/// # Returns
///
/// A score between 0 and 100 with its suitability band and the reasons that
/// produced it.
#[must_use]
pub fn score_location(
    record: &LocationRecord,
    capacity: Option<&CapacitySnapshot>,
    criteria: &ScoringCriteria,
) -> LocationScore {
    let capacity: CapacitySnapshot =
        capacity.copied().unwrap_or_else(|| CapacitySnapshot::from_record(record));

    if let Some(reason) = blocking_reason(record, &capacity, criteria) {
        tracing::debug!(code = %record.code, reason = %reason, "Location blocked");
        return LocationScore::unsuitable(reason);
    }

    let contributions: Vec<(u32, String)> = [
        capacity_points(&capacity, criteria),
        height_points(&capacity, criteria),
        level_points(record),
        Some(occupancy_points(record)),
        accessibility_points(record),
        zone_points(record, criteria),
    ]
    .into_iter()
    .flatten()
    .collect();

    let total: u32 = contributions
        .iter()
        .map(|(points, _)| points)
        .sum::<u32>()
        .min(MAX_SCORE);
    let score: u8 = u8::try_from(total).unwrap_or(u8::MAX);

    LocationScore {
        score,
        suitability: Suitability::from_score(score),
        reasons: contributions
            .into_iter()
            .map(|(_, reason)| reason)
            .collect(),
    }
}
