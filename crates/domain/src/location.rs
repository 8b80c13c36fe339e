// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::template::LocationFieldValues;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// The identity of a stored location.
pub type LocationId = Uuid;

/// Occupancy state of a storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LocationStatus {
    /// Nothing is stored in the location.
    #[default]
    Empty,
    /// Stock is stored in the location.
    Occupied,
    /// The location is held for an incoming movement.
    Reserved,
    /// The location is out of service.
    Inactive,
}

impl LocationStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Occupied => "occupied",
            Self::Reserved => "reserved",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for LocationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "occupied" => Ok(Self::Occupied),
            "reserved" => Ok(Self::Reserved),
            "inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidLocationStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How goods reach a location.
///
/// The backend stores this as free text; unrecognised values are kept in
/// [`Accessibility::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Accessibility {
    /// Reachable by forklift.
    Forklift,
    /// Reachable by hand.
    Manual,
    /// Reachable by crane.
    Crane,
    /// Any other access method.
    Other(String),
}

impl Accessibility {
    /// Parses a stored accessibility value. English and Hungarian terms are
    /// recognised, ignoring case.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "forklift" | "targonca" => Self::Forklift,
            "manual" | "kezi" | "kézi" => Self::Manual,
            "crane" | "daru" => Self::Crane,
            _ => Self::Other(value.trim().to_string()),
        }
    }

    /// Converts this value to its wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Forklift => "forklift",
            Self::Manual => "manual",
            Self::Crane => "crane",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for Accessibility {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Accessibility> for String {
    fn from(value: Accessibility) -> Self {
        value.as_str().to_string()
    }
}

const fn default_true() -> bool {
    true
}

/// A stored location as fetched from the backend.
///
/// Identity is `id`; `code` is a display value derived from the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// The location's identity.
    pub id: LocationId,
    /// The generated location code.
    pub code: String,
    /// The occupancy state.
    #[serde(default)]
    pub status: LocationStatus,
    /// The value of each template field for this location.
    #[serde(default, alias = "structure_data")]
    pub location_data: LocationFieldValues,
    /// Maximum load in kilograms, if limited.
    #[serde(default)]
    pub max_weight: Option<f64>,
    /// Maximum goods height in centimetres, if limited.
    #[serde(default)]
    pub max_height: Option<f64>,
    /// How goods reach the location.
    #[serde(default)]
    pub accessibility: Option<Accessibility>,
    /// Whether the location is in service.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl LocationRecord {
    /// Creates an active location without capacity limits or accessibility.
    #[must_use]
    pub const fn new(
        id: LocationId,
        code: String,
        status: LocationStatus,
        location_data: LocationFieldValues,
    ) -> Self {
        Self {
            id,
            code,
            status,
            location_data,
            max_weight: None,
            max_height: None,
            accessibility: None,
            is_active: true,
        }
    }

    /// Returns this record with capacity limits.
    #[must_use]
    pub fn with_capacity(mut self, max_weight: Option<f64>, max_height: Option<f64>) -> Self {
        self.max_weight = max_weight;
        self.max_height = max_height;
        self
    }

    /// Returns this record with an accessibility value.
    #[must_use]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    /// Returns this record marked out of service.
    #[must_use]
    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Returns the status with `is_active = false` folded into
    /// [`LocationStatus::Inactive`].
    #[must_use]
    pub const fn effective_status(&self) -> LocationStatus {
        if self.is_active {
            self.status
        } else {
            LocationStatus::Inactive
        }
    }
}

/// Capacity limits and current load of one location.
///
/// Deserialized snapshots without an `available_weight` derive it the way
/// [`CapacitySnapshot::new`] does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "CapacitySnapshotWire")]
pub struct CapacitySnapshot {
    /// Maximum load in kilograms, if limited.
    pub max_weight: Option<f64>,
    /// Maximum goods height in centimetres, if limited.
    pub max_height: Option<f64>,
    /// Load currently stored, in kilograms.
    pub current_weight: f64,
    /// Remaining load in kilograms; unknown when there is no weight limit.
    pub available_weight: Option<f64>,
}

#[derive(Deserialize)]
struct CapacitySnapshotWire {
    #[serde(default)]
    max_weight: Option<f64>,
    #[serde(default)]
    max_height: Option<f64>,
    #[serde(default)]
    current_weight: f64,
    #[serde(default)]
    available_weight: Option<f64>,
}

impl From<CapacitySnapshotWire> for CapacitySnapshot {
    fn from(wire: CapacitySnapshotWire) -> Self {
        let derived: Self = Self::new(wire.max_weight, wire.max_height, wire.current_weight);
        Self {
            available_weight: wire.available_weight.or(derived.available_weight),
            ..derived
        }
    }
}

impl CapacitySnapshot {
    /// Creates a snapshot, deriving the available weight from the limit and
    /// current load.
    #[must_use]
    pub fn new(max_weight: Option<f64>, max_height: Option<f64>, current_weight: f64) -> Self {
        Self {
            max_weight,
            max_height,
            current_weight,
            available_weight: max_weight.map(|max| max - current_weight),
        }
    }

    /// Derives a snapshot from a record's own attributes.
    ///
    /// Only an empty location's load is known (zero); for any other status the
    /// available weight is unknown.
    #[must_use]
    pub fn from_record(record: &LocationRecord) -> Self {
        let available_weight: Option<f64> = match record.effective_status() {
            LocationStatus::Empty => record.max_weight,
            _ => None,
        };
        Self {
            max_weight: record.max_weight,
            max_height: record.max_height,
            current_weight: 0.0,
            available_weight,
        }
    }

    /// Returns whether any capacity limit is set.
    #[must_use]
    pub const fn has_capacity_limits(&self) -> bool {
        self.max_weight.is_some() || self.max_height.is_some()
    }
}
