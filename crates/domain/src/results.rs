// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Values produced by the layout and scoring computations.

use crate::error::DomainError;
use crate::location::LocationId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// A cell in the warehouse map grid (zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

/// The 2-D projection of one layer of locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Number of rows (equals `row_keys.len()`).
    pub rows: usize,
    /// Number of columns (equals `col_keys.len()`).
    pub cols: usize,
    /// Distinct row keys in natural order.
    pub row_keys: Vec<String>,
    /// Distinct column keys in natural order.
    pub col_keys: Vec<String>,
    /// Placement of each mapped location.
    pub positions: BTreeMap<LocationId, GridPosition>,
}

impl GridDimensions {
    /// Returns the placement of a location, if it was mapped.
    #[must_use]
    pub fn position_of(&self, id: &LocationId) -> Option<GridPosition> {
        self.positions.get(id).copied()
    }

    /// Returns the locations placed in a cell, in id order.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Vec<LocationId> {
        let target: GridPosition = GridPosition { row, col };
        self.positions
            .iter()
            .filter(|(_, position)| **position == target)
            .map(|(id, _)| *id)
            .collect()
    }
}

/// Discrete label derived from a location score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    /// Blocked; the location cannot take the item.
    Unsuitable,
    /// Score above zero but below 40.
    Poor,
    /// Score of at least 40.
    Fair,
    /// Score of at least 60.
    Good,
    /// Score of at least 80.
    Excellent,
}

impl Suitability {
    /// Bands a score into a suitability label.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            1..=39 => Self::Poor,
            0 => Self::Unsuitable,
        }
    }

    /// Converts this label to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unsuitable => "unsuitable",
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl FromStr for Suitability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unsuitable" => Ok(Self::Unsuitable),
            "poor" => Ok(Self::Poor),
            "fair" => Ok(Self::Fair),
            "good" => Ok(Self::Good),
            "excellent" => Ok(Self::Excellent),
            _ => Err(DomainError::InvalidSuitability(s.to_string())),
        }
    }
}

impl std::fmt::Display for Suitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of scoring one candidate location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationScore {
    /// Score between 0 and 100.
    pub score: u8,
    /// Band derived from `score`.
    pub suitability: Suitability,
    /// Explanations, in evaluation order.
    pub reasons: Vec<String>,
}

impl LocationScore {
    /// A blocked result with a single explanation.
    #[must_use]
    pub fn unsuitable(reason: String) -> Self {
        Self {
            score: 0,
            suitability: Suitability::Unsuitable,
            reasons: vec![reason],
        }
    }
}

/// What the item to be stored needs from a location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringCriteria {
    /// Weight of the item in kilograms.
    #[serde(default)]
    pub required_weight: Option<f64>,
    /// Height of the item in centimetres.
    #[serde(default)]
    pub required_height: Option<f64>,
    /// Zone the item should preferably go to.
    #[serde(default)]
    pub preferred_zone: Option<String>,
}
