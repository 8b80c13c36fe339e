// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::location::{LocationRecord, LocationStatus};
use serde::{Deserialize, Serialize};

/// Location counts per status for one warehouse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OccupancySummary {
    /// All locations.
    pub total: usize,
    /// Locations holding stock.
    pub occupied: usize,
    /// Free locations.
    pub empty: usize,
    /// Locations held for incoming movements.
    pub reserved: usize,
    /// Out-of-service locations, including those with `is_active = false`.
    pub inactive: usize,
    /// Occupied share of all locations in percent, rounded to two decimals.
    pub utilization_percent: f64,
}

impl OccupancySummary {
    /// Counts locations by effective status.
    #[must_use]
    pub fn from_records(records: &[LocationRecord]) -> Self {
        let mut summary: Self = Self::default();
        for record in records {
            summary.total += 1;
            match record.effective_status() {
                LocationStatus::Empty => summary.empty += 1,
                LocationStatus::Occupied => summary.occupied += 1,
                LocationStatus::Reserved => summary.reserved += 1,
                LocationStatus::Inactive => summary.inactive += 1,
            }
        }

        if summary.total > 0 {
            #[allow(clippy::cast_precision_loss)]
            let ratio: f64 = summary.occupied as f64 / summary.total as f64;
            summary.utilization_percent = (ratio * 10_000.0).round() / 100.0;
        }

        summary
    }
}
