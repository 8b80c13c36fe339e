// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Expiry urgency bands used to colour occupied cells on the warehouse map.

use serde::{Deserialize, Serialize};
use time::Date;

/// How soon stock in a location expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryUrgency {
    /// The use-by date has passed.
    Expired,
    /// Expires within 3 days.
    Critical,
    /// Expires within 7 days.
    High,
    /// Expires within 14 days.
    Medium,
    /// Expires later.
    Low,
}

impl ExpiryUrgency {
    /// Bands a day count into an urgency level.
    ///
    /// # Arguments
    ///
    /// * `days_until_expiry` - Days left until the use-by date (negative once expired)
    #[must_use]
    pub const fn from_days(days_until_expiry: i64) -> Self {
        if days_until_expiry < 0 {
            Self::Expired
        } else if days_until_expiry <= 3 {
            Self::Critical
        } else if days_until_expiry <= 7 {
            Self::High
        } else if days_until_expiry <= 14 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Converts this level to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Whole days from `today` until `use_by` (negative once the date has passed).
#[must_use]
pub fn days_until_expiry(use_by: Date, today: Date) -> i64 {
    (use_by - today).whole_days()
}
