// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that stop a bulk generation before any location is enumerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Required fields received no range, or a range that expands to nothing.
    MissingRequiredRanges {
        /// The affected fields, in template order.
        fields: Vec<String>,
    },
    /// The ranges would produce more combinations than allowed.
    TooManyCombinations {
        /// The number of combinations the ranges describe (saturating).
        count: u64,
        /// The ceiling.
        max: u64,
    },
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredRanges { fields } => {
                write!(f, "Missing range for required fields: {}", fields.join(", "))
            }
            Self::TooManyCombinations { count, max } => {
                write!(
                    f,
                    "Too many combinations: {count}. At most {max} locations can be generated at once"
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {}
