// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Range expressions for bulk location creation.
//!
//! Each field of a template receives one range that expands to an ordered
//! sequence of tokens. Malformed or inverted ranges never fail; they expand to
//! an empty sequence and the caller decides what an empty field means.

use crate::codegen::format_value;
use binloc_domain::FormatRules;
use serde::{Deserialize, Serialize};

/// The per-field input of a bulk creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeSpec {
    /// A letter window such as `A-F`. Input that is not a window is read as a
    /// comma-separated list.
    Alphabetic {
        /// The raw user input.
        expression: String,
    },
    /// A comma-separated list such as `north, south`.
    List {
        /// The raw user input.
        expression: String,
    },
    /// An inclusive integer range.
    Numeric {
        /// First value.
        start: i64,
        /// Last value; below `start` means an empty range.
        end: i64,
    },
}

impl RangeSpec {
    /// Creates an alphabetic range from user input.
    #[must_use]
    pub fn alphabetic(expression: &str) -> Self {
        Self::Alphabetic {
            expression: expression.to_string(),
        }
    }

    /// Creates a literal list from user input.
    #[must_use]
    pub fn list(expression: &str) -> Self {
        Self::List {
            expression: expression.to_string(),
        }
    }

    /// Creates an inclusive numeric range.
    #[must_use]
    pub const fn numeric(start: i64, end: i64) -> Self {
        Self::Numeric { start, end }
    }

    /// Expands the range into its tokens.
    ///
    /// Numeric tokens follow the template's `zero_padding` rule; other tokens
    /// are returned as written and formatted later with the rest of the code.
    #[must_use]
    pub fn tokens(&self, rules: FormatRules) -> Vec<String> {
        match self {
            Self::Alphabetic { expression } => parse_alphabetic_range(expression),
            Self::List { expression } => parse_list(expression),
            Self::Numeric { start, end } => numeric_range(*start, *end, rules),
        }
    }

    /// Returns how many tokens [`RangeSpec::tokens`] would produce, without
    /// producing them.
    #[must_use]
    pub fn token_count(&self) -> u64 {
        match self {
            Self::Alphabetic { expression } => letter_window(expression).map_or_else(
                || list_tokens(expression).count() as u64,
                |(first, last)| window_len(u64::from(first), u64::from(last)),
            ),
            Self::List { expression } => list_tokens(expression).count() as u64,
            Self::Numeric { start, end } => {
                let span: i128 = i128::from(*end) - i128::from(*start) + 1;
                u64::try_from(span.max(0)).unwrap_or(u64::MAX)
            }
        }
    }
}

const fn window_len(first: u64, last: u64) -> u64 {
    if last < first { 0 } else { last - first + 1 }
}

/// Recognises `X-Y` where both ends are single ASCII letters.
fn letter_window(input: &str) -> Option<(u8, u8)> {
    let normalized: String = input.trim().to_ascii_uppercase();
    match normalized.as_bytes() {
        [first, b'-', last] if first.is_ascii_uppercase() && last.is_ascii_uppercase() => {
            Some((*first, *last))
        }
        _ => None,
    }
}

fn list_tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Expands a letter window such as `A-C` into `["A", "B", "C"]`.
///
/// The input is trimmed and uppercased first. An inverted window (`C-A`)
/// yields an empty sequence. Input that is not a window is parsed with
/// [`parse_list`].
#[must_use]
pub fn parse_alphabetic_range(input: &str) -> Vec<String> {
    letter_window(input).map_or_else(
        || parse_list(input),
        |(first, last)| (first..=last).map(|c| char::from(c).to_string()).collect(),
    )
}

/// Splits a comma-separated list, trimming tokens and dropping empty ones.
/// The given order is kept.
#[must_use]
pub fn parse_list(input: &str) -> Vec<String> {
    list_tokens(input).map(str::to_string).collect()
}

/// Expands `start..=end`, formatting each number with the padding rule.
///
/// Returns an empty sequence when `end < start`.
#[must_use]
pub fn numeric_range(start: i64, end: i64, rules: FormatRules) -> Vec<String> {
    if end < start {
        return Vec::new();
    }

    (start..=end)
        .map(|n| {
            format_value(
                &n.to_string(),
                FormatRules {
                    auto_uppercase: false,
                    zero_padding: rules.zero_padding,
                },
            )
        })
        .collect()
}
