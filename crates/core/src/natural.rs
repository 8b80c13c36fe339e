// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Natural (numeric-aware) string ordering.
//!
//! Runs of ASCII digits compare by numeric value, so `"2" < "10"` and
//! `"A-2" < "A-10"`. Other characters compare ignoring ASCII case. Strings
//! that are equal under those rules (`"01"` and `"1"`, `"a"` and `"A"`) fall
//! back to plain byte order so the result is a total order.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compares two strings in natural order.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left: Peekable<Chars<'_>> = a.chars().peekable();
    let mut right: Peekable<Chars<'_>> = b.chars().peekable();

    loop {
        let ordering: Ordering = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => break,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a: String = take_digit_run(&mut left);
                let run_b: String = take_digit_run(&mut right);
                compare_digit_runs(&run_a, &run_b)
            }
            (Some(x), Some(y)) => {
                left.next();
                right.next();
                x.to_ascii_lowercase().cmp(&y.to_ascii_lowercase())
            }
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    a.cmp(b)
}

/// Sorts strings in natural order.
pub fn natural_sort(values: &mut [String]) {
    values.sort_by(|a, b| natural_cmp(a, b));
}

fn take_digit_run(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run: String = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

// Leading zeros are ignored; a longer significant run is the larger number.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a: &str = a.trim_start_matches('0');
    let b: &str = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
