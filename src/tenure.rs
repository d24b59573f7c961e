//! Years of experience derived from free-text periods.
//!
//! A period such as `2021 — 2023` or `2023 — PRESENT` is split on an em-dash,
//! en-dash or hyphen. Anything that does not yield exactly two year tokens
//! contributes nothing. Entries are summed as-is, so overlapping periods count
//! twice.

use regex::Regex;
use std::sync::LazyLock;

/// Separators accepted between the two years.
static DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new("[—–-]").expect("valid regex"));

/// Token meaning "up to the current year".
const PRESENT: &str = "PRESENT";

/// Total years across all periods, evaluated at `current_year`.
pub fn total_years<I, S>(periods: I, current_year: i32) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    periods
        .into_iter()
        .filter_map(|period| period_years(period.as_ref(), current_year))
        .fold(0, u32::saturating_add)
}

/// Years covered by one period, or `None` when it cannot be parsed.
///
/// A range that ends before it starts counts as zero.
pub fn period_years(period: &str, current_year: i32) -> Option<u32> {
    let parts: Vec<_> = DASH
        .split(period)
        .map(|part| part.trim().to_uppercase())
        .collect();

    let [start, end] = parts.as_slice() else {
        return None;
    };

    let start = leading_year(start)?;
    let end = if end == PRESENT {
        current_year
    } else {
        leading_year(end)?
    };

    let years = end
        .checked_sub(start)
        .and_then(|span| u32::try_from(span).ok())
        .unwrap_or(0);
    Some(years)
}

/// Parse the leading digits of a token, ignoring whatever follows them.
fn leading_year(token: &str) -> Option<i32> {
    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..digits_end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_periods() {
        assert_eq!(total_years(["2021 — 2023", "2023 — PRESENT"], 2025), 4);
    }

    #[test]
    fn test_huge_spans_saturate() {
        assert_eq!(total_years(["0 — 2147483647"; 3], 2025), u32::MAX);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(total_years(Vec::<String>::new(), 2025), 0);
    }

    #[test]
    fn test_order_invariant() {
        let periods = ["2019 - 2021", "2021 – 2023", "2023 — present", "Ongoing"];
        let expected = total_years(periods, 2026);
        assert_eq!(expected, 7);

        let mut reversed = periods;
        reversed.reverse();
        assert_eq!(total_years(reversed, 2026), expected);

        let rotated = [periods[2], periods[0], periods[3], periods[1]];
        assert_eq!(total_years(rotated, 2026), expected);
    }

    #[test]
    fn test_all_dash_variants() {
        assert_eq!(period_years("2010—2012", 2025), Some(2));
        assert_eq!(period_years("2010 – 2013", 2025), Some(3));
        assert_eq!(period_years("2010-2014", 2025), Some(4));
    }

    #[test]
    fn test_malformed_period_contributes_zero() {
        assert_eq!(period_years("Ongoing", 2025), None);
        assert_eq!(total_years(["Ongoing"], 2025), 0);
        assert_eq!(period_years("", 2025), None);
        assert_eq!(period_years("2020 —", 2025), None);
        assert_eq!(period_years("SINCE — 2020", 2025), None);
    }

    #[test]
    fn test_more_than_two_parts_is_skipped() {
        assert_eq!(period_years("2019-01 - 2020-06", 2025), None);
    }

    #[test]
    fn test_present_is_case_insensitive() {
        assert_eq!(period_years("2020 — Present", 2025), Some(5));
    }

    #[test]
    fn test_trailing_text_after_year() {
        assert_eq!(period_years("2018 (part-time) – 2020", 2025), None);
        assert_eq!(period_years("2018s — 2020", 2025), Some(2));
    }

    #[test]
    fn test_reversed_range_counts_zero() {
        assert_eq!(period_years("2024 — 2020", 2025), Some(0));
        assert_eq!(total_years(["2024 — 2020", "2020 — 2021"], 2025), 1);
    }

    #[test]
    fn test_overlaps_double_count() {
        assert_eq!(total_years(["2020 — 2024", "2022 — 2024"], 2025), 6);
    }
}
