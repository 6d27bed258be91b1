//! Display formatting helpers for cart values.
//!
//! Everything here is pure: the same input always renders the same string.
//! Quantities use English compact notation (`1500` → `1.5K`) and timestamps
//! use the British numeric date layout with a 12-hour clock, upper-cased.

use chrono::{DateTime, Local, TimeZone};

// ============================================================================
// Constants
// ============================================================================

/// Compact notation magnitudes, smallest first.
const COMPACT_UNITS: [(f64, &str); 4] = [
    (1_000.0, "K"),
    (1_000_000.0, "M"),
    (1_000_000_000.0, "B"),
    (1_000_000_000_000.0, "T"),
];

/// Rendered when an epoch value is outside chrono's representable range.
pub const INVALID_DATE: &str = "INVALID DATE";

/// Maximum number of characters of an item name shown in the cart list.
pub const LIST_NAME_MAX_CHARS: usize = 10;

// ============================================================================
// Quantities
// ============================================================================

/// Formats a quantity using compact short notation.
///
/// Values below one thousand render as plain integers. Larger values are
/// scaled to the biggest fitting unit and keep two significant digits at
/// most while the scaled value is a single digit (`1.2K`), otherwise they
/// are rounded to a whole number (`12K`, `123K`).
///
/// # Example
///
/// ```ignore
/// assert_eq!(format_compact_quantity(1000), "1K");
/// assert_eq!(format_compact_quantity(1_234_567), "1.2M");
/// ```
#[must_use]
pub fn format_compact_quantity(n: i64) -> String {
    let magnitude = n.unsigned_abs();
    if magnitude < 1_000 {
        return n.to_string();
    }

    let sign = if n < 0 { "-" } else { "" };
    let value = magnitude as f64;

    let mut unit_index = COMPACT_UNITS
        .iter()
        .rposition(|(size, _)| value >= *size)
        .unwrap_or(0);
    let mut rounded = round_compact(value / COMPACT_UNITS[unit_index].0);

    // 999_999 rounds to 1000K, which reads as 1M.
    if rounded >= 1_000.0 && unit_index + 1 < COMPACT_UNITS.len() {
        unit_index += 1;
        rounded = round_compact(value / COMPACT_UNITS[unit_index].0);
    }

    let digits = if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    };

    format!("{sign}{digits}{}", COMPACT_UNITS[unit_index].1)
}

fn round_compact(scaled: f64) -> f64 {
    if scaled < 10.0 {
        (scaled * 10.0).round() / 10.0
    } else {
        scaled.round()
    }
}

// ============================================================================
// Timestamps
// ============================================================================

/// Formats an epoch millisecond timestamp in the local time zone.
///
/// Output looks like `16/10/2026, 3:04:05 PM`.
#[must_use]
pub fn format_timestamp(epoch_ms: i64) -> String {
    format_timestamp_in(epoch_ms, &Local)
}

/// Formats an epoch millisecond timestamp in an explicit time zone.
///
/// # Arguments
///
/// * `epoch_ms` - Milliseconds since the Unix epoch
/// * `tz` - Time zone the wall-clock fields are rendered in
///
/// # Returns
///
/// The upper-cased `DD/MM/YYYY, H:MM:SS AM` string, or [`INVALID_DATE`]
/// when the value cannot be represented.
#[must_use]
pub fn format_timestamp_in<Tz: TimeZone>(epoch_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let Some(utc) = DateTime::from_timestamp_millis(epoch_ms) else {
        return INVALID_DATE.to_string();
    };

    utc.with_timezone(tz)
        .format("%d/%m/%Y, %-I:%M:%S %P")
        .to_string()
        .to_uppercase()
}

// ============================================================================
// Text
// ============================================================================

/// Normalizes an item name to title case.
///
/// The text is lower-cased, then the first character of every
/// space-separated word is upper-cased. Runs of spaces are preserved.
#[must_use]
pub fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Shortens a name to `max_chars` characters followed by `...`.
#[must_use]
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() > max_chars {
        let head: String = name.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, "0")]
    #[case::small(7, "7")]
    #[case::below_thousand(999, "999")]
    #[case::negative_small(-42, "-42")]
    #[case::one_thousand(1_000, "1K")]
    #[case::one_and_half(1_500, "1.5K")]
    #[case::drops_trailing_zero(1_040, "1K")]
    #[case::rounds_to_one_decimal(1_250, "1.3K")]
    #[case::two_digits(12_345, "12K")]
    #[case::three_digits(123_456, "123K")]
    #[case::rounds_into_ten(9_960, "10K")]
    #[case::promotes_to_million(999_999, "1M")]
    #[case::million(1_234_567, "1.2M")]
    #[case::billion(3_000_000_000, "3B")]
    #[case::trillion(4_500_000_000_000, "4.5T")]
    #[case::beyond_trillion(2_000_000_000_000_000, "2000T")]
    #[case::negative_thousand(-1_500, "-1.5K")]
    fn test_format_compact_quantity(#[case] input: i64, #[case] expected: &str) {
        assert_eq!(format_compact_quantity(input), expected);
    }

    #[test]
    fn test_compact_quantity_always_abbreviates_large_values() {
        for n in [1_000, 5_432, 99_999, 100_000, 7_654_321, i64::MAX, i64::MIN] {
            let formatted = format_compact_quantity(n);
            assert!(
                formatted.ends_with(['K', 'M', 'B', 'T']),
                "{n} rendered as {formatted}"
            );
        }
    }

    #[rstest]
    #[case::afternoon(1_760_627_045_000, "16/10/2025, 3:04:05 PM")]
    #[case::midnight(1_760_572_800_000, "16/10/2025, 12:00:00 AM")]
    #[case::noon(1_760_616_000_000, "16/10/2025, 12:00:00 PM")]
    #[case::epoch(0, "01/01/1970, 12:00:00 AM")]
    fn test_format_timestamp_utc(#[case] epoch_ms: i64, #[case] expected: &str) {
        assert_eq!(format_timestamp_in(epoch_ms, &Utc), expected);
    }

    #[test]
    fn test_format_timestamp_respects_offset() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).expect("valid offset");
        assert_eq!(
            format_timestamp_in(1_760_627_045_000, &ist),
            "16/10/2025, 8:34:05 PM"
        );
    }

    #[test]
    fn test_format_timestamp_is_deterministic() {
        let epoch_ms = 1_700_000_000_123;
        assert_eq!(format_timestamp(epoch_ms), format_timestamp(epoch_ms));
        assert_eq!(format_timestamp(epoch_ms), format_timestamp(epoch_ms).to_uppercase());
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert_eq!(format_timestamp_in(i64::MAX, &Utc), INVALID_DATE);
    }

    #[rstest]
    #[case::sentence("milk and eggs", "Milk And Eggs")]
    #[case::shouting("BREAD", "Bread")]
    #[case::mixed("oAt mILK", "Oat Milk")]
    #[case::keeps_spacing("two  words", "Two  Words")]
    #[case::non_ascii("élan vital", "Élan Vital")]
    #[case::digits("2 apples", "2 Apples")]
    fn test_title_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(title_case(input), expected);
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Bread", LIST_NAME_MAX_CHARS), "Bread");
        assert_eq!(truncate_name("Strawberry", LIST_NAME_MAX_CHARS), "Strawberry");
        assert_eq!(
            truncate_name("Strawberries", LIST_NAME_MAX_CHARS),
            "Strawberri..."
        );
        assert_eq!(truncate_name("Crème brûlée", 5), "Crème...");
    }
}
