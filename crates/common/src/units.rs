//! Conversions between the wire representations used by the external
//! services and the display-oriented internal model.

use chrono::DateTime;

const WEI_PER_COIN: u128 = 1_000_000_000_000_000_000;
/// 10^14, one unit of the 4th fractional digit in wei.
const WEI_PER_FRACTIONAL_UNIT: u128 = WEI_PER_COIN / 10_000;

/// Formats a raw wei amount (decimal string) as native coin with exactly
/// 4 fractional digits, e.g. `"1000000000000000000"` -> `"1.0000"`.
///
/// An absent or unparseable amount renders as `"0.0"`, matching what the
/// explorer reports for valueless transactions. The 5th fractional digit
/// rounds half-up, carrying into the whole part when needed.
pub fn wei_to_coin(raw: Option<&str>) -> String {
    let Some(wei) = raw.and_then(|raw| raw.trim().parse::<u128>().ok()) else {
        return "0.0".to_string();
    };
    let remainder = wei % WEI_PER_FRACTIONAL_UNIT;
    let rounded_units =
        wei / WEI_PER_FRACTIONAL_UNIT + u128::from(remainder * 2 >= WEI_PER_FRACTIONAL_UNIT);
    let whole = rounded_units / 10_000;
    let fractional = rounded_units % 10_000;
    format!("{whole}.{fractional:04}")
}

/// Converts an ISO-8601 timestamp (e.g. `"2024-01-01T00:00:00Z"`) to unix
/// seconds. An absent, unparseable, or pre-epoch timestamp yields 0.
pub fn iso_to_unix_seconds(raw: Option<&str>) -> u64 {
    raw.and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
        .map(|ts| ts.timestamp())
        .and_then(|secs| u64::try_from(secs).ok())
        .unwrap_or(0)
}
