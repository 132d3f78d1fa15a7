//! Lenient parsing of user-entered scores.
//!
//! Impact values and constraint penalties arrive from forms and files where
//! blank or malformed input is normal while editing. Anything that cannot be
//! read as a finite number becomes 0 instead of an error.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Parses a raw score string, falling back to 0.
///
/// - Blank input is 0.
/// - Finite numbers are taken as-is, fractions included.
/// - Everything else is 0.
pub fn coerce_score(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::warn!(input = %trimmed, "non-numeric score coerced to 0");
            0.0
        }
    }
}

/// Sums scores in iteration order.
pub fn sum_scores<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, |acc, value| acc + value)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
    Null,
    Other(IgnoredAny),
}

/// Serde adapter for score fields: `#[serde(deserialize_with = "deserialize_score")]`.
///
/// Accepts integers, decimals, numeric strings, blanks and nulls. Never fails
/// on the value itself.
pub fn deserialize_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawScore::deserialize(deserializer)?;
    Ok(match raw {
        RawScore::Number(value) => finite_or_zero(value),
        RawScore::Text(text) => coerce_score(&text),
        RawScore::Null => 0.0,
        RawScore::Other(_) => {
            tracing::warn!("unsupported score value coerced to 0");
            0.0
        }
    })
}

/// Like [`deserialize_score`], but an explicit null stays `None`.
///
/// Pair with `#[serde(default)]` so a missing field is `None` too.
pub fn deserialize_optional_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawScore::deserialize(deserializer)?;
    Ok(match raw {
        RawScore::Null => None,
        RawScore::Number(value) => Some(finite_or_zero(value)),
        RawScore::Text(text) => Some(coerce_score(&text)),
        RawScore::Other(_) => Some(0.0),
    })
}
