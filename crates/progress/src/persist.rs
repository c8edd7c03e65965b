//! Encoding of progress into the key-value store.
//!
//! Two independent keys hold the state: `completedLessons` is a JSON array
//! of day numbers in completion order, `currentLesson` is the unlock cursor
//! as plain integer text. Decoding never fails; bad data is dropped or
//! clamped and the defaults fill in the rest.

use coursekit_core::{Day, TOTAL_DAYS};
use serde_json::Value;
use tracing::warn;

/// Key holding the completed days.
pub const COMPLETED_KEY: &str = "completedLessons";

/// Key holding the unlock cursor.
pub const CURSOR_KEY: &str = "currentLesson";

/// Encode completed days as a JSON array.
pub fn encode_completed(days: &[Day]) -> String {
    let raw: Vec<u8> = days.iter().map(|d| d.get()).collect();
    // Serializing a Vec<u8> cannot fail.
    serde_json::to_string(&raw).unwrap_or_else(|_| "[]".to_string())
}

/// Encode the unlock cursor.
pub fn encode_cursor(cursor: Day) -> String {
    cursor.to_string()
}

/// Decode completed days, dropping anything that is not a valid day.
pub fn decode_completed(raw: Option<&str>) -> Vec<Day> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            warn!(key = COMPLETED_KEY, found = %other, "expected an array, resetting progress");
            return Vec::new();
        }
        Err(e) => {
            warn!(key = COMPLETED_KEY, error = %e, "unparsable progress, resetting");
            return Vec::new();
        }
    };

    let mut days: Vec<Day> = Vec::with_capacity(items.len());
    let mut dropped = 0usize;
    for item in &items {
        match whole_number(item).and_then(|n| Day::new(n).ok()) {
            Some(day) if !days.contains(&day) => days.push(day),
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(key = COMPLETED_KEY, dropped, kept = days.len(), "dropped invalid completed days");
    }
    days
}

/// Decode the unlock cursor, clamping it into `1..=30`.
pub fn decode_cursor(raw: Option<&str>) -> Day {
    let Some(raw) = raw else {
        return Day::MIN;
    };

    let Some(n) = parse_integer(raw) else {
        warn!(key = CURSOR_KEY, value = raw, "unparsable cursor, starting from day 1");
        return Day::MIN;
    };

    let cursor = Day::clamped(n);
    if i64::from(cursor.get()) != n {
        warn!(key = CURSOR_KEY, value = n, clamped = %cursor, max = TOTAL_DAYS, "cursor out of range");
    }
    cursor
}

/// Accepts `7`, ` 7 `, `"7"` and JSON integers written as `7.0`.
fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim().trim_matches('"').trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    whole_number(&serde_json::from_str::<Value>(trimmed).ok()?)
}

/// A JSON number with no fractional part, so `3` and `3.0` both read as 3.
fn whole_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(num) => num
            .as_i64()
            .or_else(|| num.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        _ => None,
    }
}
