//! Validation utilities for CLI arguments and config file values
//!
//! Each validator returns a human-readable message on failure so it can be
//! used directly as a clap `value_parser` or wrapped into a config error.

/// Validate a thread count; 0 selects the scanner default
pub fn validate_thread_count(value: &str) -> Result<i64, String> {
    validate_non_negative(value, "thread count")
}

/// Validate a per-file line budget
///
/// 0 is accepted and keeps its literal meaning: only the first line of each
/// file is inspected.
pub fn validate_line_cap(value: &str) -> Result<i64, String> {
    validate_non_negative(value, "line count")
}

/// Check a value against a fixed list of choices (case-insensitive)
pub fn validate_choice(value: &str, allowed: &[&str], what: &str) -> Result<String, String> {
    let lowered = value.trim().to_lowercase();
    if allowed.iter().any(|a| *a == lowered) {
        Ok(lowered)
    } else {
        Err(format!(
            "'{}' is not a valid {}; expected one of: {}",
            value,
            what,
            allowed.join(", ")
        ))
    }
}

fn validate_non_negative(value: &str, what: &str) -> Result<i64, String> {
    match value.trim().parse::<i64>() {
        Ok(n) if n < 0 => Err(format!("{} must not be negative (got {})", what, n)),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a valid {}", value, what)),
    }
}
