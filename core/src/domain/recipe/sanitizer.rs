//! Bounding of untrusted text and loosely typed request fields.
//!
//! Every function here is total over its input. Only an empty ingredient list
//! is reported as an error; everything else is clamped or defaulted.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::value_objects::{
        COOKING_TIME_DEFAULT, COOKING_TIME_MAX, COOKING_TIME_MIN, COOKING_TIME_STEP,
        DIETARY_TAGS_MAX, DietaryTag, INGREDIENTS_MAX_LENGTH, INGREDIENTS_REQUIRED_MESSAGE,
    },
};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

fn strip_control_chars(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_control()).collect()
}

fn truncate_chars(value: &str, max_length: usize) -> String {
    value.chars().take(max_length).collect()
}

/// Strips control characters, trims, then truncates to `max_length` chars.
pub fn sanitize_display_string(raw: &str, max_length: usize) -> String {
    let stripped = strip_control_chars(raw);
    truncate_chars(stripped.trim(), max_length)
}

/// Sanitizes the ingredients text for embedding in a prompt.
///
/// Overlong input is truncated silently; empty input (after stripping) is a
/// validation error.
pub fn sanitize_ingredients(raw: &Value) -> Result<String, CoreError> {
    let text = match raw {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    };

    let stripped = strip_control_chars(&text);
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    let value = truncate_chars(collapsed.trim(), INGREDIENTS_MAX_LENGTH);

    if value.is_empty() {
        return Err(CoreError::Validation(
            INGREDIENTS_REQUIRED_MESSAGE.to_string(),
        ));
    }

    Ok(value)
}

/// Coerces the cooking time to a multiple of 5 within [10, 120].
/// Unparseable input falls back to 30 minutes.
pub fn sanitize_cooking_time(raw: &Value) -> u32 {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let Some(minutes) = parsed.filter(|m| m.is_finite()) else {
        return COOKING_TIME_DEFAULT;
    };

    let step = f64::from(COOKING_TIME_STEP);
    let clamped = minutes.clamp(f64::from(COOKING_TIME_MIN), f64::from(COOKING_TIME_MAX));
    let steps = (clamped / step + 0.5).floor();

    // bounds are multiples of the step, so the rounded value stays in range
    (steps * step) as u32
}

/// Keeps allow-listed tags in input order, capped at six.
pub fn sanitize_dietary(raw: &Value) -> Vec<DietaryTag> {
    let Value::Array(items) = raw else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|item| item.parse::<DietaryTag>().ok())
        .take(DIETARY_TAGS_MAX)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_display_string_strips_control_chars_and_caps_length() {
        let raw = "\u{0}Spicy\u{7}  noodles\u{1b}[31m\u{7f} with\tsauce\r\n";
        let clean = sanitize_display_string(raw, 12);
        assert!(clean.chars().all(|c| !c.is_control()));
        assert!(clean.chars().count() <= 12);
        assert_eq!(clean, "Spicy  noodl");
    }

    #[test]
    fn test_display_string_trims_before_truncating() {
        assert_eq!(sanitize_display_string("   Pho   ", 3), "Pho");
        assert_eq!(sanitize_display_string("\u{1}\u{2}", 10), "");
    }

    #[test]
    fn test_display_string_counts_chars_not_bytes() {
        let clean = sanitize_display_string("crème brûlée", 5);
        assert_eq!(clean, "crème");
    }

    #[test]
    fn test_ingredients_empty_is_error() {
        assert!(matches!(
            sanitize_ingredients(&json!("")),
            Err(CoreError::Validation(_))
        ));
        assert!(sanitize_ingredients(&json!(" ")).is_err());
        assert!(sanitize_ingredients(&json!("\u{0}\u{1f}\t")).is_err());
        assert!(sanitize_ingredients(&Value::Null).is_err());
        assert!(sanitize_ingredients(&json!(["eggs"])).is_err());
    }

    #[test]
    fn test_ingredients_error_message() {
        let err = sanitize_ingredients(&json!("")).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation("Please provide at least one ingredient.".to_string())
        );
    }

    #[test]
    fn test_ingredients_overflow_is_truncated_silently() {
        let value = sanitize_ingredients(&json!("a".repeat(3000))).unwrap();
        assert_eq!(value.chars().count(), 2000);
    }

    #[test]
    fn test_ingredients_whitespace_is_collapsed() {
        let value = sanitize_ingredients(&json!("  eggs,   milk \u{a0} flour ")).unwrap();
        assert_eq!(value, "eggs, milk flour");
    }

    #[test]
    fn test_ingredients_scalars_are_stringified() {
        assert_eq!(sanitize_ingredients(&json!(42)).unwrap(), "42");
        assert_eq!(sanitize_ingredients(&json!(true)).unwrap(), "true");
    }

    #[test]
    fn test_cooking_time_clamps_and_rounds() {
        assert_eq!(sanitize_cooking_time(&json!(7)), 10);
        assert_eq!(sanitize_cooking_time(&json!(121)), 120);
        assert_eq!(sanitize_cooking_time(&json!(33)), 35);
        assert_eq!(sanitize_cooking_time(&json!(32)), 30);
        assert_eq!(sanitize_cooking_time(&json!(32.5)), 35);
        assert_eq!(sanitize_cooking_time(&json!(-40)), 10);
        assert_eq!(sanitize_cooking_time(&json!(1e300)), 120);
    }

    #[test]
    fn test_cooking_time_parses_numeric_strings() {
        assert_eq!(sanitize_cooking_time(&json!("45")), 45);
        assert_eq!(sanitize_cooking_time(&json!(" 62 ")), 60);
    }

    #[test]
    fn test_cooking_time_defaults_when_unparseable() {
        assert_eq!(sanitize_cooking_time(&json!("not a number")), 30);
        assert_eq!(sanitize_cooking_time(&json!("NaN")), 30);
        assert_eq!(sanitize_cooking_time(&json!("inf")), 30);
        assert_eq!(sanitize_cooking_time(&Value::Null), 30);
        assert_eq!(sanitize_cooking_time(&json!([20])), 30);
    }

    #[test]
    fn test_dietary_filters_and_preserves_order() {
        assert_eq!(
            sanitize_dietary(&json!(["Vegan", "Bogus", "Keto"])),
            vec![DietaryTag::Vegan, DietaryTag::Keto]
        );
    }

    #[test]
    fn test_dietary_non_array_is_empty() {
        assert!(sanitize_dietary(&json!("Vegan")).is_empty());
        assert!(sanitize_dietary(&Value::Null).is_empty());
        assert!(sanitize_dietary(&json!({"0": "Vegan"})).is_empty());
    }

    #[test]
    fn test_dietary_is_capped() {
        let raw = json!([
            "Keto", "Vegan", "Vegetarian", "Low-Carb", "Dairy-Free", "Gluten-Free", "Keto",
            "Vegan", 7, null
        ]);
        let tags = sanitize_dietary(&raw);
        assert_eq!(tags.len(), 6);
        assert_eq!(tags[0], DietaryTag::Keto);
        assert_eq!(tags[5], DietaryTag::GlutenFree);
    }
}
