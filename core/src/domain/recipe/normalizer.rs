//! Coercion of model output into [`Recipe`] records.
//!
//! Normalization is field-granular: an invalid field falls back to its
//! default without discarding the rest of the record.

use serde_json::{Map, Value};

use crate::domain::recipe::{
    entities::{Difficulty, Recipe},
    sanitizer::sanitize_display_string,
    value_objects::{RECIPE_CUISINE_MAX_LENGTH, RECIPE_ITEM_MAX_LENGTH, RECIPE_NAME_MAX_LENGTH},
};

fn text_field(record: &Map<String, Value>, key: &str, max_length: usize) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(|s| sanitize_display_string(s, max_length))
        .filter(|s| !s.is_empty())
}

fn minutes_field(record: &Map<String, Value>, key: &str) -> Option<u32> {
    record
        .get(key)
        .and_then(Value::as_f64)
        .filter(|m| m.is_finite() && *m >= 0.0)
        .map(f64::round)
        .filter(|m| *m <= f64::from(u32::MAX))
        .map(|m| m as u32)
}

fn list_field(record: &Map<String, Value>, key: &str) -> Vec<String> {
    let Some(Value::Array(items)) = record.get(key) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_str)
        .map(|item| sanitize_display_string(item, RECIPE_ITEM_MAX_LENGTH))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Normalizes a single candidate. Non-object input yields [`Recipe::default`].
pub fn normalize_recipe(candidate: &Value) -> Recipe {
    let Value::Object(record) = candidate else {
        return Recipe::default();
    };

    let defaults = Recipe::default();

    Recipe {
        name: text_field(record, "name", RECIPE_NAME_MAX_LENGTH).unwrap_or(defaults.name),
        difficulty: record
            .get("difficulty")
            .and_then(Value::as_str)
            .and_then(Difficulty::parse_exact)
            .unwrap_or(defaults.difficulty),
        prep_time: minutes_field(record, "prepTime").unwrap_or(defaults.prep_time),
        cook_time: minutes_field(record, "cookTime").unwrap_or(defaults.cook_time),
        cuisine: text_field(record, "cuisine", RECIPE_CUISINE_MAX_LENGTH)
            .unwrap_or(defaults.cuisine),
        ingredients: list_field(record, "ingredients"),
        instructions: list_field(record, "instructions"),
    }
}

/// Normalizes every non-null element of an array. Anything else yields an
/// empty list.
pub fn normalize_recipes(candidates: &Value) -> Vec<Recipe> {
    let Value::Array(items) = candidates else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| !item.is_null())
        .map(normalize_recipe)
        .collect()
}
