use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        sanitizer::{sanitize_cooking_time, sanitize_dietary, sanitize_ingredients},
        value_objects::{
            DEFAULT_COOK_TIME, DEFAULT_PREP_TIME, DEFAULT_RECIPE_NAME, DietaryTag,
            GenerateRecipesInput,
        },
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn parse_exact(value: &str) -> Option<Self> {
        match value {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// A recipe in the shape handed to rendering surfaces. Every string has been
/// stripped of control characters and length capped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub difficulty: Difficulty,
    pub prep_time: u32,
    pub cook_time: u32,
    pub cuisine: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            name: DEFAULT_RECIPE_NAME.to_string(),
            difficulty: Difficulty::Medium,
            prep_time: DEFAULT_PREP_TIME,
            cook_time: DEFAULT_COOK_TIME,
            cuisine: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }
}

/// Sanitized generation request, built once per call.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RecipeQuery {
    #[validate(length(min = 1, max = 2000))]
    pub ingredients: String,
    #[validate(range(min = 10, max = 120))]
    pub cooking_time_minutes: u32,
    #[validate(length(max = 6))]
    pub dietary_tags: Vec<DietaryTag>,
}

impl RecipeQuery {
    pub fn from_input(input: &GenerateRecipesInput) -> Result<Self, CoreError> {
        let query = Self {
            ingredients: sanitize_ingredients(&input.ingredients)?,
            cooking_time_minutes: sanitize_cooking_time(&input.cooking_time),
            dietary_tags: sanitize_dietary(&input.dietary),
        };

        query.validate().map_err(|e| {
            tracing::error!("Sanitized recipe query violates its bounds: {}", e);
            CoreError::Internal(format!("invalid recipe query: {}", e))
        })?;

        Ok(query)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    Generated,
    Sample,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSuggestions {
    pub recipes: Vec<Recipe>,
    pub source: RecipeSource,
}
