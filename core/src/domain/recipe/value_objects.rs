use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const INGREDIENTS_MAX_LENGTH: usize = 2000;

pub const COOKING_TIME_MIN: u32 = 10;
pub const COOKING_TIME_MAX: u32 = 120;
pub const COOKING_TIME_STEP: u32 = 5;
pub const COOKING_TIME_DEFAULT: u32 = 30;

pub const DIETARY_TAGS_MAX: usize = 6;

pub const RECIPE_NAME_MAX_LENGTH: usize = 200;
pub const RECIPE_CUISINE_MAX_LENGTH: usize = 100;
pub const RECIPE_ITEM_MAX_LENGTH: usize = 1000;

pub const DEFAULT_RECIPE_NAME: &str = "Untitled Recipe";
pub const DEFAULT_PREP_TIME: u32 = 10;
pub const DEFAULT_COOK_TIME: u32 = 20;

pub const INGREDIENTS_REQUIRED_MESSAGE: &str = "Please provide at least one ingredient.";

/// Closed allow-list of dietary preferences accepted from callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    #[serde(rename = "Dairy-Free")]
    DairyFree,
    Keto,
    #[serde(rename = "Low-Carb")]
    LowCarb,
}

impl DietaryTag {
    pub const ALL: [DietaryTag; 6] = [
        DietaryTag::Vegetarian,
        DietaryTag::Vegan,
        DietaryTag::GlutenFree,
        DietaryTag::DairyFree,
        DietaryTag::Keto,
        DietaryTag::LowCarb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "Vegetarian",
            DietaryTag::Vegan => "Vegan",
            DietaryTag::GlutenFree => "Gluten-Free",
            DietaryTag::DairyFree => "Dairy-Free",
            DietaryTag::Keto => "Keto",
            DietaryTag::LowCarb => "Low-Carb",
        }
    }
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryTag {
    type Err = ();

    /// Exact, case-sensitive match against the allow-list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietaryTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or(())
    }
}

/// Loosely typed request fields as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct GenerateRecipesInput {
    pub ingredients: serde_json::Value,
    pub cooking_time: serde_json::Value,
    pub dietary: serde_json::Value,
}
