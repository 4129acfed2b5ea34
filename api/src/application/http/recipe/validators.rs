use insightchef_core::domain::recipe::GenerateRecipesInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for recipe generation. Fields are kept loosely typed; the
/// core sanitizer decides what is usable.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipesRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "chicken, rice, garlic")]
    pub ingredients: serde_json::Value,

    #[serde(default)]
    #[schema(value_type = u32, example = 30)]
    pub cooking_time: serde_json::Value,

    #[serde(default)]
    #[schema(value_type = Vec<String>, example = json!(["Vegetarian"]))]
    pub dietary: serde_json::Value,
}

impl From<GenerateRecipesRequest> for GenerateRecipesInput {
    fn from(request: GenerateRecipesRequest) -> Self {
        GenerateRecipesInput {
            ingredients: request.ingredients,
            cooking_time: request.cooking_time,
            dietary: request.dietary,
        }
    }
}
