use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use insightchef_core::domain::recipe::{Recipe, RecipeService, RecipeSource, RecipeSuggestions};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GenerateRecipesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipesResponse {
    pub recipes: Vec<Recipe>,
    /// `sample` when the bundled recipes were served instead of generated ones.
    pub source: RecipeSource,
}

impl From<RecipeSuggestions> for GenerateRecipesResponse {
    fn from(suggestions: RecipeSuggestions) -> Self {
        Self {
            recipes: suggestions.recipes,
            source: suggestions.source,
        }
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipes",
    summary = "Generate recipe suggestions",
    description = "Sanitizes the ingredients, cooking time and dietary preferences, asks the LLM for recipes and returns them normalized. Without an API key the bundled sample recipes are returned.",
    responses(
        (status = 200, body = GenerateRecipesResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 429, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse),
        (status = 504, body = ApiErrorResponse)
    ),
    request_body = GenerateRecipesRequest
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRecipesRequest>, JsonRejection>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    // a body that is not a JSON object is treated as an empty request
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(ApiError::PayloadTooLarge);
        }
        Err(rejection) => {
            tracing::debug!("Unusable recipe request body: {}", rejection.body_text());
            GenerateRecipesRequest::default()
        }
    };

    let suggestions = state
        .service
        .generate_recipes(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(suggestions.into()))
}
