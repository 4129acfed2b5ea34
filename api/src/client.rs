use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use insightchef_core::domain::recipe::{
    DietaryTag, RecipeSource, RecipeSuggestions, normalizer::normalize_recipes,
};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Failures surfaced to a person waiting on recipes. The display text is the
/// message to show them; nothing from the server body leaks through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Please enter at least one ingredient to get started.")]
    EmptyIngredients,

    #[error("A recipe request is already in progress.")]
    AlreadyInFlight,

    #[error("Request took too long. The server may be slow or unavailable. Please try again.")]
    Timeout,

    #[error("Unable to connect to the service. Please check your internet connection and try again.")]
    Network,

    #[error("{}", status_message(.0))]
    Status(u16),

    #[error("The recipe service returned an invalid response. Please try again later.")]
    InvalidResponse,

    #[error("No recipes could be generated. Please try different ingredients or try again.")]
    NoRecipes,
}

fn status_message(status: &u16) -> &'static str {
    match status {
        400 => "Invalid request. Please check your input and try again.",
        401 => "Authentication failed. Please try again.",
        403 => "Access denied. Please try again.",
        404 => "Service not found. Please try again later.",
        429 => "Too many requests. Please wait a moment and try again.",
        500 => "The recipe service encountered an error. Please try again later.",
        504 => "Request took too long. The server may be slow. Please try again.",
        _ => "The recipe service is temporarily unavailable. Please try again later.",
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRecipesRequest<'a> {
    ingredients: &'a str,
    cooking_time: u32,
    dietary: &'a [DietaryTag],
}

/// Releases the single-flight flag when the request finishes, fails or is
/// dropped.
struct InFlightGuard(Arc<AtomicBool>);

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag.clone()))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// HTTP client for `POST /api/recipes`. Clones share the in-flight flag, so
/// at most one generation request is outstanding across all of them.
#[derive(Debug, Clone)]
pub struct RecipeApiClient {
    base_url: String,
    timeout: Duration,
    client: Client,
    in_flight: Arc<AtomicBool>,
}

impl RecipeApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: CLIENT_TIMEOUT,
            client: Client::new(),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn generate_recipes(
        &self,
        ingredients: &str,
        cooking_time: u32,
        dietary: &[DietaryTag],
    ) -> Result<RecipeSuggestions, ClientError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("Ignoring recipe request while another is in flight");
            return Err(ClientError::AlreadyInFlight);
        };

        let ingredients = ingredients.trim();
        if ingredients.is_empty() {
            return Err(ClientError::EmptyIngredients);
        }

        let request = GenerateRecipesRequest {
            ingredients,
            cooking_time,
            dietary,
        };

        tokio::time::timeout(self.timeout, self.send(&request))
            .await
            .map_err(|_| {
                tracing::warn!("Recipe request exceeded {:?}", self.timeout);
                ClientError::Timeout
            })?
    }

    async fn send(
        &self,
        request: &GenerateRecipesRequest<'_>,
    ) -> Result<RecipeSuggestions, ClientError> {
        let url = format!("{}/api/recipes", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Recipe request failed: {}", e);
                if e.is_timeout() {
                    ClientError::Timeout
                } else {
                    ClientError::Network
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Recipe service answered HTTP {}", status);
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read recipe response: {}", e);
            ClientError::InvalidResponse
        })?;

        if body.trim().is_empty() {
            return Err(ClientError::InvalidResponse);
        }

        let data: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Recipe response is not JSON: {}", e);
            ClientError::InvalidResponse
        })?;

        let recipes = normalize_recipes(&data["recipes"]);
        if recipes.is_empty() {
            return Err(ClientError::NoRecipes);
        }

        let source =
            serde_json::from_value(data["source"].clone()).unwrap_or(RecipeSource::Generated);

        Ok(RecipeSuggestions { recipes, source })
    }
}
