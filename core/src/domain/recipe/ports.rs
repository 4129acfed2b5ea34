use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::RecipeSuggestions, value_objects::GenerateRecipesInput},
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends a single prompt and returns the model's text reply. Implementations
    /// make one attempt and enforce their own deadline.
    fn generate_text(&self, prompt: String)
    -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe generation business logic
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<RecipeSuggestions, CoreError>> + Send;
}
