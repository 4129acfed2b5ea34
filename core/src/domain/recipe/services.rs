use crate::domain::{
    common::{GenerationMode, entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::{RecipeQuery, RecipeSource, RecipeSuggestions},
        extraction::extract_recipe_array,
        normalizer::normalize_recipes,
        ports::{LLMClient, RecipeService},
        prompt::build_recipe_prompt,
        samples::sample_recipes,
        value_objects::GenerateRecipesInput,
    },
};

impl<LLM> RecipeService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> Result<RecipeSuggestions, CoreError> {
        // 1. Sanitize input; an empty ingredient list stops here
        let query = RecipeQuery::from_input(&input)?;

        // 2. Sample mode answers before any network call
        match self.generation_mode {
            GenerationMode::Sample => {
                tracing::debug!("Serving sample recipes");
                return Ok(RecipeSuggestions {
                    recipes: sample_recipes(),
                    source: RecipeSource::Sample,
                });
            }
            GenerationMode::Unconfigured => return Err(CoreError::NotConfigured),
            GenerationMode::Live => {}
        }

        // 3. Call LLM
        let prompt = build_recipe_prompt(&query);
        let raw_response = self.llm_client.generate_text(prompt).await?;

        // 4. Extract and normalize
        let candidates = extract_recipe_array(&raw_response)?;
        let recipes = normalize_recipes(&candidates);

        tracing::info!(
            count = recipes.len(),
            cooking_time = query.cooking_time_minutes,
            dietary_tags = query.dietary_tags.len(),
            "Generated recipes"
        );

        Ok(RecipeSuggestions {
            recipes,
            source: RecipeSource::Generated,
        })
    }
}
