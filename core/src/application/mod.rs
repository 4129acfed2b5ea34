use crate::{
    domain::common::{
        GenerationMode, InsightChefConfig, entities::app_errors::CoreError, services::Service,
    },
    infrastructure::llm::AnthropicLLMClient,
};

pub type InsightChefService = Service<AnthropicLLMClient>;

pub fn create_service(config: InsightChefConfig) -> Result<InsightChefService, CoreError> {
    let generation_mode = config.llm.generation_mode();

    match generation_mode {
        GenerationMode::Live => tracing::info!(
            model = %config.llm.anthropic_model,
            "Recipe generation uses the Anthropic API"
        ),
        GenerationMode::Sample => {
            tracing::warn!("No Anthropic API key in use, serving sample recipes")
        }
        GenerationMode::Unconfigured => {
            tracing::warn!("No Anthropic API key configured, recipe generation is unavailable")
        }
    }

    let llm_client = AnthropicLLMClient::new(&config.llm);

    Ok(Service::new(llm_client, generation_mode))
}
