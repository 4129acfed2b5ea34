use crate::domain::{common::GenerationMode, recipe::ports::LLMClient};

#[derive(Clone, Debug)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
    pub(crate) generation_mode: GenerationMode,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM, generation_mode: GenerationMode) -> Self {
        Self {
            llm_client,
            generation_mode,
        }
    }

    pub fn generation_mode(&self) -> GenerationMode {
        self.generation_mode
    }
}
