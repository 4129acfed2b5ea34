use std::time::Duration;

pub mod entities;
pub mod services;

pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_ANTHROPIC_VERSION: &str = "2023-06-01";
pub const DEFAULT_MAX_TOKENS: u32 = 4000;
pub const DEFAULT_LLM_TIMEOUT: Duration = Duration::from_secs(90);

#[derive(Clone, Debug)]
pub struct InsightChefConfig {
    pub llm: LLMConfig,
}

/// When the service answers with the bundled sample recipes instead of
/// calling the model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SampleMode {
    /// Samples only when no API key is configured.
    #[default]
    Auto,
    Always,
    /// Never fall back; a missing key is reported as not configured.
    Never,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub anthropic_api_key: Option<String>,
    pub anthropic_base_url: String,
    pub anthropic_model: String,
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub sample_mode: SampleMode,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            anthropic_base_url: DEFAULT_ANTHROPIC_BASE_URL.to_string(),
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            anthropic_version: DEFAULT_ANTHROPIC_VERSION.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_LLM_TIMEOUT,
            sample_mode: SampleMode::Auto,
        }
    }
}

impl LLMConfig {
    /// API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.anthropic_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn generation_mode(&self) -> GenerationMode {
        match (self.sample_mode, self.api_key()) {
            (SampleMode::Always, _) => GenerationMode::Sample,
            (_, Some(_)) => GenerationMode::Live,
            (SampleMode::Auto, None) => GenerationMode::Sample,
            (SampleMode::Never, None) => GenerationMode::Unconfigured,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationMode {
    Live,
    Sample,
    Unconfigured,
}
