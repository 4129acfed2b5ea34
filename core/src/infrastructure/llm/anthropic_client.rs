use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    recipe::ports::LLMClient,
};

#[derive(Debug, Clone)]
pub struct AnthropicLLMClient {
    api_key: String,
    base_url: String,
    model_name: String,
    api_version: String,
    max_tokens: u32,
    timeout: Duration,
    client: Client,
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

impl AnthropicLLMClient {
    pub fn new(config: &LLMConfig) -> Self {
        Self {
            api_key: config.api_key().unwrap_or_default().to_string(),
            base_url: config.anthropic_base_url.trim_end_matches('/').to_string(),
            model_name: config.anthropic_model.clone(),
            api_version: config.anthropic_version.clone(),
            max_tokens: config.max_tokens,
            timeout: config.timeout,
            client: Client::new(),
        }
    }

    async fn call_messages_api(&self, request: MessagesRequest) -> Result<String, CoreError> {
        let url = format!("{}/v1/messages", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Anthropic API request failed: {}", e);
                if e.is_timeout() {
                    CoreError::Timeout
                } else {
                    CoreError::UpstreamUnavailable(format!("LLM API error: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Anthropic API error: HTTP {}", status);
            return Err(CoreError::UpstreamUnavailable(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        let messages_response: MessagesResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Anthropic response: {}", e);
            CoreError::UpstreamUnavailable(format!("Failed to parse LLM response: {}", e))
        })?;

        messages_response
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| CoreError::UpstreamUnavailable("No response from LLM".to_string()))
    }
}

impl LLMClient for AnthropicLLMClient {
    async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
        let request = MessagesRequest {
            model: self.model_name.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        // dropping the request future on expiry aborts the connection
        tokio::time::timeout(self.timeout, self.call_messages_api(request))
            .await
            .map_err(|_| {
                tracing::warn!("Anthropic API call exceeded {:?}", self.timeout);
                CoreError::Timeout
            })?
    }
}
