use async_trait::async_trait;

use crate::provider::{ChatRequest, CompletionProvider, GenerationError, ProviderInfo};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Groq's OpenAI-compatible chat completions endpoint.
pub struct GroqProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GroqProvider {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GenerationError::from_status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;
        extract_content(&body)
    }

    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "groq".to_string(),
            base_url: self.base_url.clone(),
        }
    }
}

fn extract_content(body: &str) -> Result<String, GenerationError> {
    let json: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

    json["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            GenerationError::MalformedResponse("missing choices[0].message.content".to_string())
        })
}
