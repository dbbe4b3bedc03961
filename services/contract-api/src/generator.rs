//! Natural-language description in, Solidity source out.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::provider::{ChatMessage, ChatRequest, CompletionProvider, GenerationError};

pub const SYSTEM_PROMPT: &str =
    "You are a Solidity expert that generates clean, secure, and complete smart contract code.";

pub const DEFAULT_MODEL: &str = "mixtral-8x7b-32768";

/// Decoding parameters sent with every request. Low temperature keeps the
/// output close to deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            max_tokens: 4000,
            top_p: 0.9,
        }
    }
}

pub fn build_prompt(description: &str) -> String {
    format!(
        r#"You are an expert Solidity developer. Generate a complete, syntactically correct Solidity contract based on the following description:

{description}

Requirements:
- Use Solidity version 0.8.0 or higher
- Include necessary imports
- Implement all standard functions based on the contract type
- Add clear comments
- Ensure contract is secure and follows best practices
- Only return the complete Solidity code without explanations"#
    )
}

#[derive(Clone)]
pub struct ContractGenerator {
    provider: Arc<dyn CompletionProvider>,
    params: GenerationParams,
}

impl ContractGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>, params: GenerationParams) -> Self {
        Self { provider, params }
    }

    pub fn request_for(&self, description: &str) -> ChatRequest {
        ChatRequest {
            model: self.params.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_prompt(description)),
            ],
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
            top_p: self.params.top_p,
        }
    }

    /// One outbound call, no retry. An all-whitespace reply counts as malformed.
    pub async fn generate(&self, description: &str) -> Result<String, GenerationError> {
        let request = self.request_for(description);
        debug!(provider = %self.provider.info().name, model = %request.model, "requesting contract");

        let outcome = self
            .provider
            .complete(&request)
            .await
            .and_then(|text| match text.trim() {
                "" => Err(GenerationError::MalformedResponse("empty completion".to_string())),
                code => Ok(code.to_string()),
            });

        if let Err(e) = &outcome {
            warn!(kind = e.kind(), "Error generating contract: {e}");
        }
        outcome
    }
}
