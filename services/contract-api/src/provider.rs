use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Body of an OpenAI-compatible `/chat/completions` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("network error: {0}")]
    Network(String),

    #[error("credential rejected (HTTP {status})")]
    Auth { status: u16 },

    #[error("rate limited by provider")]
    RateLimited,

    #[error("provider returned HTTP {status}")]
    Upstream { status: u16 },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => GenerationError::Auth { status },
            429 => GenerationError::RateLimited,
            _ => GenerationError::Upstream { status },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Network(_) => "network",
            GenerationError::Auth { .. } => "auth",
            GenerationError::RateLimited => "rate_limit",
            GenerationError::Upstream { .. } => "upstream",
            GenerationError::MalformedResponse(_) => "malformed_response",
        }
    }

    /// Nothing in this service retries; callers embedding it may.
    pub fn is_retryable(&self) -> bool {
        match self {
            GenerationError::Network(_) | GenerationError::RateLimited => true,
            GenerationError::Upstream { status } => *status >= 500,
            GenerationError::Auth { .. } | GenerationError::MalformedResponse(_) => false,
        }
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Raw assistant text of the first choice.
    async fn complete(&self, request: &ChatRequest) -> Result<String, GenerationError>;
    fn info(&self) -> ProviderInfo;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_categories() {
        assert!(matches!(GenerationError::from_status(401), GenerationError::Auth { status: 401 }));
        assert!(matches!(GenerationError::from_status(403), GenerationError::Auth { status: 403 }));
        assert!(matches!(GenerationError::from_status(429), GenerationError::RateLimited));
        assert!(matches!(GenerationError::from_status(502), GenerationError::Upstream { status: 502 }));
    }

    #[test]
    fn test_retryable() {
        assert!(GenerationError::Network("reset".into()).is_retryable());
        assert!(GenerationError::RateLimited.is_retryable());
        assert!(GenerationError::from_status(503).is_retryable());
        assert!(!GenerationError::from_status(400).is_retryable());
        assert!(!GenerationError::from_status(401).is_retryable());
        assert!(!GenerationError::MalformedResponse("x".into()).is_retryable());
    }

    #[test]
    fn test_request_wire_shape() {
        let req = ChatRequest {
            model: "m".into(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hi")],
            temperature: 0.5,
            max_tokens: 10,
            top_p: 0.25,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["messages"][0]["role"], "system");
        assert_eq!(v["messages"][1]["role"], "user");
        assert_eq!(v["messages"][1]["content"], "hi");
        assert_eq!(v["max_tokens"], 10);
        assert_eq!(v["top_p"], 0.25);
    }
}
