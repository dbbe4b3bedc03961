use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn valid(message: impl Into<String>) -> Self {
        Self { is_valid: true, message: message.into() }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self { is_valid: false, message: message.into() }
    }
}
