use serde::{Deserialize, Serialize};

/// One generated sample. Identified only by its position in the dataset file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptExample {
    pub prompt: String,
    pub output: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub id: usize,
    pub prompt: String,
}

/// Per-example verdict from a batch run over the dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCheck {
    pub id: usize,
    pub prompt: String,
    pub is_valid: bool,
    pub validation_message: String,
}
