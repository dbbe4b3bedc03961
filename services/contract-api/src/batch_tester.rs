use solcheck::ContractValidator;
use tracing::info;

use crate::types::{PromptExample, TemplateCheck};

const PREVIEW_CHARS: usize = 40;

/// Re-validates every stored example, in dataset order.
pub fn check_dataset(validator: &ContractValidator, dataset: &[PromptExample]) -> Vec<TemplateCheck> {
    info!("Testing generated contracts:");

    let records: Vec<TemplateCheck> = dataset
        .iter()
        .enumerate()
        .map(|(id, example)| {
            let result = validator.validate(&example.output);
            let preview: String = example.prompt.chars().take(PREVIEW_CHARS).collect();
            let mark = if result.is_valid { "✓ Valid" } else { "✗ Invalid" };
            info!("Contract {}: {mark} - {preview}...", id + 1);

            TemplateCheck {
                id,
                prompt: example.prompt.clone(),
                is_valid: result.is_valid,
                validation_message: result.message,
            }
        })
        .collect();

    info!(
        "Validation summary: {}/{} contracts are valid",
        valid_count(&records),
        records.len()
    );
    records
}

pub fn valid_count(records: &[TemplateCheck]) -> usize {
    records.iter().filter(|r| r.is_valid).count()
}
