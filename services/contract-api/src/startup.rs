//! One-shot work done before the listener starts: build or load the dataset,
//! re-validate it, and run a single demo generation.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::batch_tester::check_dataset;
use crate::config::AppConfig;
use crate::dataset_builder::build_or_load;
use crate::state::AppState;
use crate::types::TemplateCheck;
use crate::validate_exec::validate_blocking;

pub const DEMO_PROMPT: &str = "Create a simple voting contract where users can vote on proposals";

const PREVIEW_CHARS: usize = 200;

pub async fn prepare(state: &AppState, cfg: &AppConfig) -> Result<Vec<TemplateCheck>> {
    let dataset = build_or_load(
        &state.generator,
        &state.dataset_path,
        cfg.dataset_size,
        cfg.dataset_delay,
    )
    .await
    .with_context(|| format!("Failed to prepare dataset {}", state.dataset_path.display()))?;

    let validator = state.validator.clone();
    let checks = tokio::task::spawn_blocking(move || check_dataset(&validator, &dataset))
        .await
        .context("dataset check task failed")?;

    if cfg.startup_demo {
        run_demo(state).await;
    }

    println!("{}", usage(&cfg.bind_addr));
    Ok(checks)
}

async fn run_demo(state: &AppState) {
    info!("Example contract generation: {DEMO_PROMPT}");
    let code = match state.generator.generate(DEMO_PROMPT).await {
        Ok(code) => code,
        Err(e) => {
            warn!(kind = e.kind(), "demo generation skipped: {e}");
            return;
        }
    };

    info!("Generated contract preview:\n{}", preview(&code));
    match validate_blocking(state.validator.clone(), code).await {
        Ok(result) => {
            let verdict = if result.is_valid { "Valid" } else { "Invalid" };
            info!("Contract validation: {verdict}");
            info!("Validation message: {}", result.message);
        }
        Err(e) => warn!("demo validation task failed: {e}"),
    }
}

pub fn preview(code: &str) -> String {
    let mut chars = code.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

pub fn usage(bind_addr: &str) -> String {
    format!(
        "\nAPI server listening on http://{bind_addr}\n\
         \nAvailable endpoints:\n\
         - GET/POST /generate-contract: Generate a contract from a prompt\n\
         - GET/POST /validate-contract: Validate a Solidity contract\n\
         - GET /list-templates: List available contract templates\n\
         - GET /get-template?id=X: Get a specific contract template\n\
         - GET /: Homepage with API documentation"
    )
}
