use std::sync::Arc;

use anyhow::{Context, Result};
use solcheck::{Compiler, ContractValidator, NoCompiler, Solc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use contract_api::app::build_router;
use contract_api::config::AppConfig;
use contract_api::generator::ContractGenerator;
use contract_api::provider_groq::GroqProvider;
use contract_api::startup;
use contract_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // verbose by default: per-request spans from tower_http
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let cfg = AppConfig::from_env()?;

    let provider = GroqProvider::new(cfg.api_base_url.clone(), cfg.api_key.clone());
    let generator = ContractGenerator::new(Arc::new(provider), cfg.generation.clone());

    let compiler: Arc<dyn Compiler> = if cfg.solc_disabled {
        info!("solc: disabled, heuristic validation only");
        Arc::new(NoCompiler)
    } else {
        Arc::new(Solc::new(&cfg.solc_bin).with_ast_flag(cfg.solc_ast_flag.clone()))
    };
    let validator = ContractValidator::new(compiler);

    let state = Arc::new(AppState::new(generator, validator, cfg.dataset_path.clone()));

    startup::prepare(&state, &cfg).await?;

    let app = build_router(state);

    let addr = &cfg.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("contract-api listening on http://{addr}");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
