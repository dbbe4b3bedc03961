use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::dataset_builder::{DEFAULT_DELAY, DEFAULT_EXAMPLES};
use crate::dataset_store::DEFAULT_DATASET_PATH;
use crate::generator::GenerationParams;
use crate::provider_groq::DEFAULT_BASE_URL;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub generation: GenerationParams,

    pub dataset_path: PathBuf,
    pub dataset_size: usize,
    pub dataset_delay: Duration,

    pub solc_bin: String,
    pub solc_ast_flag: String,
    pub solc_disabled: bool,

    pub startup_demo: bool,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| -> Result<String> {
            lookup(key).with_context(|| format!("Missing required env var: {key}"))
        };
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let api_key = get("GROQ_API_KEY")?;
        let api_base_url = or("GROQ_BASE_URL", DEFAULT_BASE_URL);

        let defaults = GenerationParams::default();
        let generation = GenerationParams {
            model: or("GENERATION_MODEL", defaults.model.as_str()),
            temperature: parsed(&lookup, "GENERATION_TEMPERATURE", defaults.temperature)?,
            max_tokens: parsed(&lookup, "GENERATION_MAX_TOKENS", defaults.max_tokens)?,
            top_p: parsed(&lookup, "GENERATION_TOP_P", defaults.top_p)?,
        };

        let dataset_path = PathBuf::from(or("DATASET_PATH", DEFAULT_DATASET_PATH));
        let dataset_size = parsed(&lookup, "DATASET_SIZE", DEFAULT_EXAMPLES)?;
        let delay_ms = parsed(&lookup, "DATASET_DELAY_MS", DEFAULT_DELAY.as_millis() as u64)?;

        let solc_bin = or("SOLC_BIN", "solc");
        let solc_ast_flag = or("SOLC_AST_FLAG", solcheck::DEFAULT_AST_FLAG);
        let solc_disabled = flag(&lookup, "SOLC_DISABLED", false);
        let startup_demo = flag(&lookup, "STARTUP_DEMO", true);

        let bind_addr = or("BIND_ADDR", "0.0.0.0:5000");

        // fail fast, fail loud
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            bail!("GROQ_BASE_URL must start with http:// or https://");
        }
        if api_key.trim().is_empty() {
            bail!("GROQ_API_KEY must not be empty");
        }

        Ok(Self {
            api_key,
            api_base_url,
            generation,
            dataset_path,
            dataset_size,
            dataset_delay: Duration::from_millis(delay_ms),
            solc_bin,
            solc_ast_flag,
            solc_disabled,
            startup_demo,
            bind_addr,
        })
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid value for {key} ({raw:?}): {e}")),
    }
}

fn flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(default)
}
