//! Solidity contract generation service.
//!
//! Asks a hosted chat-completions API for contract source, checks it with
//! [`solcheck`], keeps a small generated example dataset on disk and serves all
//! of it over HTTP.

pub mod api_error;
pub mod app;
pub mod batch_tester;
pub mod config;
pub mod dataset_builder;
pub mod dataset_store;
pub mod generator;
pub mod provider;
pub mod provider_groq;
pub mod query;
pub mod routes_contracts;
pub mod routes_home;
pub mod routes_templates;
pub mod startup;
pub mod state;
pub mod types;
pub mod validate_exec;
