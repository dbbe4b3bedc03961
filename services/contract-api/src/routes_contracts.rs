use axum::{
    body::Bytes,
    extract::State,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use solcheck::ValidationResult;

use crate::api_error::{bad_request, generation_failed, internal, ApiFailure, ApiResult};
use crate::query::{first_value, QueryPairs};
use crate::state::SharedState;
use crate::validate_exec::validate_blocking;

#[derive(Debug, Default, Deserialize)]
pub struct PromptParams {
    pub prompt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CodeParams {
    pub solidity_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResp {
    pub prompt: String,
    pub solidity_code: String,
    pub is_valid: bool,
    pub validation_message: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResp {
    pub is_valid: bool,
    pub validation_message: String,
}

/// Anything that is not a JSON object with the expected string field reads as
/// "field missing".
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    serde_json::from_slice(body).unwrap_or_default()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

async fn validate(state: &SharedState, code: String) -> Result<ValidationResult, ApiFailure> {
    validate_blocking(state.validator.clone(), code)
        .await
        .map_err(|e| internal(format!("validation task failed: {e}")))
}

async fn generate_and_validate(state: &SharedState, prompt: String) -> ApiResult<GenerateResp> {
    let code = state
        .generator
        .generate(&prompt)
        .await
        .map_err(|e| generation_failed(&e))?;

    let result = validate(state, code.clone()).await?;

    Ok(Json(GenerateResp {
        prompt,
        solidity_code: code,
        is_valid: result.is_valid,
        validation_message: result.message,
    }))
}

pub async fn get_generate_contract(
    State(state): State<SharedState>,
    query: QueryPairs,
) -> ApiResult<GenerateResp> {
    let prompt = non_blank(first_value(query, "prompt")?)
        .ok_or_else(|| bad_request("Missing 'prompt' parameter"))?;
    generate_and_validate(&state, prompt).await
}

pub async fn post_generate_contract(
    State(state): State<SharedState>,
    body: Bytes,
) -> ApiResult<GenerateResp> {
    let params: PromptParams = parse_body(&body);
    let prompt = non_blank(params.prompt).ok_or_else(|| bad_request("Missing 'prompt' in request"))?;
    generate_and_validate(&state, prompt).await
}

pub async fn get_validate_contract(
    State(state): State<SharedState>,
    query: QueryPairs,
) -> ApiResult<ValidateResp> {
    let code = first_value(query, "solidity_code")?
        .filter(|c| !c.is_empty())
        .ok_or_else(|| bad_request("Missing 'solidity_code' parameter"))?;
    validate_response(&state, code).await
}

/// An empty string is still code to validate; only an absent field is rejected.
pub async fn post_validate_contract(
    State(state): State<SharedState>,
    body: Bytes,
) -> ApiResult<ValidateResp> {
    let params: CodeParams = parse_body(&body);
    let code = params
        .solidity_code
        .ok_or_else(|| bad_request("Missing 'solidity_code' in request"))?;
    validate_response(&state, code).await
}

async fn validate_response(state: &SharedState, code: String) -> ApiResult<ValidateResp> {
    let result = validate(state, code).await?;
    Ok(Json(ValidateResp {
        is_valid: result.is_valid,
        validation_message: result.message,
    }))
}
