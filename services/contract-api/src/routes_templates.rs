use axum::{extract::State, Json};
use serde::Serialize;

use crate::api_error::{bad_request, internal, not_found, ApiResult};
use crate::dataset_store::load_dataset;
use crate::query::{first_value, QueryPairs};
use crate::state::SharedState;
use crate::types::{PromptExample, TemplateSummary};

#[derive(Serialize)]
pub struct TemplatesResp {
    pub templates: Vec<TemplateSummary>,
}

pub async fn list_templates(State(state): State<SharedState>) -> ApiResult<TemplatesResp> {
    let dataset = load_dataset(&state.dataset_path)
        .await
        .map_err(|e| internal(format!("Failed to list templates: {e}")))?;

    let templates = dataset
        .into_iter()
        .enumerate()
        .map(|(id, ex)| TemplateSummary { id, prompt: ex.prompt })
        .collect();

    Ok(Json(TemplatesResp { templates }))
}

/// An integer literal too wide for `i64` is still an integer: out of range, not
/// invalid.
fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

pub async fn get_template(
    State(state): State<SharedState>,
    query: QueryPairs,
) -> ApiResult<PromptExample> {
    let raw = first_value(query, "id")?
        .filter(|s| !s.is_empty())
        .ok_or_else(|| bad_request("Missing template ID"))?;
    let trimmed = raw.trim();
    let id: Option<i64> = match trimmed.parse() {
        Ok(id) => Some(id),
        Err(_) if is_integer(trimmed) => None,
        Err(_) => return Err(bad_request(format!("Invalid template ID: {raw}"))),
    };

    let dataset = load_dataset(&state.dataset_path)
        .await
        .map_err(|e| internal(format!("Failed to get template: {e}")))?;

    id.and_then(|id| usize::try_from(id).ok())
        .and_then(|idx| dataset.into_iter().nth(idx))
        .map(Json)
        .ok_or_else(|| match id {
            Some(id) => not_found(format!("Template ID {id} out of range")),
            None => not_found(format!("Template ID {trimmed} out of range")),
        })
}
