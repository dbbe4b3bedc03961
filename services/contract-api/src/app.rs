use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::routes_contracts::{
    get_generate_contract, get_validate_contract, post_generate_contract, post_validate_contract,
};
use crate::routes_home::homepage;
use crate::routes_templates::{get_template, list_templates};
use crate::state::SharedState;

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(homepage))
        .route(
            "/generate-contract",
            get(get_generate_contract).post(post_generate_contract),
        )
        .route(
            "/validate-contract",
            get(get_validate_contract).post(post_validate_contract),
        )
        .route("/list-templates", get(list_templates))
        .route("/get-template", get(get_template))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
