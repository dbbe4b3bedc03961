use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use contract_api::generator::{ContractGenerator, GenerationParams};
use contract_api::provider::{CompletionProvider, GenerationError};
use contract_api::provider_groq::GroqProvider;

#[derive(Clone)]
struct Mock {
    status: StatusCode,
    body: String,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn completions(State(mock): State<Mock>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    mock.seen.lock().unwrap().push((auth, body));
    (mock.status, mock.body.clone()).into_response()
}

/// Serves `/v1/chat/completions` on an ephemeral port; returns the base URL.
async fn serve(status: StatusCode, body: &str) -> (String, Mock) {
    let mock = Mock {
        status,
        body: body.to_string(),
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/v1"), mock)
}

fn generator(base_url: String) -> ContractGenerator {
    let provider = GroqProvider::new(base_url, "gsk_test".to_string());
    ContractGenerator::new(Arc::new(provider), GenerationParams::default())
}

#[tokio::test]
async fn test_successful_completion() {
    let reply = json!({
        "choices": [{"index": 0, "message": {"role": "assistant", "content": "\npragma solidity ^0.8.0;\n"}}]
    });
    let (url, mock) = serve(StatusCode::OK, &reply.to_string()).await;

    let code = generator(url).generate("an escrow").await.unwrap();
    assert_eq!(code, "pragma solidity ^0.8.0;");

    let seen = mock.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (auth, body) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer gsk_test"));
    assert_eq!(body["model"], "mixtral-8x7b-32768");
    assert_eq!(body["temperature"], 0.2);
    assert_eq!(body["max_tokens"], 4000);
    assert_eq!(body["top_p"], 0.9);
    assert_eq!(body["messages"].as_array().unwrap().len(), 2);
    assert!(body["messages"][1]["content"].as_str().unwrap().contains("an escrow"));
}

#[tokio::test]
async fn test_status_codes_map_to_categories() {
    let cases = [
        (StatusCode::UNAUTHORIZED, "auth"),
        (StatusCode::TOO_MANY_REQUESTS, "rate_limit"),
        (StatusCode::SERVICE_UNAVAILABLE, "upstream"),
    ];
    for (status, kind) in cases {
        let (url, _) = serve(status, "{}").await;
        let err = generator(url).generate("x").await.unwrap_err();
        assert_eq!(err.kind(), kind, "status {status}");
    }
}

#[tokio::test]
async fn test_garbage_body_is_malformed() {
    let (url, _) = serve(StatusCode::OK, "<html>oops</html>").await;
    let err = generator(url).generate("x").await.unwrap_err();
    assert!(matches!(err, GenerationError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_network() {
    // bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = GroqProvider::new(format!("http://{addr}/v1/"), "k".into());
    assert_eq!(provider.info().name, "groq");

    let err = ContractGenerator::new(Arc::new(provider), GenerationParams::default())
        .generate("x")
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Network(_)));
    assert!(err.is_retryable());
}
