use axum::Json;
use serde_json::{json, Value};

pub async fn homepage() -> Json<Value> {
    Json(json!({
        "service": "Solidity Contract Generator API",
        "endpoints": [
            {
                "path": "/generate-contract",
                "methods": ["GET", "POST"],
                "description": "Generate a Solidity contract from text description",
                "parameters": ["prompt"]
            },
            {
                "path": "/validate-contract",
                "methods": ["GET", "POST"],
                "description": "Validate Solidity contract syntax",
                "parameters": ["solidity_code"]
            },
            {
                "path": "/list-templates",
                "methods": ["GET"],
                "description": "List available contract templates"
            },
            {
                "path": "/get-template",
                "methods": ["GET"],
                "description": "Get a specific contract template",
                "parameters": ["id"]
            }
        ]
    }))
}
