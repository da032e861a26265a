pub mod hello;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
