use rocket::serde::json::Json;

use crate::types::TextResponse;

pub async fn health_handler() -> Json<TextResponse> {
    Json(TextResponse::success("JobHub API is healthy".to_string()))
}
