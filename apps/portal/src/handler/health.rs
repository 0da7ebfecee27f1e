//! ヘルスチェックハンドラ

use axum::Json;
use iraidesk_shared::HealthResponse;

/// `GET /health` 稼働状態を返す
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
