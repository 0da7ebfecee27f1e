//! # ポータルエラー定義
//!
//! ポータル固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! 未知のカテゴリはエラーではなくリダイレクト + フラッシュで処理される
//! ため、ここには現れない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use iraidesk_infra::InfraError;
use iraidesk_shared::ErrorResponse;
use thiserror::Error;

/// ポータルで発生するエラー
#[derive(Debug, Error)]
pub enum PortalError {
    /// 生成文書が見つからない（ダウンロード要求の不正な名前を含む）
    #[error("文書が見つかりません: {0}")]
    NotFound(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    Template(#[from] tera::Error),

    /// 文書の保存に失敗
    #[error("文書の保存に失敗: {0}")]
    Storage(#[from] InfraError),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            PortalError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg.clone()))
            }
            PortalError::Template(e) => {
                tracing::error!(error = %e, "テンプレートレンダリングに失敗");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
            PortalError::Storage(e) => {
                tracing::error!(error = %e, "文書の保存に失敗");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
            PortalError::Internal(msg) => {
                tracing::error!("内部エラー: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[tokio::test]
    async fn not_foundが404のproblem_detailsになる() {
        let response = PortalError::NotFound("missing.docx".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["type"],
            "https://iraidesk.example.com/errors/not-found"
        );
        assert_eq!(json["status"], 404);
    }

    #[tokio::test]
    async fn internalが500でdetailを漏らさない() {
        let response = PortalError::Internal("secret detail".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(!json["detail"].as_str().unwrap().contains("secret"));
    }
}
