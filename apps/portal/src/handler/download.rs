//! 生成文書のダウンロードハンドラ

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use iraidesk_domain::notification::DOCX_CONTENT_TYPE;
use iraidesk_infra::InfraError;

use crate::{app::AppState, error::PortalError};

/// `GET /download/{file_name}` 生成文書を添付ファイルとして返す
///
/// ファイル名はストア側で検証される。ストア外を指す名前や存在しない
/// ファイルは 404 になる。
pub async fn download_document(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<Response, PortalError> {
    let path = state
        .store
        .resolve(&file_name)
        .ok_or_else(|| PortalError::NotFound(file_name.clone()))?;

    let content = tokio::fs::read(&path).await.map_err(InfraError::Io)?;

    let headers = [
        (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!(r#"attachment; filename="{file_name}""#),
        ),
    ];

    Ok((headers, content).into_response())
}
