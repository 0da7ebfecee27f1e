//! # 受付ユースケース
//!
//! 申込データから文書テキストをレンダリングし、`.docx` として
//! 文書ストアへ書き出す。

use std::path::PathBuf;

use chrono::{DateTime, Local};
use iraidesk_domain::{Submission, document};
use iraidesk_infra::{docx, storage::DocumentStore};
use iraidesk_shared::{event_log::event, log_business_event};

use crate::{error::PortalError, renderer::DocumentRenderer};

/// 生成された文書への参照
///
/// `file_name` はダウンロード URL（`/download/{file_name}`）に、
/// `path` はメール添付の読み出しに使用する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub file_name: String,
    pub path:      PathBuf,
}

/// 受付サービス
///
/// レンダリング結果の 1 行を 1 段落として書き出す。ファイル名の
/// 衝突回避はストア側（連番サフィックス）に委ねる。
pub struct IntakeService {
    renderer: DocumentRenderer,
    store:    DocumentStore,
}

impl IntakeService {
    pub fn new(renderer: DocumentRenderer, store: DocumentStore) -> Self {
        Self { renderer, store }
    }

    /// 申込データから文書を生成し、ストアへ書き出す
    pub fn generate_document(
        &self,
        submission: &Submission,
        generated_at: DateTime<Local>,
    ) -> Result<GeneratedDocument, PortalError> {
        let text = self.renderer.render(submission)?;

        let stem = document::document_file_stem(
            submission.category(),
            submission.client_name(),
            generated_at,
        );
        let path = self.store.allocate(&stem, document::DOCUMENT_EXTENSION);

        let lines: Vec<&str> = text.lines().collect();
        docx::write_document(&path, &lines)?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| PortalError::Internal("allocated path has no file name".into()))?
            .to_string();

        log_business_event!(
            event.category = event::category::INTAKE,
            event.action = event::action::DOCUMENT_GENERATED,
            event.result = event::result::SUCCESS,
            service_category = %submission.category(),
            document_file_name = %file_name,
        );

        Ok(GeneratedDocument { file_name, path })
    }
}
