//! # インフラ層エラー定義
//!
//! ファイルシステム操作と文書生成で発生するエラーを表現する。

use thiserror::Error;

/// インフラ層で発生するエラー
#[derive(Debug, Error)]
pub enum InfraError {
    /// I/O エラー（ディレクトリ作成、ファイル読み書き）
    #[error("I/O エラー: {0}")]
    Io(#[from] std::io::Error),

    /// 文書ファイル（.docx）の書き出しに失敗
    #[error("文書ファイルの生成に失敗: {0}")]
    DocumentWrite(String),
}
