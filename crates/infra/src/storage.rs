//! # 生成文書ストア
//!
//! 生成された `.docx` を保持する単一のフラットディレクトリ。
//! 追記専用で、クリーンアップも重複排除も行わない。

use std::{
    fs,
    path::{Path, PathBuf},
};

use iraidesk_domain::document::is_safe_document_name;

use crate::error::InfraError;

/// 生成文書ストア
///
/// ロックは持たない。ファイル名の一意化は [`allocate`](DocumentStore::allocate)
/// の衝突チェックで行う。
#[derive(Debug, Clone)]
pub struct DocumentStore {
    dir: PathBuf,
}

impl DocumentStore {
    /// ストアを開く（ディレクトリが無ければ作成する）
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, InfraError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// ストアのディレクトリ
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 新しい文書の出力先パスを確保する
    ///
    /// `<stem>.<ext>` が既に存在する場合は `<stem>_2.<ext>`, `<stem>_3.<ext>` と
    /// 連番を付けて衝突を回避する。同一秒内の重複送信対策。
    pub fn allocate(&self, file_stem: &str, extension: &str) -> PathBuf {
        let mut candidate = self.dir.join(format!("{file_stem}.{extension}"));
        let mut n = 2u32;
        while candidate.exists() {
            candidate = self.dir.join(format!("{file_stem}_{n}.{extension}"));
            n += 1;
        }
        candidate
    }

    /// ダウンロード要求のファイル名を検証し、実在するパスへ解決する
    ///
    /// 不正な名前（パス区切り、`..`、拡張子違い）と存在しないファイルは `None`。
    pub fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        if !is_safe_document_name(file_name) {
            return None;
        }
        let path = self.dir.join(file_name);
        path.is_file().then_some(path)
    }

    /// ストア内のファイル数（テスト・診断用）
    pub fn count(&self) -> Result<usize, InfraError> {
        Ok(fs::read_dir(&self.dir)?.count())
    }
}
