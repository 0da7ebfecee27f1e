//! # 文書ファイル書き出し
//!
//! レンダリング済みのプレーンテキストを `.docx` ファイルへ書き出す。
//! 1 行が 1 段落に対応する（空行も空段落として保持される）。

use std::{fs::File, path::Path};

use docx_rs::{Docx, Paragraph, Run};

use crate::error::InfraError;

/// テキスト行を `.docx` ファイルとして書き出す
///
/// # 引数
///
/// - `path`: 出力先パス（親ディレクトリは存在していること）
/// - `lines`: 段落になる行（順序が保持される）
pub fn write_document(path: &Path, lines: &[&str]) -> Result<(), InfraError> {
    let file = File::create(path)?;

    let mut docx = Docx::new();
    for line in lines {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
    }

    docx.build()
        .pack(file)
        .map_err(|e| InfraError::DocumentWrite(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_documentがdocxファイルを生成する() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.docx");

        write_document(&path, &["BUSINESS PLAN", "", "Prepared for: Acme Co"]).unwrap();

        let content = std::fs::read(&path).unwrap();
        assert!(!content.is_empty());
        // .docx は ZIP コンテナ（マジックナンバー PK）
        assert_eq!(&content[..2], b"PK");
    }

    #[test]
    fn 空の行リストでも有効なファイルを生成する() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.docx");

        write_document(&path, &[]).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn 存在しないディレクトリへの書き出しはioエラーになる() {
        let result = write_document(Path::new("/nonexistent/dir/test.docx"), &["line"]);

        assert!(matches!(result, Err(InfraError::Io(_))));
    }
}
