//! # 生成文書のファイル名規約
//!
//! `<category>_<sanitized_client_name>_<timestamp>.docx` 形式のファイル名を
//! 組み立てる。生成された文書は書き込み後に変更されない。
//!
//! ## 不変条件
//!
//! - タイムスタンプは `%Y%m%d%H%M%S`（14 桁）
//! - サニタイズ後の依頼者名は `[A-Za-z0-9_-]` のみを含む

use chrono::{DateTime, Local};

use crate::category::ServiceCategory;

/// 生成文書の拡張子
pub const DOCUMENT_EXTENSION: &str = "docx";

/// ファイル名のタイムスタンプフォーマット（14 桁）
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// 依頼者名をファイル名に安全な形へサニタイズする
///
/// 空白の連続は `_` 1 文字になり、英数字と `_-` 以外の文字は捨てられる。
/// `.` を落とすことで、生成されるファイルステムに `..` が混入しないことを
/// 保証する（ダウンロード時の検証と整合する）。
/// 結果が空になった場合は `client` にフォールバックする。
pub fn sanitize_client_name(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());

    for part in name.split_whitespace() {
        if !sanitized.is_empty() {
            sanitized.push('_');
        }
        sanitized.extend(
            part.chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-')),
        );
    }

    // フィルタで全文字が落ちると区切りの `_` だけが残りうる
    if sanitized.chars().all(|c| c == '_') {
        return "client".to_string();
    }
    sanitized
}

/// 文書のファイルステム（拡張子なし）を組み立てる
///
/// 同一秒内の重複送信はこのステムが衝突しうる。一意化はストア側の責務
/// （衝突時に連番サフィックスを付ける）。
pub fn document_file_stem(
    category: ServiceCategory,
    client_name: &str,
    generated_at: DateTime<Local>,
) -> String {
    format!(
        "{category}_{}_{}",
        sanitize_client_name(client_name),
        generated_at.format(FILE_TIMESTAMP_FORMAT)
    )
}

/// ダウンロード要求のファイル名が安全かどうか検証する
///
/// パス区切りや `..` を含む名前はストアのディレクトリ外を指しうるため拒否する。
pub fn is_safe_document_name(file_name: &str) -> bool {
    !file_name.is_empty()
        && file_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        && !file_name.contains("..")
        && file_name.ends_with(&format!(".{DOCUMENT_EXTENSION}"))
}
