//! # 申込データ
//!
//! 1 回のフォーム送信から組み立てられるフィールド名 → 値のマッピング。
//! リクエストの寿命を超えて保持されることはない。

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Local};

use crate::category::{COMMON_FIELDS, SUBMISSION_DATE_FIELD, ServiceCategory};

/// 申込日時のフォーマット（文書・メール本文に埋め込まれる）
pub const SUBMISSION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 申込データ
///
/// スキーマ駆動で組み立てる: カテゴリのスキーマに含まれるフィールドだけを
/// 採用し、送信されなかったフィールドは空文字列になる。スキーマ外の
/// フィールドは捨てられる。テンプレートのコンテキストとして全フィールドが
/// 常に存在することが、欠損フィールドを空としてレンダリングする前提になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    category: ServiceCategory,
    values:   BTreeMap<String, String>,
}

impl Submission {
    /// フォーム送信内容から申込データを組み立てる
    ///
    /// 共通フィールド → カテゴリ固有フィールドの順に採用し、
    /// `submission_date` をサーバー側の時刻で付与する。
    pub fn from_form(
        category: ServiceCategory,
        form: &HashMap<String, String>,
        submitted_at: DateTime<Local>,
    ) -> Self {
        let mut values = BTreeMap::new();

        for field in COMMON_FIELDS.iter().chain(category.fields()) {
            let value = form.get(*field).cloned().unwrap_or_default();
            values.insert((*field).to_string(), value);
        }

        values.insert(
            SUBMISSION_DATE_FIELD.to_string(),
            submitted_at.format(SUBMISSION_DATE_FORMAT).to_string(),
        );

        Self { category, values }
    }

    /// カテゴリ
    pub fn category(&self) -> ServiceCategory {
        self.category
    }

    /// フィールド値を取得する（スキーマ外のフィールドは `None`）
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// 依頼者名（未入力の場合は `"client"`）
    pub fn client_name(&self) -> &str {
        match self.get("client_name") {
            Some(name) if !name.trim().is_empty() => name,
            _ => "client",
        }
    }

    /// 依頼者のメールアドレス（未入力の場合は `None`）
    ///
    /// メールの Reply-To ヘッダに使用する。
    pub fn submitter_email(&self) -> Option<&str> {
        self.get("email").filter(|e| !e.trim().is_empty())
    }

    /// 申込日時（フォーマット済み文字列）
    pub fn submission_date(&self) -> &str {
        self.get(SUBMISSION_DATE_FIELD).unwrap_or_default()
    }

    /// 全フィールドのイテレータ（テンプレートコンテキスト構築用）
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
