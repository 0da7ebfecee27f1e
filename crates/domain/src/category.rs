//! # サービスカテゴリ
//!
//! 受付フォームのカテゴリを定義する。
//!
//! ## 不変条件
//!
//! - カテゴリは固定の 4 種類のみ。未知の識別子は副作用が起きる前に拒否される
//! - 各カテゴリは文書テンプレートとフィールドスキーマにちょうど 1 つずつ対応する

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// 全カテゴリ共通の申込フィールド
///
/// カテゴリ固有フィールドより先に文書テンプレートへ渡される。
pub const COMMON_FIELDS: &[&str] = &["client_name", "phone_number", "email"];

/// サーバー側で付与される申込日時フィールド
pub const SUBMISSION_DATE_FIELD: &str = "submission_date";

/// サービスカテゴリ
///
/// URL パス（`/form/{category}`、`/submit/{category}`）の識別子は
/// snake_case で表現され、大文字小文字を区別せずにパースされる。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    /// 事業計画書の作成依頼
    BusinessPlan,
    /// 会社案内（ビジネスプロフィール）の作成依頼
    BusinessProfile,
    /// グラフィックデザインの依頼
    GraphicDesign,
    /// その他の一般依頼
    GeneralRequest,
}

impl ServiceCategory {
    /// 全カテゴリ（フォーム選択肢の列挙などに使用）
    pub const ALL: [Self; 4] = [
        Self::BusinessPlan,
        Self::BusinessProfile,
        Self::GraphicDesign,
        Self::GeneralRequest,
    ];

    /// 識別子をパースする
    ///
    /// 大文字小文字を区別しない。未知の識別子は `None`。
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_str(s).ok()
    }

    /// 表示用タイトル（メール件名、ページ見出しに使用）
    pub fn title(&self) -> &'static str {
        match self {
            Self::BusinessPlan => "Business Plan",
            Self::BusinessProfile => "Business Profile",
            Self::GraphicDesign => "Graphic Design",
            Self::GeneralRequest => "General Request",
        }
    }

    /// カテゴリ固有の申込フィールド（文書テンプレートへの出現順）
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::BusinessPlan => &[
                "business_name",
                "owner_name",
                "mission",
                "vision",
                "products",
                "target_market",
                "competitors",
                "marketing_strategy",
                "revenue",
                "expenses",
                "funding",
                "conclusion",
            ],
            Self::BusinessProfile => &[
                "business_name",
                "business_type",
                "established_year",
                "location",
                "services_offered",
                "achievements",
                "staff_count",
                "contact_info",
                "additional_notes",
            ],
            Self::GraphicDesign => &[
                "project_name",
                "design_type",
                "details",
                "deadline",
                "budget",
                "additional_notes",
            ],
            Self::GeneralRequest => &["request_type", "details", "delivery"],
        }
    }

    /// 対応する文書テンプレート名（拡張子なし）
    ///
    /// カテゴリ識別子と同名。テンプレートは portal 側で埋め込み登録される。
    pub fn template_name(&self) -> &'static str {
        self.into()
    }
}
