//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで HTML ページと文書テキストを生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **ページと文書の分離**: HTML ページ用と文書テキスト用で別エンジンを持つ
//! - **欠損フィールドは空**: 申込データがスキーマ全フィールドを持つため、
//!   未入力のプレースホルダは空文字列としてレンダリングされる

use iraidesk_domain::{ServiceCategory, Submission, category::COMMON_FIELDS};
use serde::Serialize;
use tera::{Context, Tera};

/// フォームのフィールド表示情報
#[derive(Debug, Serialize)]
struct FieldView {
    name:  &'static str,
    label: String,
}

/// フィールド名から表示ラベルを導出する（`business_name` → `Business name`）
fn field_label(name: &str) -> String {
    let mut label = name.replace('_', " ");
    if let Some(first) = label.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    label
}

fn field_views(fields: &[&'static str]) -> Vec<FieldView> {
    fields
        .iter()
        .map(|&name| FieldView {
            name,
            label: field_label(name),
        })
        .collect()
}

/// HTML ページレンダラー
pub struct PageRenderer {
    engine: Tera,
}

impl PageRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, tera::Error> {
        let mut engine = Tera::default();

        engine.add_raw_templates(vec![
            ("welcome.html", include_str!("../templates/pages/welcome.html")),
            (
                "choose_business_type.html",
                include_str!("../templates/pages/choose_business_type.html"),
            ),
            ("form.html", include_str!("../templates/pages/form.html")),
            (
                "success.html",
                include_str!("../templates/pages/success.html"),
            ),
        ])?;

        Ok(Self { engine })
    }

    /// トップページ（フラッシュメッセージ付き）
    pub fn render_welcome(&self, flash: Option<&str>) -> Result<String, tera::Error> {
        let mut context = Context::new();
        if let Some(flash) = flash {
            context.insert("flash", flash);
        }
        self.engine.render("welcome.html", &context)
    }

    /// 事業文書の種類選択ページ
    pub fn render_business_menu(&self) -> Result<String, tera::Error> {
        self.engine
            .render("choose_business_type.html", &Context::new())
    }

    /// カテゴリ別の申込フォーム
    pub fn render_form(&self, category: ServiceCategory) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("category", &category.to_string());
        context.insert("title", category.title());
        context.insert("common_fields", &field_views(COMMON_FIELDS));
        context.insert("fields", &field_views(category.fields()));
        self.engine.render("form.html", &context)
    }

    /// 受付完了ページ
    pub fn render_success(&self, file_name: &str, message: &str) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("file_name", file_name);
        context.insert("message", message);
        self.engine.render("success.html", &context)
    }
}

/// 文書テキストレンダラー
///
/// カテゴリごとのプレーンテキストテンプレートに申込フィールドを展開する。
/// レンダリング結果の 1 行が生成文書の 1 段落になる。
pub struct DocumentRenderer {
    engine: Tera,
}

impl DocumentRenderer {
    /// 新しいレンダラーインスタンスを作成
    pub fn new() -> Result<Self, tera::Error> {
        let mut engine = Tera::default();

        engine.add_raw_templates(vec![
            (
                "business_plan",
                include_str!("../templates/docs/business_plan.txt"),
            ),
            (
                "business_profile",
                include_str!("../templates/docs/business_profile.txt"),
            ),
            (
                "graphic_design",
                include_str!("../templates/docs/graphic_design.txt"),
            ),
            (
                "general_request",
                include_str!("../templates/docs/general_request.txt"),
            ),
        ])?;

        Ok(Self { engine })
    }

    /// 申込データを文書テキストにレンダリングする
    pub fn render(&self, submission: &Submission) -> Result<String, tera::Error> {
        let mut context = Context::new();
        for (field, value) in submission.iter() {
            context.insert(field, value);
        }
        self.engine
            .render(submission.category().template_name(), &context)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{Local, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_submission(category: ServiceCategory, pairs: &[(&str, &str)]) -> Submission {
        let form: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let at = Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        Submission::from_form(category, &form, at)
    }

    #[test]
    fn field_labelがアンダースコアを空白にし先頭を大文字化する() {
        assert_eq!(field_label("business_name"), "Business name");
        assert_eq!(field_label("email"), "Email");
    }

    #[test]
    fn 全カテゴリの文書テンプレートがレンダリングできる() {
        let renderer = DocumentRenderer::new().unwrap();

        for category in ServiceCategory::ALL {
            let submission = make_submission(category, &[("client_name", "Acme Co")]);
            let rendered = renderer.render(&submission).unwrap();

            assert!(rendered.contains("Acme Co"), "category: {category}");
            assert!(rendered.contains("2025-03-14 09:26:53"));
            assert!(!rendered.contains("{{"), "category: {category}");
        }
    }

    #[test]
    fn business_planの文書に供給された事業名が含まれる() {
        let renderer = DocumentRenderer::new().unwrap();
        let submission = make_submission(
            ServiceCategory::BusinessPlan,
            &[
                ("client_name", "Acme Co"),
                ("business_name", "Acme Rockets Ltd"),
                ("mission", "Fast delivery to orbit"),
            ],
        );

        let rendered = renderer.render(&submission).unwrap();

        assert!(rendered.contains("Acme Rockets Ltd"));
        assert!(rendered.contains("Fast delivery to orbit"));
    }

    #[test]
    fn 欠損フィールドは空としてレンダリングされる() {
        let renderer = DocumentRenderer::new().unwrap();
        let submission = make_submission(ServiceCategory::GraphicDesign, &[]);

        let rendered = renderer.render(&submission).unwrap();

        // 見出し行は残り、値の行は空になる
        assert!(rendered.contains("PROJECT NAME\n\n"));
    }

    #[test]
    fn 文書レンダリングは同一入力に対して冪等() {
        let renderer = DocumentRenderer::new().unwrap();
        let submission =
            make_submission(ServiceCategory::GeneralRequest, &[("details", "Translate")]);

        assert_eq!(
            renderer.render(&submission).unwrap(),
            renderer.render(&submission).unwrap()
        );
    }

    #[test]
    fn フォームページに送信先とフィールドが含まれる() {
        let renderer = PageRenderer::new().unwrap();

        let html = renderer.render_form(ServiceCategory::BusinessPlan).unwrap();

        assert!(html.contains(r#"action="/submit/business_plan""#));
        assert!(html.contains(r#"name="client_name""#));
        assert!(html.contains(r#"name="marketing_strategy""#));
    }

    #[test]
    fn welcomeページのフラッシュは任意() {
        let renderer = PageRenderer::new().unwrap();

        let without = renderer.render_welcome(None).unwrap();
        assert!(!without.contains("class=\"flash\""));

        let with = renderer.render_welcome(Some("Invalid service selected.")).unwrap();
        assert!(with.contains("Invalid service selected."));
    }

    #[test]
    fn 成功ページにファイル名とダウンロードリンクが含まれる() {
        let renderer = PageRenderer::new().unwrap();

        let html = renderer
            .render_success(
                "business_plan_Acme_Co_20250314092653.docx",
                "Form submitted successfully!",
            )
            .unwrap();

        assert!(html.contains("/download/business_plan_Acme_Co_20250314092653.docx"));
        assert!(html.contains("Form submitted successfully!"));
    }
}
