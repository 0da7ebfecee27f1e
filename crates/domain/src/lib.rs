//! # IraiDesk ドメイン層
//!
//! 受付フローの中核を担うドメインモデルを定義する。
//!
//! ## モジュール構成
//!
//! - [`category`] - サービスカテゴリとフィールドスキーマ
//! - [`submission`] - 1 リクエスト分の申込データ
//! - [`document`] - 生成文書のファイル名規約
//! - [`notification`] - メール通知のメッセージ型とエラー
//!
//! ## 依存関係の方向
//!
//! ```text
//! portal → infra → domain → shared
//! ```
//!
//! ドメイン層はインフラ層（ファイルシステム、メール送信）には一切依存しない。

pub mod category;
pub mod document;
pub mod notification;
pub mod submission;

pub use category::ServiceCategory;
pub use submission::Submission;
