//! # IraiDesk インフラ層
//!
//! ファイルシステムと外部サービス( SMTP / SES )へのアクセスを担当する。
//!
//! ## モジュール構成
//!
//! - [`storage`] - 生成文書の保存ディレクトリ
//! - [`docx`] - レンダリング済みテキストの `.docx` 書き出し
//! - [`notification`] - `NotificationSender` trait と SMTP / SES / Noop 実装
//! - [`mock`] - テスト用モック（`test-utils` feature）

pub mod docx;
pub mod error;
pub mod notification;
pub mod storage;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::InfraError;
