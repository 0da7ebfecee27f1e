//! # 通知送信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **3 つの実装**: SMTP（メール投稿エージェントへのログイン送信）、
//!   SES（ホスト型メール送信 API）、Noop（テスト・通知無効化用）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択
//! - **送信時エラー**: 認証情報の欠落は送信時に `NotConfigured` として報告する

mod mime;
mod noop;
mod ses;
mod smtp;

use async_trait::async_trait;
use iraidesk_domain::notification::{EmailMessage, NotificationError};
pub use mime::build_mime_message;
pub use noop::NoopNotificationSender;
pub use ses::SesNotificationSender;
pub use smtp::SmtpNotificationSender;

/// メール送信トレイト
///
/// 通知基盤の中核。メール送信の具体的な方法を抽象化する。
/// SMTP / SES / Noop の 3 実装を環境変数で切り替える。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}
