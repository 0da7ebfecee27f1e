//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用し、TLS ラッパー（SMTPS）で
//! メール投稿エージェントへログイン送信する。
//!
//! 認証情報は起動時には検証しない。欠落している場合は送信時に
//! `NotConfigured` を返す（文書生成は影響を受けない）。

use async_trait::async_trait;
use iraidesk_domain::notification::{EmailMessage, NotificationError};
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    transport::smtp::authentication::Credentials,
};

use super::{NotificationSender, build_mime_message};

/// SMTP 通知送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
/// 送信元アドレスは SMTP ユーザー名と同一。
pub struct SmtpNotificationSender {
    host:     String,
    port:     u16,
    username: Option<String>,
    password: Option<String>,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: SMTP サーバーのホスト名（例: "smtp.gmail.com"）
    /// - `port`: SMTP サーバーのポート番号（例: 465）
    /// - `username`: 送信元メールアドレス兼ログインユーザー名（未設定可）
    /// - `password`: ログインパスワード（未設定可）
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username,
            password,
        }
    }
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let (Some(username), Some(password)) = (&self.username, &self.password) else {
            return Err(NotificationError::NotConfigured(
                "EMAIL_ADDRESS / EMAIL_PASSWORD が設定されていません".to_string(),
            ));
        };

        let message = build_mime_message(email, username)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)
            .map_err(|e| NotificationError::SendFailed(format!("SMTP リレー設定不正: {e}")))?
            .port(self.port)
            .credentials(Credentials::new(username.clone(), password.clone()))
            .build();

        transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(())
    }
}
