//! SES 通知送信実装
//!
//! AWS SES v2 API を使用してメールを送信する。
//!
//! Simple コンテンツは添付ファイルを運べないため、lettre で組み立てた
//! MIME メッセージを Raw コンテンツとして送信する。

use async_trait::async_trait;
use aws_sdk_sesv2::{
    Client,
    primitives::Blob,
    types::{Destination, EmailContent, RawMessage},
};
use iraidesk_domain::notification::{EmailMessage, NotificationError};

use super::{NotificationSender, build_mime_message};

/// SES 通知送信
///
/// `aws_sdk_sesv2::Client` をラップする。
/// 送信元アドレスは SES で検証済みであること。
pub struct SesNotificationSender {
    client:       Client,
    from_address: Option<String>,
}

impl SesNotificationSender {
    /// 新しい SES 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `client`: AWS SES v2 クライアント
    /// - `from_address`: 送信元メールアドレス（未設定の場合は送信時エラー）
    pub fn new(client: Client, from_address: Option<String>) -> Self {
        Self {
            client,
            from_address,
        }
    }
}

#[async_trait]
impl NotificationSender for SesNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let Some(from_address) = &self.from_address else {
            return Err(NotificationError::NotConfigured(
                "EMAIL_ADDRESS が設定されていません".to_string(),
            ));
        };

        let message = build_mime_message(email, from_address)?;

        let raw = RawMessage::builder()
            .data(Blob::new(message.formatted()))
            .build()
            .map_err(|e| NotificationError::SendFailed(format!("Raw メッセージ構築失敗: {e}")))?;

        let destination = Destination::builder().to_addresses(&email.to).build();

        self.client
            .send_email()
            .from_email_address(from_address)
            .destination(destination)
            .content(EmailContent::builder().raw(raw).build())
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SES 送信失敗: {e}")))?;

        Ok(())
    }
}
