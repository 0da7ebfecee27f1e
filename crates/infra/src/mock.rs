//! # テスト用モック送信
//!
//! ユースケース・ハンドラテストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! iraidesk-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use iraidesk_domain::notification::{EmailMessage, NotificationError};

use crate::notification::NotificationSender;

/// 送信したメールを記録するモック送信
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent:      Arc<Mutex<Vec<EmailMessage>>>,
    fail_with: Option<String>,
}

impl MockNotificationSender {
    /// 常に成功するモックを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に `SendFailed` を返すモックを作成
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            sent:      Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(reason.into()),
        }
    }

    /// 送信されたメールのコピーを返す
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        if let Some(reason) = &self.fail_with {
            return Err(NotificationError::SendFailed(reason.clone()));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}
