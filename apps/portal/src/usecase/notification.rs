//! # 通知ユースケース
//!
//! 受付完了メールの件名・本文を組み立てて送信する。
//!
//! ## 設計方針
//!
//! - **ソフトフェイル**: 送信失敗は呼び出し側へ `Err` で返すが、
//!   申込の受付自体は成功として扱われる（ハンドラ側で文言を切り替える）
//! - **Reply-To**: 依頼者のメールアドレスを Reply-To に設定し、
//!   受付担当者がそのまま返信できるようにする

use std::sync::Arc;

use iraidesk_domain::{
    Submission,
    notification::{DOCX_CONTENT_TYPE, EmailAttachment, EmailMessage, NotificationError},
};
use iraidesk_infra::notification::NotificationSender;
use iraidesk_shared::{event_log::event, log_business_event};

use super::intake::GeneratedDocument;

/// 通知サービス
pub struct NotificationService {
    sender:   Arc<dyn NotificationSender>,
    receiver: Option<String>,
}

impl NotificationService {
    pub fn new(sender: Arc<dyn NotificationSender>, receiver: Option<String>) -> Self {
        Self { sender, receiver }
    }

    /// 受付完了メールを送信する
    ///
    /// 生成された文書を添付し、固定の受付担当者宛てに送信する。
    pub async fn notify_submission(
        &self,
        submission: &Submission,
        document: &GeneratedDocument,
    ) -> Result<(), NotificationError> {
        let result = self.send(submission, document).await;

        match &result {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_SENT,
                    event.result = event::result::SUCCESS,
                    service_category = %submission.category(),
                    document_file_name = %document.file_name,
                );
            },
            Err(e) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.result = event::result::FAILURE,
                    service_category = %submission.category(),
                    document_file_name = %document.file_name,
                    error = %e,
                );
            },
        }

        result
    }

    async fn send(
        &self,
        submission: &Submission,
        document: &GeneratedDocument,
    ) -> Result<(), NotificationError> {
        let Some(receiver) = &self.receiver else {
            return Err(NotificationError::NotConfigured(
                "RECEIVER_EMAIL".to_string(),
            ));
        };

        let content = tokio::fs::read(&document.path)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("添付ファイルの読み出し: {e}")))?;

        let email = EmailMessage {
            to:         receiver.clone(),
            reply_to:   submission.submitter_email().map(str::to_string),
            subject:    build_subject(submission),
            text_body:  build_body(submission),
            attachment: Some(EmailAttachment {
                file_name: document.file_name.clone(),
                content_type: DOCX_CONTENT_TYPE.to_string(),
                content,
            }),
        };

        self.sender.send_email(&email).await
    }
}

fn build_subject(submission: &Submission) -> String {
    format!(
        "New {} Submission from {}",
        submission.category().title(),
        submission.client_name()
    )
}

fn build_body(submission: &Submission) -> String {
    format!(
        "New {} submission received.\n\n\
         Client Name: {}\n\
         Phone Number: {}\n\
         Email: {}\n\
         Submitted At: {}\n\n\
         Please find the attached document for more details.\n",
        submission.category().title(),
        submission.get("client_name").unwrap_or_default(),
        submission.get("phone_number").unwrap_or_default(),
        submission.get("email").unwrap_or_default(),
        submission.submission_date(),
    )
}
