//! # 通知
//!
//! メール通知に関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **ソフトフェイル**: 通知送信の失敗は申込の受付に影響しない
//! - **テンプレート分離**: メール本文の生成は portal 側（送信側は完成した
//!   [`EmailMessage`] だけを受け取る）

use thiserror::Error;

/// 生成文書（.docx）の MIME タイプ
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// 送信に必要な設定（認証情報・宛先）が欠けている
    ///
    /// 設定の欠落は起動時ではなく送信時のエラーとして扱う。
    #[error("通知設定が不足: {0}")]
    NotConfigured(String),

    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}

/// メール添付ファイル
#[derive(Debug, Clone)]
pub struct EmailAttachment {
    /// 添付ファイル名
    pub file_name:    String,
    /// MIME タイプ
    pub content_type: String,
    /// ファイル内容
    pub content:      Vec<u8>,
}

/// メールメッセージ
///
/// 本文組み立ての出力。`NotificationSender` に渡される。
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// 送信先メールアドレス（固定の受付担当者宛て）
    pub to:         String,
    /// Reply-To（依頼者のメールアドレス。未入力の場合は省略）
    pub reply_to:   Option<String>,
    /// 件名
    pub subject:    String,
    /// プレーンテキスト本文
    pub text_body:  String,
    /// 添付ファイル（生成文書）
    pub attachment: Option<EmailAttachment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_errorのメッセージに原因が含まれる() {
        let error = NotificationError::SendFailed("connection refused".to_string());
        assert!(error.to_string().contains("connection refused"));

        let error = NotificationError::NotConfigured("EMAIL_ADDRESS".to_string());
        assert!(error.to_string().contains("EMAIL_ADDRESS"));
    }

    #[test]
    fn docxのmimeタイプが正しい() {
        assert_eq!(
            DOCX_CONTENT_TYPE,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }
}
