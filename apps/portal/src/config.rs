//! # ポータル設定
//!
//! 環境変数からポータルサーバーの設定を読み込む。
//!
//! メール送信の認証情報は起動時には必須としない。欠落は送信時の
//! エラーとして扱う（文書生成とダウンロードは通知設定なしでも動く）。

use std::env;

/// ポータルサーバーの設定
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// 生成文書の保存ディレクトリ
    pub docs_dir:     String,
    /// 通知設定
    pub notification: NotificationConfig,
}

/// 通知機能の設定
///
/// `NOTIFICATION_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `smtp`: メール投稿エージェントへのログイン送信（デフォルト）
/// - `ses`: Amazon SES v2 経由で送信
/// - `noop`: 送信しない（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// 送信バックエンド（"smtp" | "ses" | "noop"）
    pub backend:          String,
    /// SMTP ホスト（backend=smtp の場合に使用）
    pub smtp_host:        String,
    /// SMTP ポート（backend=smtp の場合に使用）
    pub smtp_port:        u16,
    /// 送信元メールアドレス兼 SMTP ユーザー名
    pub email_address:    Option<String>,
    /// SMTP パスワード
    pub email_password:   Option<String>,
    /// 受付担当者の宛先アドレス（未設定の場合は送信元と同一）
    pub receiver_address: Option<String>,
}

impl PortalConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self {
            host:         env::var("PORTAL_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port:         env::var("PORTAL_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORTAL_PORT は有効なポート番号である必要があります"),
            docs_dir:     env::var("GENERATED_DOCS_DIR")
                .unwrap_or_else(|_| "generated_docs".to_string()),
            notification: NotificationConfig::from_env(),
        }
    }
}

impl NotificationConfig {
    /// 環境変数から通知設定を読み込む
    fn from_env() -> Self {
        let email_address = env::var("EMAIL_ADDRESS").ok();
        let receiver_address = env::var("RECEIVER_EMAIL").ok().or_else(|| email_address.clone());

        Self {
            backend: env::var("NOTIFICATION_BACKEND").unwrap_or_else(|_| "smtp".to_string()),
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "465".to_string())
                .parse()
                .expect("SMTP_PORT は有効なポート番号である必要があります"),
            email_address,
            email_password: env::var("EMAIL_PASSWORD").ok(),
            receiver_address,
        }
    }
}
