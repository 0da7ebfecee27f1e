//! # IraiDesk ポータルサーバー
//!
//! 依頼受付ポータルのエントリポイント。フォームの表示と受付、
//! `.docx` 文書の生成、受付担当者へのメール通知を提供する。
//!
//! ## 環境変数
//!
//! | 変数名 | 説明 | デフォルト |
//! |--------|------|-----------|
//! | `PORTAL_HOST` | バインドアドレス | `0.0.0.0` |
//! | `PORTAL_PORT` | ポート番号 | `3000` |
//! | `GENERATED_DOCS_DIR` | 生成文書の保存ディレクトリ | `generated_docs` |
//! | `NOTIFICATION_BACKEND` | 通知バックエンド（`smtp` / `ses` / `noop`） | `smtp` |
//! | `SMTP_HOST` | SMTP ホスト | `smtp.gmail.com` |
//! | `SMTP_PORT` | SMTP ポート（SMTPS） | `465` |
//! | `EMAIL_ADDRESS` | 送信元アドレス兼 SMTP ユーザー名 | なし |
//! | `EMAIL_PASSWORD` | SMTP パスワード | なし |
//! | `RECEIVER_EMAIL` | 受付担当者の宛先 | `EMAIL_ADDRESS` と同一 |
//! | `LOG_FORMAT` | ログ出力形式（`json` / `pretty`） | `pretty` |
//! | `RUST_LOG` | ログレベルフィルタ | `info,iraidesk=debug` |
//!
//! メール認証情報は起動時には検証しない。欠落したまま送信が試みられた
//! 場合は通知だけが失敗し、受付と文書生成は通常どおり動作する。

use std::sync::Arc;

use anyhow::Context as _;
use aws_config::BehaviorVersion;
use iraidesk_infra::notification::{
    NoopNotificationSender, NotificationSender, SesNotificationSender, SmtpNotificationSender,
};
use iraidesk_portal::{
    app::{AppState, build_router},
    config::{NotificationConfig, PortalConfig},
};
use iraidesk_shared::observability::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("iraidesk-portal"));

    let config = PortalConfig::from_env();

    let sender = build_sender(&config.notification).await;
    let receiver = config.notification.receiver_address.clone();

    let state = AppState::new(&config.docs_dir, sender, receiver)
        .map_err(|e| anyhow::anyhow!("アプリケーション初期化に失敗: {e}"))?;
    let router = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗"))?;

    tracing::info!(
        addr = %addr,
        docs_dir = %config.docs_dir,
        backend = %config.notification.backend,
        "IraiDesk ポータルを起動"
    );

    axum::serve(listener, router)
        .await
        .context("サーバーの実行に失敗")?;

    Ok(())
}

/// 通知バックエンドを環境変数の指定から構築する
///
/// 未知のバックエンド名は警告を出して noop にフォールバックする。
async fn build_sender(config: &NotificationConfig) -> Arc<dyn NotificationSender> {
    match config.backend.as_str() {
        "smtp" => Arc::new(SmtpNotificationSender::new(
            config.smtp_host.clone(),
            config.smtp_port,
            config.email_address.clone(),
            config.email_password.clone(),
        )),
        "ses" => {
            let aws_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
            Arc::new(SesNotificationSender::new(
                aws_sdk_sesv2::Client::new(&aws_config),
                config.email_address.clone(),
            ))
        },
        "noop" => Arc::new(NoopNotificationSender),
        other => {
            tracing::warn!(backend = %other, "未知の通知バックエンド。noop を使用します");
            Arc::new(NoopNotificationSender)
        },
    }
}
