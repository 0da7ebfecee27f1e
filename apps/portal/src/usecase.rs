//! # ユースケース層
//!
//! ハンドラから呼び出されるアプリケーションロジック。
//! 文書生成（受付 → レンダリング → `.docx` 書き出し）と
//! メール通知（件名・本文の組み立て → 送信）を提供する。

mod intake;
mod notification;

pub use intake::{GeneratedDocument, IntakeService};
pub use notification::NotificationService;
