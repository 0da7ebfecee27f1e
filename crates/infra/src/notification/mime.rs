//! MIME メッセージ構築
//!
//! [`EmailMessage`] から lettre の `Message` を組み立てる。
//! SMTP 送信はこの `Message` をそのまま送り、SES 送信は
//! `formatted()` で得た生バイト列を Raw コンテンツとして送る。

use iraidesk_domain::notification::{EmailMessage, NotificationError};
use lettre::message::{
    Attachment,
    Mailbox,
    Message,
    MultiPart,
    SinglePart,
    header::ContentType,
};

/// [`EmailMessage`] から MIME メッセージを構築する
///
/// Reply-To はパースできた場合のみ設定する（依頼者入力のアドレスは
/// 検証されないため、不正でも送信自体は継続する）。
pub fn build_mime_message(
    email: &EmailMessage,
    from_address: &str,
) -> Result<Message, NotificationError> {
    let mut builder = Message::builder()
        .from(
            from_address
                .parse()
                .map_err(|e| NotificationError::SendFailed(format!("送信元アドレス不正: {e}")))?,
        )
        .to(email
            .to
            .parse()
            .map_err(|e| NotificationError::SendFailed(format!("宛先アドレス不正: {e}")))?)
        .subject(email.subject.clone());

    if let Some(reply_to) = &email.reply_to {
        match reply_to.parse::<Mailbox>() {
            Ok(mailbox) => builder = builder.reply_to(mailbox),
            Err(e) => {
                tracing::warn!(reply_to = %reply_to, error = %e, "Reply-To をパースできないため省略");
            }
        }
    }

    let text_part = SinglePart::builder()
        .header(ContentType::TEXT_PLAIN)
        .body(email.text_body.clone());

    let message = match &email.attachment {
        Some(att) => {
            let content_type = ContentType::parse(&att.content_type).map_err(|e| {
                NotificationError::SendFailed(format!("添付の Content-Type 不正: {e}"))
            })?;
            let attachment_part =
                Attachment::new(att.file_name.clone()).body(att.content.clone(), content_type);

            builder.multipart(
                MultiPart::mixed()
                    .singlepart(text_part)
                    .singlepart(attachment_part),
            )
        }
        None => builder.singlepart(text_part),
    }
    .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))?;

    Ok(message)
}
