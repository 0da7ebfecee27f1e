//! フォーム受付ハンドラ

use std::collections::HashMap;

use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Local;
use iraidesk_domain::{ServiceCategory, Submission};
use iraidesk_shared::{event_log::event, log_business_event};

use super::{FlashMessage, set_flash};
use crate::{app::AppState, error::PortalError};

/// 受付完了時の文言
const MESSAGE_SENT: &str = "Form submitted successfully! Check your email for confirmation.";
/// 受付は成功したが通知メールが送れなかったときの文言
const MESSAGE_EMAIL_FAILED: &str =
    "Form submitted but failed to send email. We will contact you soon.";

/// `POST /submit/{service_type}` フォーム送信の受付
///
/// 申込データの組み立て → 文書生成 → メール通知 → 完了ページの順に処理する。
/// 未知のカテゴリは一切の副作用なしでトップページへリダイレクトする。
/// メール送信の失敗は受付の成功を妨げない（完了ページの文言だけが変わる）。
pub async fn submit_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(service_type): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response, PortalError> {
    let Some(category) = ServiceCategory::parse(&service_type) else {
        log_business_event!(
            event.category = event::category::INTAKE,
            event.action = event::action::SUBMISSION_REJECTED,
            event.result = event::result::FAILURE,
            requested_category = %service_type,
        );
        let jar = set_flash(jar, FlashMessage::InvalidSubmission);
        return Ok((jar, Redirect::to("/")).into_response());
    };

    let submitted_at = Local::now();
    let submission = Submission::from_form(category, &form, submitted_at);

    log_business_event!(
        event.category = event::category::INTAKE,
        event.action = event::action::SUBMISSION_RECEIVED,
        event.result = event::result::SUCCESS,
        service_category = %category,
    );

    let document = state.intake.generate_document(&submission, submitted_at)?;

    let message = match state
        .notifier
        .notify_submission(&submission, &document)
        .await
    {
        Ok(()) => MESSAGE_SENT,
        Err(e) => {
            tracing::warn!(error = %e, "通知メールの送信に失敗（受付は継続）");
            MESSAGE_EMAIL_FAILED
        },
    };

    let html = state.pages.render_success(&document.file_name, message)?;
    Ok(Html(html).into_response())
}
