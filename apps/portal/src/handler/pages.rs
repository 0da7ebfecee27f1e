//! ページ表示ハンドラ

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use iraidesk_domain::ServiceCategory;

use super::{FlashMessage, set_flash, take_flash};
use crate::{app::AppState, error::PortalError};

/// `GET /` トップページ
///
/// 保留中のフラッシュメッセージを表示して消去する。
pub async fn welcome(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), PortalError> {
    let (jar, flash) = take_flash(jar);
    let html = state
        .pages
        .render_welcome(flash.map(FlashMessage::message))?;
    Ok((jar, Html(html)))
}

/// `GET /services/business` 事業文書の種類選択ページ
pub async fn services_business(
    State(state): State<AppState>,
) -> Result<Html<String>, PortalError> {
    Ok(Html(state.pages.render_business_menu()?))
}

/// `GET /services/graphic` グラフィックデザインのフォーム
pub async fn services_graphic(State(state): State<AppState>) -> Result<Html<String>, PortalError> {
    Ok(Html(state.pages.render_form(ServiceCategory::GraphicDesign)?))
}

/// `GET /services/other` 一般依頼のフォーム
pub async fn services_other(State(state): State<AppState>) -> Result<Html<String>, PortalError> {
    Ok(Html(state.pages.render_form(ServiceCategory::GeneralRequest)?))
}

/// `GET /other_services/general_request` 一般依頼のフォーム（旧パス互換）
pub async fn other_services_general_request(
    State(state): State<AppState>,
) -> Result<Html<String>, PortalError> {
    Ok(Html(state.pages.render_form(ServiceCategory::GeneralRequest)?))
}

/// `GET /form/{service_type}` カテゴリ別フォーム
///
/// 未知のカテゴリはフラッシュ付きでトップページへリダイレクトする。
pub async fn show_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(service_type): Path<String>,
) -> Result<Response, PortalError> {
    match ServiceCategory::parse(&service_type) {
        Some(category) => Ok(Html(state.pages.render_form(category)?).into_response()),
        None => {
            tracing::warn!(requested_category = %service_type, "未知のカテゴリのフォーム要求");
            let jar = set_flash(jar, FlashMessage::InvalidService);
            Ok((jar, Redirect::to("/")).into_response())
        },
    }
}
