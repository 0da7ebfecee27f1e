//! # HTTP ハンドラ
//!
//! ルートごとのリクエスト処理。ページ表示、フォーム受付、
//! 文書ダウンロード、ヘルスチェックに分かれる。
//!
//! ## フラッシュメッセージ
//!
//! 未知のカテゴリへのアクセスはエラーページではなく、フラッシュ
//! メッセージ付きでトップページへリダイレクトする。メッセージ本文
//! ではなくコードを Cookie に載せ、表示時に文言へ変換して消去する。

mod download;
mod health;
mod pages;
mod submit;

use axum_extra::extract::cookie::{Cookie, CookieJar};
pub use download::download_document;
pub use health::health_check;
pub use pages::{
    other_services_general_request, services_business, services_graphic, services_other,
    show_form, welcome,
};
pub use submit::submit_form;

/// フラッシュメッセージの Cookie 名
const FLASH_COOKIE: &str = "iraidesk_flash";

/// トップページに 1 回だけ表示されるメッセージ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashMessage {
    /// 未知のカテゴリのフォームが要求された
    InvalidService,
    /// 未知のカテゴリへの送信が行われた
    InvalidSubmission,
}

impl FlashMessage {
    /// Cookie に載せる識別コード
    fn code(self) -> &'static str {
        match self {
            Self::InvalidService => "invalid_service",
            Self::InvalidSubmission => "invalid_submission",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "invalid_service" => Some(Self::InvalidService),
            "invalid_submission" => Some(Self::InvalidSubmission),
            _ => None,
        }
    }

    /// 表示用の文言
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidService => "Invalid service selected.",
            Self::InvalidSubmission => "Invalid service submission.",
        }
    }
}

/// フラッシュメッセージを Cookie にセットする
fn set_flash(jar: CookieJar, flash: FlashMessage) -> CookieJar {
    let mut cookie = Cookie::new(FLASH_COOKIE, flash.code());
    cookie.set_path("/");
    cookie.set_http_only(true);
    jar.add(cookie)
}

/// フラッシュメッセージを取り出して消去する
fn take_flash(jar: CookieJar) -> (CookieJar, Option<FlashMessage>) {
    let flash = jar
        .get(FLASH_COOKIE)
        .and_then(|cookie| FlashMessage::from_code(cookie.value()));

    let jar = if flash.is_some() {
        // 削除 Cookie はセット時とパスが一致している必要がある
        let mut removal = Cookie::from(FLASH_COOKIE);
        removal.set_path("/");
        jar.remove(removal)
    } else {
        jar
    };

    (jar, flash)
}
