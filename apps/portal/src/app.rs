//! # アプリケーション構築
//!
//! 依存関係（State）の初期化とルーターの構築を担当する。
//!
//! ## レイヤー順序
//!
//! axum の layer は下から上に適用されるため、リクエストは
//! `SetRequestIdLayer` → `TraceLayer` → `PropagateRequestIdLayer` の順に通る。
//! `x-request-id` の付与がスパン構築より先に行われることが重要。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use iraidesk_infra::{notification::NotificationSender, storage::DocumentStore};
use iraidesk_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    error::PortalError,
    handler,
    renderer::{DocumentRenderer, PageRenderer},
    usecase::{IntakeService, NotificationService},
};

/// アプリケーション全体で共有される状態
#[derive(Clone)]
pub struct AppState {
    pub pages:    Arc<PageRenderer>,
    pub intake:   Arc<IntakeService>,
    pub notifier: Arc<NotificationService>,
    pub store:    DocumentStore,
}

impl AppState {
    /// 状態を初期化する
    ///
    /// テンプレートの登録失敗と文書ディレクトリの作成失敗は起動時エラー。
    pub fn new(
        docs_dir: &str,
        sender: Arc<dyn NotificationSender>,
        receiver: Option<String>,
    ) -> Result<Self, PortalError> {
        let store = DocumentStore::open(docs_dir)?;

        Ok(Self {
            pages: Arc::new(PageRenderer::new()?),
            intake: Arc::new(IntakeService::new(DocumentRenderer::new()?, store.clone())),
            notifier: Arc::new(NotificationService::new(sender, receiver)),
            store,
        })
    }
}

/// ルーターを構築する
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::welcome))
        .route("/services/business", get(handler::services_business))
        .route("/services/graphic", get(handler::services_graphic))
        .route("/services/other", get(handler::services_other))
        .route(
            "/other_services/general_request",
            get(handler::other_services_general_request),
        )
        .route("/form/{service_type}", get(handler::show_form))
        .route("/submit/{service_type}", post(handler::submit_form))
        .route("/download/{file_name}", get(handler::download_document))
        .route("/health", get(handler::health_check))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .with_state(state)
}
