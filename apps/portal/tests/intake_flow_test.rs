//! 受付フローの統合テスト
//!
//! ルーター全体を `tower::ServiceExt::oneshot` で駆動し、
//! フォーム受付 → 文書生成 → 通知 → ダウンロードの一連の流れを検証する。

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
};
use http::{Request, StatusCode, header};
use iraidesk_infra::mock::MockNotificationSender;
use iraidesk_portal::app::{AppState, build_router};
use pretty_assertions::assert_eq;
use regex::Regex;
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    sender: Arc<MockNotificationSender>,
    docs:   TempDir,
}

fn spawn_app(sender: MockNotificationSender) -> TestApp {
    let docs = tempfile::tempdir().unwrap();
    let sender = Arc::new(sender);
    let state = AppState::new(
        docs.path().to_str().unwrap(),
        sender.clone(),
        Some("desk@example.com".to_string()),
    )
    .unwrap();

    TestApp {
        router: build_router(state),
        sender,
        docs,
    }
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_request(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

fn doc_count(app: &TestApp) -> usize {
    std::fs::read_dir(app.docs.path()).unwrap().count()
}

#[tokio::test]
async fn 受付から通知とダウンロードまでの正常系() {
    let app = spawn_app(MockNotificationSender::new());

    let response = app
        .router
        .clone()
        .oneshot(form_request(
            "/submit/business_plan",
            "client_name=Acme+Co&email=acme%40example.com&business_name=Acme+Rockets+Ltd",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;

    // ファイル名は <カテゴリ>_<依頼者名>_<14桁タイムスタンプ>.docx
    let pattern = Regex::new(r"business_plan_Acme_Co_\d{14}\.docx").unwrap();
    let file_name = pattern
        .find(&html)
        .expect("完了ページに生成ファイル名が含まれる")
        .as_str()
        .to_string();
    assert!(html.contains("Form submitted successfully!"));
    assert_eq!(doc_count(&app), 1);

    // 通知メールが送信され、Reply-To が依頼者宛てになっている
    let sent = app.sender.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "desk@example.com");
    assert_eq!(sent[0].reply_to.as_deref(), Some("acme@example.com"));
    assert_eq!(sent[0].subject, "New Business Plan Submission from Acme Co");
    assert_eq!(
        sent[0].attachment.as_ref().unwrap().file_name,
        file_name
    );

    // 生成された文書をダウンロードできる
    let response = app
        .router
        .clone()
        .oneshot(get(&format!("/download/{file_name}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment;"));
    assert!(disposition.contains(&file_name));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn 全カテゴリで文書が規約どおりの名前で生成される() {
    let app = spawn_app(MockNotificationSender::new());

    for category in [
        "business_plan",
        "business_profile",
        "graphic_design",
        "general_request",
    ] {
        let response = app
            .router
            .clone()
            .oneshot(form_request(
                &format!("/submit/{category}"),
                "client_name=Jane+Doe",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "category: {category}");
        let html = body_string(response).await;
        let pattern = Regex::new(&format!(r"{category}_Jane_Doe_\d{{14}}\.docx")).unwrap();
        assert!(pattern.is_match(&html), "category: {category}");
    }

    assert_eq!(doc_count(&app), 4);
}

#[tokio::test]
async fn 未知のカテゴリへの送信は副作用なしでリダイレクトされる() {
    let app = spawn_app(MockNotificationSender::new());

    let response = app
        .router
        .clone()
        .oneshot(form_request("/submit/unknown_type", "client_name=Acme"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert_eq!(doc_count(&app), 0);
    assert!(app.sender.sent_emails().is_empty());
}

#[tokio::test]
async fn 未知カテゴリのフラッシュがトップページに一度だけ表示される() {
    let app = spawn_app(MockNotificationSender::new());

    let response = app
        .router
        .clone()
        .oneshot(get("/form/unknown_type"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    let cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.contains("iraidesk_flash=invalid_service"));

    // リダイレクト先でフラッシュが表示され、Cookie が消去される
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, "iraidesk_flash=invalid_service")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let removal = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(removal.contains("iraidesk_flash="));
    let html = body_string(response).await;
    assert!(html.contains("Invalid service selected."));
}

#[tokio::test]
async fn メール送信失敗でも文書は生成されダウンロードできる() {
    let app = spawn_app(MockNotificationSender::failing("connection refused"));

    let response = app
        .router
        .clone()
        .oneshot(form_request(
            "/submit/general_request",
            "client_name=Acme+Co&request_type=Translation",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("failed to send email"));

    let pattern = Regex::new(r"general_request_Acme_Co_\d{14}\.docx").unwrap();
    let file_name = pattern.find(&html).unwrap().as_str().to_string();
    assert_eq!(doc_count(&app), 1);

    let response = app
        .router
        .clone()
        .oneshot(get(&format!("/download/{file_name}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn 不正なダウンロード名は404になる() {
    let app = spawn_app(MockNotificationSender::new());

    for name in ["missing.docx", "notes.txt", "a..b.docx"] {
        let response = app
            .router
            .clone()
            .oneshot(get(&format!("/download/{name}")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "name: {name}");
    }
}

#[tokio::test]
async fn 各ページが200を返す() {
    let app = spawn_app(MockNotificationSender::new());

    for path in [
        "/",
        "/services/business",
        "/services/graphic",
        "/services/other",
        "/other_services/general_request",
        "/form/business_plan",
        "/form/business_profile",
        "/form/graphic_design",
        "/form/general_request",
    ] {
        let response = app.router.clone().oneshot(get(path)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "path: {path}");
    }
}

#[tokio::test]
async fn ヘルスチェックがhealthyを返す() {
    let app = spawn_app(MockNotificationSender::new());

    let response = app.router.clone().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn 全レスポンスにリクエストidが付与される() {
    let app = spawn_app(MockNotificationSender::new());

    let response = app.router.clone().oneshot(get("/")).await.unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id ヘッダが付与される")
        .to_str()
        .unwrap();
    assert!(!request_id.is_empty());
}
