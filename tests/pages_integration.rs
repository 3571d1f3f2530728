use axum::http::StatusCode;
use axum_test::TestServer;
use qa_chat_ui::AppState;
use qa_chat_ui::config::AppConfig;
use qa_chat_ui::server::router;
use qa_chat_ui::ui::chat::QUESTION_INPUT_ID;
use qa_chat_ui::ui::examples::EXAMPLES;
use std::sync::Arc;

fn server(use_login: bool) -> TestServer {
    let flag = if use_login { "true" } else { "false" };
    let config = AppConfig::load_from_args(["qa-chat-ui", "--use-login", flag])
        .expect("Failed to load config");
    TestServer::new(router(AppState::new(Arc::new(config)))).expect("Failed to start test server")
}

#[tokio::test]
async fn index_renders_layout_and_examples() {
    let response = server(false).get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(&format!(r#"id="{QUESTION_INPUT_ID}""#)));
    assert!(html.contains(r#"role="banner""#));
    assert!(html.contains(r#"<main id="content""#));
    for example in EXAMPLES {
        let attr = format!(r#"data-example-value="{}""#, example.value);
        assert_eq!(html.matches(&attr).count(), 1);
    }
}

#[tokio::test]
async fn login_control_follows_configuration() {
    let with_login = server(true).get("/").await.text();
    assert!(with_login.contains(r#"id="login-button""#));

    let without_login = server(false).get("/").await.text();
    assert!(!without_login.contains(r#"id="login-button""#));
    assert!(without_login.contains(r#"<main id="content""#));
}

#[tokio::test]
async fn unknown_path_renders_not_found_in_layout() {
    let response = server(false).get("/missing/page").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let html = response.text();
    assert!(html.contains("Page not found"));
    assert!(html.contains(r#"<main id="content""#));
}

#[tokio::test]
async fn static_assets_are_served() {
    let server = server(false);

    let icon = server.get("/static/github.svg").await;
    icon.assert_status_ok();
    assert!(icon.text().contains("<svg"));

    let script = server.get("/static/examples.js").await;
    script.assert_status_ok();
    let script = script.text();
    assert!(script.contains("[data-example-value]"));
    assert!(script.contains(&format!(r#"getElementById("{QUESTION_INPUT_ID}")"#)));
}

#[tokio::test]
async fn healthz_answers_ok() {
    let response = server(false).get("/healthz").await;
    response.assert_status_ok();
    response.assert_text("ok");
}
