use std::sync::Arc;

use axum::http::StatusCode;
use questfolio::error::{SEND_ERROR_MESSAGE, VALIDATION_ERROR_MESSAGE};
use questfolio::routes::SUCCESS_MESSAGE;
use serde_json::{Value, json};

mod helpers;

use helpers::{RecordingMailer, body_string, post_json, test_app};

fn payload() -> Value {
    json!({
        "name": "Ada",
        "email": "ada@example.com",
        "subject": "Hello",
        "message": "Line one\nLine two",
    })
}

async fn error_of(response: axum::response::Response) -> String {
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    body["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_relay_sends_notification_then_acknowledgement() {
    let mailer = Arc::new(RecordingMailer::default());
    let response = post_json(
        test_app(mailer.clone()),
        "/api/contact",
        payload().to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body, json!({ "message": SUCCESS_MESSAGE }));

    let sent = mailer.sent();
    assert_eq!(sent.len(), 2);

    assert_eq!(sent[0].to, "owner@example.com");
    assert_eq!(sent[0].from, "portfolio@example.com");
    assert_eq!(sent[0].subject, "Portfolio Contact: Hello");
    assert!(sent[0].html_body.contains("ada@example.com"));
    assert!(sent[0].html_body.contains("Line one<br>Line two"));

    assert_eq!(sent[1].to, "ada@example.com");
    assert_eq!(sent[1].subject, "Thank you for contacting me!");
    assert!(sent[1].html_body.contains("Hi Ada,"));
    assert!(sent[1].html_body.contains("Owner"));
}

#[tokio::test]
async fn test_missing_or_empty_fields_are_rejected() {
    let cases = [
        json!({ "email": "ada@example.com", "subject": "Hello", "message": "Hi" }),
        json!({ "name": "", "email": "ada@example.com", "subject": "Hello", "message": "Hi" }),
        json!({ "name": "Ada", "email": "ada@example.com", "subject": "Hello", "message": null }),
        json!({}),
    ];

    for case in cases {
        let mailer = Arc::new(RecordingMailer::default());
        let response = post_json(test_app(mailer.clone()), "/api/contact", case.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{case}");
        assert_eq!(error_of(response).await, VALIDATION_ERROR_MESSAGE);
        assert_eq!(mailer.attempts(), 0);
    }
}

#[tokio::test]
async fn test_non_object_bodies_are_rejected() {
    for body in [r#"["Ada","ada@example.com","Hello","Hi"]"#, "[]", "42", r#""Ada""#] {
        let mailer = Arc::new(RecordingMailer::default());
        let response = post_json(test_app(mailer.clone()), "/api/contact", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(error_of(response).await, VALIDATION_ERROR_MESSAGE);
        assert_eq!(mailer.attempts(), 0);
    }
}

#[tokio::test]
async fn test_null_body_is_a_send_error() {
    let mailer = Arc::new(RecordingMailer::default());
    let response = post_json(test_app(mailer.clone()), "/api/contact", "null").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_of(response).await, SEND_ERROR_MESSAGE);
    assert_eq!(mailer.attempts(), 0);
}

#[tokio::test]
async fn test_notification_failure_skips_acknowledgement() {
    let mailer = Arc::new(RecordingMailer::failing_on(1));
    let response = post_json(
        test_app(mailer.clone()),
        "/api/contact",
        payload().to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_of(response).await, SEND_ERROR_MESSAGE);
    assert_eq!(mailer.attempts(), 1);
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_acknowledgement_failure_is_a_send_error() {
    let mailer = Arc::new(RecordingMailer::failing_on(2));
    let response = post_json(
        test_app(mailer.clone()),
        "/api/contact",
        payload().to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_of(response).await, SEND_ERROR_MESSAGE);

    // the owner was still notified
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "owner@example.com");
}

#[tokio::test]
async fn test_malformed_json_is_a_send_error() {
    let mailer = Arc::new(RecordingMailer::default());
    let response = post_json(test_app(mailer.clone()), "/api/contact", "{not json").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_of(response).await, SEND_ERROR_MESSAGE);
    assert_eq!(mailer.attempts(), 0);
}

#[tokio::test]
async fn test_submitted_html_is_escaped() {
    let mailer = Arc::new(RecordingMailer::default());
    let mut body = payload();
    body["name"] = json!("<script>alert(1)</script>");

    let response = post_json(test_app(mailer.clone()), "/api/contact", body.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);

    for message in mailer.sent() {
        assert!(!message.html_body.contains("<script>"));
        assert!(message.html_body.contains("alert(1)"));
    }
}

#[tokio::test]
async fn test_api_responses_are_not_cached() {
    let mailer = Arc::new(RecordingMailer::default());
    let response = post_json(test_app(mailer), "/api/contact", payload().to_string()).await;

    assert_eq!(
        response.headers()["cache-control"],
        "no-store, no-cache, must-revalidate, proxy-revalidate"
    );
}
