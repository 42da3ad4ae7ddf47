use fake::{Fake, faker::internet::en::SafeEmail};
use postwire_core::{SendError, SendSuccess};
use postwire_adapters::config::test;
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{header, method, path},
};

use crate::helpers::{API_KEY, SENDER_NAME, TestProvider};

fn success_body() -> serde_json::Value {
    json!({
        "success_count": 1,
        "fail_count": 0,
        "failed_recipients": [],
        "errors": []
    })
}

#[tokio::test]
async fn should_send_with_configured_defaults() {
    let app = TestProvider::spawn().await;

    Mock::given(path("/email/send"))
        .and(method("POST"))
        .and(header("X-Api-Key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.send(json!({ "to": "b@y.com", "subject": "Hi", "text": "Body" }))
        .await
        .unwrap();

    let bodies = app.received_bodies().await;
    assert_eq!(
        bodies[0],
        json!({
            "from": { "email": test::email_client::SENDER, "name": SENDER_NAME },
            "recipients": [{ "email": "b@y.com" }],
            "subject": "Hi",
            "text_body": "Body"
        })
    );
}

#[tokio::test]
async fn should_return_provider_success_unchanged() {
    let app = TestProvider::spawn().await;

    Mock::given(path("/email/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success_count": 2,
            "fail_count": 1,
            "failed_recipients": ["bounce@y.com"],
            "errors": ["mailbox unavailable"]
        })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let recipients: Vec<String> = (0..3).map(|_| SafeEmail().fake()).collect();
    let result = app
        .send(json!({ "to": recipients, "subject": "Hi", "html": "<p>Hi</p>" }))
        .await
        .unwrap();

    assert_eq!(
        result,
        SendSuccess {
            success_count: 2,
            fail_count: 1,
            failed_recipients: vec!["bounce@y.com".to_string()],
            errors: vec!["mailbox unavailable".to_string()],
        }
    );
}

#[tokio::test]
async fn should_raise_provider_error_on_unauthorized() {
    let app = TestProvider::spawn().await;

    Mock::given(path("/email/send"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "status": "invalid api key" })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let err = app
        .send(json!({ "to": "b@y.com", "subject": "Hi" }))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 401);
    assert_eq!(err.to_string(), "invalid api key");
}

#[tokio::test]
async fn should_not_call_provider_without_recipients() {
    let app = TestProvider::spawn().await;

    Mock::given(path("/email/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let err = app
        .send(json!({ "to": [{ "name": "No Address" }], "subject": "Hi" }))
        .await
        .unwrap_err();

    assert_eq!(err, SendError::validation("must have at least one recipient"));
}

#[tokio::test]
async fn should_reject_malformed_attachment_before_sending() {
    let app = TestProvider::spawn().await;

    Mock::given(path("/email/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let err = app
        .send(json!({
            "to": "b@y.com",
            "attachments": [{ "content": "hello" }]
        }))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn should_send_full_message() {
    let app = TestProvider::spawn().await;

    Mock::given(path("/email/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.send(json!({
        "from": "Support <support@x.com>",
        "to": [
            "first@y.com",
            { "name": "Broken" },
            { "name": "Second", "address": "second@y.com" }
        ],
        "replyTo": ["Help <help@x.com>", "ignored@x.com"],
        "subject": "Report",
        "html": "<p>See attached</p>",
        "text": "See attached",
        "headers": { "X-Campaign": "spring" },
        "attachments": [
            { "filename": "a.txt", "content": "hello" },
            {
                "filename": "b.txt",
                "content": "data:text/plain;base64,aGVsbG8=",
                "contentType": "text/plain",
                "cid": "b"
            }
        ]
    }))
    .await
    .unwrap();

    let bodies = app.received_bodies().await;
    assert_eq!(
        bodies[0],
        json!({
            "from": { "email": "support@x.com", "name": "Support" },
            "recipients": [
                { "email": "first@y.com" },
                { "email": "second@y.com", "name": "Second" }
            ],
            "reply_to": { "email": "help@x.com", "name": "Help" },
            "subject": "Report",
            "html_body": "<p>See attached</p>",
            "text_body": "See attached",
            "headers": { "X-Campaign": "spring" },
            "attachments": [
                {
                    "file_name": "a.txt",
                    "content_type": "application/octet-stream",
                    "data": "aGVsbG8=",
                    "is_base64": true
                },
                {
                    "file_name": "b.txt",
                    "content_type": "text/plain",
                    "data": "aGVsbG8=",
                    "content_id": "b",
                    "is_base64": true
                }
            ]
        })
    );
}

#[tokio::test]
async fn should_wrap_timeouts_as_internal_errors() {
    let app = TestProvider::spawn().await;

    Mock::given(path("/email/send"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body())
                .set_delay(std::time::Duration::from_secs(180)),
        )
        .expect(1)
        .mount(&app.email_server)
        .await;

    let err = app
        .send(json!({ "to": "b@y.com", "subject": "Hi" }))
        .await
        .unwrap_err();

    assert!(matches!(err, SendError::Transport(_)));
    assert_eq!(err.status_code(), 500);
}
