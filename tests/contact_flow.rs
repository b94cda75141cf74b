use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

fn form_body(name: &str, email: &str, subject: &str, message: &str) -> String {
    serde_urlencoded::to_string([
        ("name", name),
        ("email", email),
        ("subject", subject),
        ("message", message),
    ])
    .unwrap()
}

async fn post_contact(app: axum::Router, body: String) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_valid_submission_is_forwarded_and_resets_the_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("form-name=contact"))
        .and(body_string_contains("name=Ada+Lovelace"))
        .and(body_string_contains("email=ada%40example.com"))
        .and(body_string_contains("subject=Bug+Report"))
        .and(body_string_contains("message=The+receiver"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::test_app(&server.uri());
    let (status, body) = post_contact(
        app,
        form_body(
            "Ada Lovelace",
            "ada@example.com",
            "Bug Report",
            "The receiver shows a black screen.",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Thanks for reaching out!"));
    // The form came back empty.
    assert!(body.contains(r#"name="name" value="""#));
    assert!(!body.contains("Ada Lovelace"));
}

#[tokio::test]
async fn test_invalid_submission_lists_every_violation_and_stays_local() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = common::test_app(&server.uri());
    let (status, body) = post_contact(app, form_body("  ", "not-an-email", "", "short")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Name is required"));
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("Please select a subject"));
    assert!(body.contains("Message must be at least 10 characters long"));
    // Typed values survive the round trip for correction.
    assert!(body.contains(r#"name="email" value="not-an-email""#));
}

#[tokio::test]
async fn test_backend_error_offers_the_mail_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::test_app(&server.uri());
    let (status, body) = post_contact(
        app,
        form_body(
            "Grace Hopper",
            "grace@example.com",
            "Technical Support",
            "Playback stops after ten minutes.",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("the form service rejected it"));

    // The offered mailto link carries the typed values, URL-encoded. The
    // href is HTML-escaped in the page, so query separators appear as &amp;.
    assert!(body.contains("mailto:support@beamcast.app?subject=Technical%20Support"));
    assert!(body.contains("body=Name%3A%20Grace%20Hopper%0A"));
    assert!(body.contains("Email%3A%20grace%40example.com"));
    assert!(body.contains("Playback%20stops%20after%20ten%20minutes."));
}

#[tokio::test]
async fn test_concurrent_submission_is_answered_with_conflict() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(400)))
        .mount(&server)
        .await;

    let app = common::test_app(&server.uri());
    let second_app = app.clone();
    let body = form_body(
        "Ada Lovelace",
        "ada@example.com",
        "General Inquiry",
        "Sending this twice, impatiently.",
    );
    let second_body = body.clone();

    let (first, second) = tokio::join!(post_contact(app, body), async {
        // Give the first submission time to take the in-flight slot.
        tokio::time::sleep(Duration::from_millis(100)).await;
        post_contact(second_app, second_body).await
    });

    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(second.0, StatusCode::CONFLICT);
    assert!(second.1.contains("still being sent"));
}

#[tokio::test]
async fn test_unreachable_backend_reports_a_network_error() {
    // A port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    let app = common::test_app(&endpoint);
    let (status, body) = post_contact(
        app,
        form_body(
            "Grace Hopper",
            "grace@example.com",
            "Technical Support",
            "Playback stops after ten minutes.",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("a network error occurred"));
    assert!(body.contains("mailto:support@beamcast.app"));
}
