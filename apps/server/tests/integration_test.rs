use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

use tocify_server::{build_router, responses::codes, state::AppState};

const BOUNDARY: &str = "X-TOCIFY-TEST-BOUNDARY";
const UPLOAD_LIMIT: usize = 64 * 1024;

fn test_router() -> Router {
    build_router(AppState::new('#'), UPLOAD_LIMIT)
}

/// Build a multipart request for the parser endpoint from raw part bytes.
fn upload_request(part_name: &str, content_type: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{part_name}\"; filename=\"input.txt\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/v1/files/parser")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn parse_upload_succeeds() {
    let text = "GREATEST MAN IN ALIVE\n#Chapter one\nthis story about awesome dude that call name is Jack\n##Jack's characteristics";
    let response = test_router()
        .oneshot(upload_request("file", "text/plain", text.as_bytes()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["code"], codes::SUCCESS);

    let html = json["data"].as_str().expect("data is the HTML string");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Table of contents:</h1>"));
    assert!(html.contains(">Chapter one</a>"));
    assert!(html.contains(">-Jack's characteristics</a>"));
    assert!(html.contains("<div>GREATEST MAN IN ALIVE</div>"));
}

#[tokio::test]
async fn parse_upload_is_deterministic() {
    let text = "#One\nbody\n##Two";
    let first = test_router()
        .oneshot(upload_request("file", "text/plain", text.as_bytes()))
        .await
        .unwrap();
    let second = test_router()
        .oneshot(upload_request("file", "text/plain", text.as_bytes()))
        .await
        .unwrap();

    let first = response_json(first).await;
    let second = response_json(second).await;
    assert_eq!(first["data"], second["data"]);
}

#[tokio::test]
async fn wrong_content_type_is_rejected() {
    let response = test_router()
        .oneshot(upload_request("file", "application/json", b"{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["code"], codes::INCORRECT_REQUEST_TYPE);
    assert!(json["message"].as_str().unwrap().contains("text/plain"));
}

#[tokio::test]
async fn missing_file_part_is_rejected() {
    let response = test_router()
        .oneshot(upload_request("attachment", "text/plain", b"text"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["code"], codes::MISSING_FILE_PART);
}

#[tokio::test]
async fn invalid_utf8_is_rejected() {
    let response = test_router()
        .oneshot(upload_request("file", "text/plain", &[0xff, 0xfe, 0x00, 0x41]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["code"], codes::INCORRECT_ENCODING_OR_FILE);
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let big = vec![b'a'; UPLOAD_LIMIT + 1024];
    let response = test_router()
        .oneshot(upload_request("file", "text/plain", &big))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = response_json(response).await;
    assert_eq!(json["code"], codes::SIZE_LIMIT_EXCEEDED);
}

#[tokio::test]
async fn empty_file_is_a_valid_upload() {
    let response = test_router()
        .oneshot(upload_request("file", "text/plain", b""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["code"], codes::SUCCESS);
    let html = json["data"].as_str().unwrap();
    assert!(html.contains("<h1>Text:</h1>"));
    assert!(!html.contains("<div>"));
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = response_json(response).await;
    assert_eq!(json["code"], codes::NOT_FOUND);
}

#[tokio::test]
async fn health_check_is_open() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "ok");
}
