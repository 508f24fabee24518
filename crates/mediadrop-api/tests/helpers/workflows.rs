//! Workflow helpers for integration tests (upload then fetch, etc.).

use axum_test::TestServer;
use serde_json::Value;

use super::fixtures;

/// Upload `data` under `filename` to `/upload/{slug}` and return the JSON body.
pub async fn upload(client: &TestServer, slug: &str, filename: &str, data: Vec<u8>) -> Value {
    let mime_type = mime_type_for(filename);
    let response = client
        .post(&format!("/upload/{}", slug))
        .multipart(fixtures::file_form(filename, mime_type, data))
        .await;

    assert_eq!(response.status_code(), 200, "upload failed: {}", response.text());
    response.json()
}

/// Stored filename from an upload response.
pub fn stored_filename(upload_response: &Value) -> String {
    upload_response
        .get("filename")
        .and_then(|v| v.as_str())
        .expect("Expected 'filename' in upload response")
        .to_string()
}

/// Retrieval URL from an upload response.
pub fn stored_url(upload_response: &Value) -> String {
    upload_response
        .get("url")
        .and_then(|v| v.as_str())
        .expect("Expected 'url' in upload response")
        .to_string()
}

/// Names returned by `GET /files/{slug}`.
pub async fn list(client: &TestServer, slug: &str) -> Vec<String> {
    let response = client.get(&format!("/files/{}", slug)).await;
    assert_eq!(response.status_code(), 200);
    response.json()
}

fn mime_type_for(filename: &str) -> &'static str {
    if filename.ends_with(".pdf") {
        "application/pdf"
    } else if filename.ends_with(".mp4") {
        "video/mp4"
    } else {
        "application/octet-stream"
    }
}
