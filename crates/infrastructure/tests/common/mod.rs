//! Shared helpers: an in-process stand-in for the processing service.
#![allow(dead_code, clippy::unwrap_used)]

use axum::extract::Multipart;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use url::Url;

/// Serves `router` on an ephemeral loopback port and returns its base URL.
pub async fn spawn_service(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}")).unwrap()
}

/// Returns a loopback URL nothing is listening on.
pub async fn closed_port_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}

/// A healthy service that echoes what it receives.
pub fn echo_service() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async { Json(json!({"status": "ok", "version": "1.2.0"})) }),
        )
        .route("/enhance-image", post(echo_upload))
        .route("/generate-note", post(echo_note))
}

/// A service whose every endpoint answers with `status` and `body`.
pub fn failing_service(status: StatusCode, body: &'static str) -> Router {
    let respond = move || async move {
        (status, [(header::CONTENT_TYPE, "application/json")], body)
    };
    Router::new()
        .route("/health", get(respond))
        .route("/enhance-image", post(respond))
        .route("/generate-note", post(respond))
}

async fn echo_upload(mut multipart: Multipart) -> impl IntoResponse {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.unwrap();
        fields.push(json!({
            "name": name,
            "file_name": file_name,
            "content_type": content_type,
            "size": bytes.len(),
        }));
    }
    Json(json!({"fields": fields, "enhanced": true}))
}

async fn echo_note(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    Json(json!({
        "received": body,
        "content_type": content_type,
        "note": "Subjective: polyuria. Assessment: type 2 diabetes.",
        "icd10_codes": [{
            "code": "E11.9",
            "description": "Type 2 diabetes mellitus without complications",
        }],
    }))
}
