pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::deep_dive::handlers as deep_dive;
use crate::import::file::MAX_UPLOAD_BYTES;
use crate::import::handlers as import;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume content
        .route(
            "/api/v1/resume",
            get(resume::handle_get_resume).put(resume::handle_set_content),
        )
        .route("/api/v1/resume/example", post(resume::handle_load_example))
        // Deep dive
        .route("/api/v1/deep-dive", get(deep_dive::handle_get_deep_dive))
        .route(
            "/api/v1/deep-dive/select",
            post(deep_dive::handle_select_bullet),
        )
        // Import
        .route("/api/v1/import", get(import::handle_get_import))
        .route(
            "/api/v1/import/file",
            post(import::handle_upload_file).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/v1/import/url", post(import::handle_import_url))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::FakeGateway;
    use crate::session::Session;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app_with(fake: FakeGateway) -> (Router, Arc<Session>, Arc<FakeGateway>) {
        let fake = Arc::new(fake);
        let session = Arc::new(Session::new(fake.clone()));
        let router = build_router(AppState {
            session: session.clone(),
        });
        (router, session, fake)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    /// Polls the deep-dive endpoint until it leaves the loading panel.
    async fn wait_for_panel(app: &Router, uri: &str) -> Value {
        for _ in 0..100 {
            let (_, body) = send(app, get(uri)).await;
            if body["panel"] != "loading" {
                return body;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("deep dive never finished");
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _, _) = app_with(FakeGateway::default());
        let (status, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_get_resume_classifies_sample() {
        let (app, _, _) = app_with(FakeGateway::default());
        let (status, body) = send(&app, get("/api/v1/resume")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bullet_count"], 7);
        assert_eq!(body["is_empty"], false);
        assert_eq!(body["lines"][0]["kind"], "header");
        assert_eq!(body["lines"][0]["text"], "JONATHAN DOE");
    }

    #[tokio::test]
    async fn test_put_resume_replaces_content() {
        let (app, _, _) = app_with(FakeGateway::default());
        let (status, body) = send(
            &app,
            json_request("PUT", "/api/v1/resume", json!({"content": "A\n- one\n* two\nB"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"], "A\n- one\n* two\nB");
        assert_eq!(body["bullet_count"], 2);
        assert_eq!(body["lines"][2]["kind"], "bullet");
        assert_eq!(body["lines"][2]["text"], "two");

        let (_, body) = send(
            &app,
            json_request("POST", "/api/v1/resume/example", json!({})),
        )
        .await;
        assert_eq!(body["bullet_count"], 7);
    }

    #[tokio::test]
    async fn test_select_bullet_then_read_tabs() {
        let (app, _, fake) = app_with(FakeGateway::default());

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/deep-dive/select",
                json!({"bullet": "Led a team"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["selected_bullet"], "Led a team");

        let body = wait_for_panel(&app, "/api/v1/deep-dive?tab=metrics").await;
        assert_eq!(body["panel"], "ready");
        assert_eq!(body["bullet"], "Led a team");
        assert_eq!(body["view"]["tab"], "metrics");
        assert_eq!(body["view"]["questions"].as_array().unwrap().len(), 3);

        let (_, star) = send(&app, get("/api/v1/deep-dive")).await;
        assert_eq!(star["view"]["tab"], "star");

        // Re-clicking the same bullet is a no-op.
        let (status, _) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/deep-dive/select",
                json!({"bullet": "Led a team"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fake.decode_calls.load(Ordering::SeqCst), 1);

        let (_, resume) = send(&app, get("/api/v1/resume")).await;
        assert_eq!(resume["selected_bullet"], "Led a team");
    }

    #[tokio::test]
    async fn test_failed_deep_dive_surfaces_generic_message() {
        let (app, _, _) = app_with(FakeGateway::failing_decode());
        send(
            &app,
            json_request("POST", "/api/v1/deep-dive/select", json!({"bullet": "x"})),
        )
        .await;
        let body = wait_for_panel(&app, "/api/v1/deep-dive").await;
        assert_eq!(body["panel"], "error");
        assert_eq!(body["message"], "Failed to generate deep dive.");
        assert!(!body.to_string().contains("secret-internal-detail"));
    }

    #[tokio::test]
    async fn test_blank_bullet_is_rejected() {
        let (app, _, fake) = app_with(FakeGateway::default());
        let (status, body) = send(
            &app,
            json_request("POST", "/api/v1/deep-dive/select", json!({"bullet": "  "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(fake.decode_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_url_import_refusal_returns_guidance() {
        let (app, session, _) = app_with(FakeGateway::with_text("I cannot access that link"));
        let before = session.snapshot().await.content;

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/import/url",
                json!({"url": "https://example.com/private"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "URL_IMPORT_FAILED");
        assert_eq!(session.snapshot().await.content, before);

        let (_, import) = send(&app, get("/api/v1/import")).await;
        assert_eq!(import["status"], "error");
    }

    #[tokio::test]
    async fn test_multipart_text_upload_replaces_content() {
        let (app, session, fake) = app_with(FakeGateway::default());
        let boundary = "storyteller-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"resume.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             SUMMARY\n- Shipped it\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/import/file")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["source"]["file_name"], "resume.txt");
        assert_eq!(body["bullet_count"], 1);
        assert_eq!(session.snapshot().await.content, "SUMMARY\n- Shipped it");
        assert_eq!(fake.file_calls.load(Ordering::SeqCst), 0);
    }

    fn multipart_upload(file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
        let boundary = "storyteller-boundary";
        let mut body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        Request::builder()
            .method("POST")
            .uri("/api/v1/import/file")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_image_over_default_body_limit_reaches_gateway() {
        let (app, session, fake) =
            app_with(FakeGateway::with_text("JANE DOE\nEXPERIENCE\n- Scanned bullet"));
        let scan = vec![0x89u8; 3 * 1024 * 1024];

        let (status, body) = send(&app, multipart_upload("scan.png", "image/png", &scan)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(fake.file_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            session.snapshot().await.content,
            "JANE DOE\nEXPERIENCE\n- Scanned bullet"
        );
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_payload_too_large() {
        let (app, session, fake) = app_with(FakeGateway::with_text("unused"));
        let before = session.snapshot().await.content;
        let huge = vec![0u8; MAX_UPLOAD_BYTES + 1024];

        let (status, body) = send(&app, multipart_upload("huge.pdf", "application/pdf", &huge)).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "FILE_TOO_LARGE");
        assert!(body["error"]["message"].as_str().unwrap().contains("20 MB"));
        assert_eq!(fake.file_calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.snapshot().await.content, before);
    }

    #[tokio::test]
    async fn test_multipart_without_file_field_is_rejected() {
        let (app, _, _) = app_with(FakeGateway::default());
        let boundary = "b";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"other\"\r\n\r\n\
             value\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/import/file")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
