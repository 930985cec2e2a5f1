//! AI Gateway: the three model operations the app needs, behind a trait.
//!
//! `AppState` carries an `Arc<dyn AiGateway>`. Production uses `LlmClient`;
//! tests swap in a scripted fake without touching handlers or controllers.

use async_trait::async_trait;

use crate::deep_dive::models::DeepDiveResult;
use crate::deep_dive::prompts::{build_deep_dive_prompt, deep_dive_response_schema};
use crate::import::prompts::{build_file_prompt, build_url_prompt};
use crate::llm_client::{GenerateRequest, InlineData, LlmClient, LlmError, Part};

#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Expands one bullet into a STAR breakdown, metrics, questions and narrative.
    async fn decode_bullet(&self, bullet: &str) -> Result<DeepDiveResult, LlmError>;

    /// Transcribes a base64-encoded document to plain text. Empty string when
    /// the model produced nothing.
    async fn extract_text_from_file(
        &self,
        base64_data: &str,
        mime_type: &str,
    ) -> Result<String, LlmError>;

    /// Fetches and reformats the text behind `url`. The answer may be a
    /// refusal rather than content; callers decide.
    async fn extract_text_from_url(&self, url: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl AiGateway for LlmClient {
    async fn decode_bullet(&self, bullet: &str) -> Result<DeepDiveResult, LlmError> {
        let prompt = build_deep_dive_prompt(bullet);
        let request = GenerateRequest::new(vec![Part::Text { text: &prompt }])
            .with_json_schema(deep_dive_response_schema());
        self.call_json(&request).await
    }

    async fn extract_text_from_file(
        &self,
        base64_data: &str,
        mime_type: &str,
    ) -> Result<String, LlmError> {
        let prompt = build_file_prompt();
        let request = GenerateRequest::new(vec![
            Part::InlineData {
                inline_data: InlineData {
                    mime_type,
                    data: base64_data,
                },
            },
            Part::Text { text: &prompt },
        ]);
        self.call_text(&request).await
    }

    async fn extract_text_from_url(&self, url: &str) -> Result<String, LlmError> {
        let prompt = build_url_prompt(url);
        let request = GenerateRequest::new(vec![Part::Text { text: &prompt }]).with_search();
        self.call_text(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    /// Captured request bodies plus the canned reply the fake endpoint returns.
    #[derive(Clone)]
    struct FakeGemini {
        seen: Arc<Mutex<Vec<Value>>>,
        status: StatusCode,
        reply: Value,
    }

    async fn fake_generate(
        State(fake): State<FakeGemini>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        fake.seen.lock().unwrap().push(body);
        (fake.status, Json(fake.reply.clone()))
    }

    /// Spins up a local stand-in for the generateContent endpoint.
    async fn spawn_fake(status: StatusCode, reply: Value) -> (LlmClient, Arc<Mutex<Vec<Value>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let fake = FakeGemini {
            seen: seen.clone(),
            status,
            reply,
        };
        let app = Router::new()
            .route("/v1beta/models/:call", post(fake_generate))
            .with_state(fake);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        let client = LlmClient::new("test-key".into(), format!("http://{addr}/v1beta")).unwrap();
        (client, seen)
    }

    fn text_reply(text: &str) -> Value {
        json!({"candidates": [{"content": {"parts": [{"text": text}]}}]})
    }

    #[tokio::test]
    async fn test_decode_bullet_parses_structured_reply() {
        let payload = json!({
            "bullet": "Optimized queries",
            "star": {"situation": "s", "task": "t", "action": "a", "result": "r"},
            "metrics": [{"value": "30%", "label": "Faster APIs"}],
            "questions": ["q1", "q2", "q3"],
            "narrative": "I dug into the slow query log."
        });
        let (client, seen) = spawn_fake(StatusCode::OK, text_reply(&payload.to_string())).await;

        let result = client.decode_bullet("Optimized queries").await.unwrap();
        assert_eq!(result.metrics[0].value, "30%");
        assert_eq!(result.questions.len(), 3);

        let body = seen.lock().unwrap()[0].clone();
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Optimized queries"));
    }

    #[tokio::test]
    async fn test_decode_bullet_fails_on_non_json_reply() {
        let (client, _) = spawn_fake(StatusCode::OK, text_reply("Sure! Here's a story.")).await;
        let err = client.decode_bullet("x").await.unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[tokio::test]
    async fn test_api_error_message_is_extracted() {
        let (client, _) = spawn_fake(
            StatusCode::FORBIDDEN,
            json!({"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}}),
        )
        .await;
        let err = client.extract_text_from_url("https://x.dev").await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_file_extraction_sends_inline_data() {
        let (client, seen) = spawn_fake(StatusCode::OK, text_reply("JANE DOE\n- Shipped")).await;
        let text = client
            .extract_text_from_file("JVBERi0=", "application/pdf")
            .await
            .unwrap();
        assert_eq!(text, "JANE DOE\n- Shipped");

        let body = seen.lock().unwrap()[0].clone();
        let inline = &body["contents"][0]["parts"][0]["inlineData"];
        assert_eq!(inline["mimeType"], "application/pdf");
        assert_eq!(inline["data"], "JVBERi0=");
        assert!(body.get("tools").is_none());
    }

    #[tokio::test]
    async fn test_url_extraction_enables_search_and_tolerates_empty_reply() {
        let (client, seen) = spawn_fake(StatusCode::OK, json!({"candidates": []})).await;
        let text = client
            .extract_text_from_url("https://example.com/cv")
            .await
            .unwrap();
        assert_eq!(text, "");

        let body = seen.lock().unwrap()[0].clone();
        assert_eq!(body["tools"], json!([{"googleSearch": {}}]));
    }
}
