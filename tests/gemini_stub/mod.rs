use std::io::Read as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use serde_json::Value;

#[derive(Debug, Clone)]
pub struct GeminiStubConfig {
    pub expected_api_key: Option<String>,
    pub behavior: ResponseBehavior,
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum ResponseBehavior {
    /// Well-formed payload with both schema fields.
    Insight { summary: String, key_verse: String },
    /// Candidate text is present but blank.
    EmptyText,
    /// Parseable JSON payload missing the `keyVerse` field.
    MissingKeyVerse,
    /// HTTP 500 with a Gemini-style error envelope.
    ServerError,
}

pub struct GeminiStub {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl GeminiStub {
    pub fn spawn(config: GeminiStubConfig) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start gemini stub server");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}/v1beta");

        let hits = Arc::new(AtomicUsize::new(0));
        let server_hits = Arc::clone(&hits);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let mut request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                server_hits.fetch_add(1, Ordering::SeqCst);

                let path = request.url().to_string();
                if request.method() != &tiny_http::Method::Post
                    || !path.starts_with("/v1beta/models/")
                    || !path.ends_with(":generateContent")
                {
                    let _ = request.respond(
                        tiny_http::Response::from_string("not found").with_status_code(404),
                    );
                    continue;
                }

                if let Some(expected) = config.expected_api_key.as_deref() {
                    let sent = request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv("x-goog-api-key"))
                        .map(|h| h.value.as_str().to_owned())
                        .unwrap_or_default();
                    if sent != expected {
                        let _ = request.respond(
                            tiny_http::Response::from_string(
                                r#"{"error":{"code":401,"message":"API key not valid"}}"#,
                            )
                            .with_status_code(401),
                        );
                        continue;
                    }
                }

                let mut body = String::new();
                if request.as_reader().read_to_string(&mut body).is_err() {
                    let _ = request.respond(
                        tiny_http::Response::from_string("invalid request body")
                            .with_status_code(400),
                    );
                    continue;
                }

                let parsed: Value = match serde_json::from_str(&body) {
                    Ok(value) => value,
                    Err(_) => {
                        let _ = request.respond(
                            tiny_http::Response::from_string("invalid json").with_status_code(400),
                        );
                        continue;
                    }
                };

                // The adapter must send the schema-constrained request shape.
                let prompt = parsed
                    .pointer("/contents/0/parts/0/text")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                let required = parsed
                    .pointer("/generationConfig/responseSchema/required")
                    .cloned()
                    .unwrap_or(Value::Null);
                if prompt.is_empty() || required != serde_json::json!(["summary", "keyVerse"]) {
                    let _ = request.respond(
                        tiny_http::Response::from_string("unexpected request shape")
                            .with_status_code(400),
                    );
                    continue;
                }

                let (status, response_body) = match &config.behavior {
                    ResponseBehavior::Insight { summary, key_verse } => {
                        let payload = serde_json::json!({
                            "summary": summary,
                            "keyVerse": key_verse,
                        })
                        .to_string();
                        (200, candidates_envelope(&payload))
                    }
                    ResponseBehavior::EmptyText => (200, candidates_envelope("  ")),
                    ResponseBehavior::MissingKeyVerse => {
                        let payload =
                            serde_json::json!({ "summary": "只有摘要" }).to_string();
                        (200, candidates_envelope(&payload))
                    }
                    ResponseBehavior::ServerError => (
                        500,
                        r#"{"error":{"code":500,"message":"internal error"}}"#.to_owned(),
                    ),
                };

                let mut response =
                    tiny_http::Response::from_string(response_body).with_status_code(status);
                let header =
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .expect("build header");
                response = response.with_header(header);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            hits,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for GeminiStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn candidates_envelope(text: &str) -> String {
    serde_json::json!({
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [ { "text": text } ]
                },
                "finishReason": "STOP"
            }
        ],
        "modelVersion": "stub-model"
    })
    .to_string()
}
