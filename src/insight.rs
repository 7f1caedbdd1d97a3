use anyhow::Context as _;
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

/// AI-generated thematic summary and representative verse for one book.
/// Created by one successful service call and held in memory by the
/// requesting card only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Insight {
    pub summary: String,
    #[serde(rename = "keyVerse")]
    pub key_verse: String,
}

#[derive(Debug, Clone)]
pub struct InsightConfig {
    /// Credential for the generation service. `None` is a recognized,
    /// handled condition: the adapter logs and returns no insight without
    /// attempting a network call.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

impl InsightConfig {
    /// Read the credential from `GEMINI_API_KEY`. Only the CLI boundary
    /// calls this; the adapter itself never touches the process environment.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
        }
    }
}

pub fn generate_endpoint(base_url: &str, model: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    format!("{base_url}/models/{model}:generateContent")
}

/// Anything a card can ask for an insight. The production implementation is
/// [`InsightClient`]; tests substitute a stub to observe call counts.
#[async_trait]
pub trait InsightSource: Send + Sync {
    /// Fetch an insight for `book_name`, or `None` on any failure. Errors
    /// never propagate past this boundary.
    async fn fetch_insight(&self, book_name: &str) -> Option<Insight>;
}

pub struct InsightClient {
    client: reqwest::Client,
    config: InsightConfig,
}

impl InsightClient {
    pub fn new(config: InsightConfig) -> anyhow::Result<Self> {
        Url::parse(&config.base_url)
            .with_context(|| format!("parse insight base url: {}", config.base_url))?;
        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    async fn request(&self, api_key: &str, book_name: &str) -> anyhow::Result<Insight> {
        let endpoint = generate_endpoint(&self.config.base_url, &self.config.model);
        let body = request_body(book_name);

        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("POST {endpoint}"))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .context("read generation response body")?;
        if !status.is_success() {
            let message = parse_error_message(&raw).unwrap_or_else(|| raw.clone());
            anyhow::bail!("generation API error ({status}): {message}");
        }

        let value: serde_json::Value =
            serde_json::from_str(&raw).context("parse generation response")?;
        let text = extract_candidate_text(&value).context("extract candidate text")?;
        parse_insight(&text)
    }
}

#[async_trait]
impl InsightSource for InsightClient {
    async fn fetch_insight(&self, book_name: &str) -> Option<Insight> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            tracing::error!(book = book_name, "insight API key is not configured");
            return None;
        };

        match self.request(api_key, book_name).await {
            Ok(insight) => Some(insight),
            Err(err) => {
                tracing::error!(
                    book = book_name,
                    error = format!("{err:#}"),
                    "fetch book insight failed"
                );
                None
            }
        }
    }
}

fn request_body(book_name: &str) -> serde_json::Value {
    let prompt = format!(
        "Provide a short, inspiring summary (max 40 words) and one representative \
key verse for the Bible book: {book_name}.\n\
IMPORTANT: The output MUST be in Traditional Chinese (繁體中文). The key verse \
should be the full text of the verse in Chinese Union Version (CUV) if possible."
    );

    serde_json::json!({
        "contents": [ { "parts": [ { "text": prompt } ] } ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "summary": {
                        "type": "STRING",
                        "description": "A brief, 1-2 sentence summary of the book's theme in Traditional Chinese.",
                    },
                    "keyVerse": {
                        "type": "STRING",
                        "description": "A famous or representative verse from the book in Traditional Chinese.",
                    },
                },
                "required": ["summary", "keyVerse"],
            },
        },
    })
}

fn parse_error_message(raw_json: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw_json).ok()?;
    let message = value.get("error")?.get("message")?.as_str()?.to_owned();
    Some(message)
}

fn extract_candidate_text(value: &serde_json::Value) -> anyhow::Result<String> {
    let parts = value
        .pointer("/candidates/0/content/parts")
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow::anyhow!("missing candidate content parts in response"))?;

    let mut text = String::new();
    for part in parts {
        if let Some(part_text) = part.get("text").and_then(|v| v.as_str()) {
            text.push_str(part_text);
        }
    }

    if text.trim().is_empty() {
        anyhow::bail!("generation output text is empty");
    }
    Ok(text)
}

/// Parse the schema-constrained payload. A payload that parses but is
/// missing either field, or carries an empty field, counts as a failure
/// rather than surfacing partial data.
fn parse_insight(text: &str) -> anyhow::Result<Insight> {
    let insight: Insight = serde_json::from_str(text).context("parse insight payload")?;
    if insight.summary.trim().is_empty() {
        anyhow::bail!("insight payload has an empty summary");
    }
    if insight.key_verse.trim().is_empty() {
        anyhow::bail!("insight payload has an empty keyVerse");
    }
    Ok(insight)
}
