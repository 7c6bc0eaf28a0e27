//! Google Gemini REST client.

use crate::client::{GenerationRequest, Generator, TextStream, Turn};
use crate::error::{Result, SibylError};
use async_stream::try_stream;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::AsyncBufReadExt;
use tokio_util::io::StreamReader;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API client
pub struct GeminiClient {
    api_key: String,
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, model, method)
    }

    async fn post(&self, url: &str, request: &GenerationRequest) -> Result<reqwest::Response> {
        let body = GeminiRequest::from(request);
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = match serde_json::from_str::<GeminiError>(&error_text) {
            Ok(error) => error.error.message,
            Err(_) => error_text,
        };
        Err(SibylError::Api { status, message })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
    /// Set on thought-summary parts, which are not part of the answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thought: Option<bool>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<GeminiThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetails {
    message: String,
}

fn content_from_turn(turn: &Turn) -> GeminiContent {
    GeminiContent {
        role: Some(turn.role.as_str().to_string()),
        parts: vec![GeminiPart {
            text: Some(turn.text.clone()),
            thought: None,
        }],
    }
}

impl From<&GenerationRequest> for GeminiRequest {
    fn from(request: &GenerationRequest) -> Self {
        let system_instruction = request.system_instruction.as_ref().map(|text| GeminiContent {
            role: None,
            parts: vec![GeminiPart {
                text: Some(text.clone()),
                thought: None,
            }],
        });

        let generation_config = GeminiGenerationConfig {
            temperature: request.temperature,
            response_mime_type: request
                .response_schema
                .as_ref()
                .map(|_| "application/json"),
            response_schema: request.response_schema.clone(),
            thinking_config: request
                .thinking_budget
                .map(|thinking_budget| GeminiThinkingConfig { thinking_budget }),
        };

        GeminiRequest {
            contents: request.contents.iter().map(content_from_turn).collect(),
            system_instruction,
            generation_config,
        }
    }
}

impl GeminiResponse {
    /// Concatenated answer text of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter(|p| p.thought != Some(true))
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Text carried by one SSE line, if it is a `data:` line.
pub fn parse_sse_line(line: &str) -> Option<Result<String>> {
    let data = line.strip_prefix("data:")?.trim();
    if data.is_empty() {
        return None;
    }
    Some(
        serde_json::from_str::<GeminiResponse>(data)
            .map(|chunk| chunk.text())
            .map_err(SibylError::from),
    )
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String> {
        let url = self.url(&request.model, "generateContent");
        log::debug!("Gemini generateContent with {}", request.model);

        let response: GeminiResponse = self
            .post(&url, &request)
            .await?
            .json()
            .await
            .map_err(|e| SibylError::Parsing(format!("Failed to parse Gemini response: {}", e.without_url())))?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(SibylError::EmptyResponse {
                model: request.model,
            });
        }
        Ok(text)
    }

    async fn stream(&self, request: GenerationRequest) -> Result<TextStream> {
        let url = self.url(&request.model, "streamGenerateContent?alt=sse");
        log::debug!("Gemini streamGenerateContent with {}", request.model);

        let response = self.post(&url, &request).await?;
        let bytes = response
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Interrupted, e.without_url().to_string()));
        let mut lines = StreamReader::new(bytes).lines();

        let stream = try_stream! {
            while let Some(line) = lines
                .next_line()
                .await
                .map_err(|e| SibylError::Stream(e.to_string()))?
            {
                if let Some(chunk) = parse_sse_line(&line) {
                    let text = chunk?;
                    if !text.is_empty() {
                        yield text;
                    }
                }
            }
        };

        Ok(Box::pin(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatRole;
    use serde_json::json;

    #[test]
    fn request_carries_schema_and_thinking_budget() {
        let request = GenerationRequest::new("gemini-3-pro-preview", "hi")
            .with_system_instruction("persona")
            .with_schema(json!({"type": "OBJECT"}))
            .with_thinking_budget(4096);
        let body = serde_json::to_value(GeminiRequest::from(&request)).unwrap();

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "persona");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hi");
        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "OBJECT");
        assert_eq!(config["thinkingConfig"]["thinkingBudget"], 4096);
        assert!(config.get("temperature").is_none());
    }

    #[test]
    fn plain_request_omits_optional_config() {
        let mut request = GenerationRequest::new("gemini-3-flash-preview", "q").with_temperature(0.85);
        request.contents.push(Turn {
            role: ChatRole::Model,
            text: "a".into(),
        });
        let body = serde_json::to_value(GeminiRequest::from(&request)).unwrap();
        assert!(body.get("systemInstruction").is_none());
        assert!(body["generationConfig"].get("responseSchema").is_none());
        assert_eq!(body["contents"][1]["role"], "model");
    }

    #[test]
    fn response_text_skips_thoughts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"role": "model", "parts": [
                {"text": "thinking...", "thought": true},
                {"text": "你好"},
                {"text": "。"}
            ]}}]
        }))
        .unwrap();
        assert_eq!(response.text(), "你好。");
    }

    #[test]
    fn sse_lines() {
        let line = r#"data: {"candidates":[{"content":{"parts":[{"text":"星"}]}}]}"#;
        assert_eq!(parse_sse_line(line).unwrap().unwrap(), "星");
        assert!(parse_sse_line("").is_none());
        assert!(parse_sse_line("event: message").is_none());
        assert!(parse_sse_line("data: not json").unwrap().is_err());
    }

    #[test]
    fn url_never_carries_the_key() {
        let client = GeminiClient::with_base_url("k".into(), "http://localhost/v1/".into());
        assert_eq!(
            client.url("m", "streamGenerateContent?alt=sse"),
            "http://localhost/v1/models/m:streamGenerateContent?alt=sse"
        );
        assert_eq!(client.url("m", "generateContent"), "http://localhost/v1/models/m:generateContent");
    }

    #[tokio::test]
    async fn connection_errors_do_not_expose_the_key() {
        let client = GeminiClient::with_base_url("SECRET123".into(), "http://127.0.0.1:1/v1beta".into());
        let err = client
            .generate(GenerationRequest::new("m", "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, SibylError::Request(_)));
        let shown = format!("{err} {err:?}");
        assert!(!shown.contains("SECRET123"), "{shown}");
        assert!(!shown.contains("127.0.0.1"), "{shown}");
    }
}
