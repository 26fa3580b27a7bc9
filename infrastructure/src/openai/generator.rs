//! OpenAI-compatible TextGenerator implementation

use super::error::OpenAiError;
use super::protocol::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use lateral_application::{GenerationError, TextGenerator};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, trace};

/// Connection settings for an OpenAI-compatible endpoint
#[derive(Clone)]
pub struct OpenAiConfig {
    /// Base URL including the API version (e.g. `https://api.openai.com/v1`)
    pub base_url: String,
    pub model: String,
    api_key: String,
    /// Cap on generated tokens; omitted from the request when `None`
    pub max_tokens: Option<u32>,
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: api_key.into(),
            max_tokens: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Text generator backed by the chat completions API
///
/// Each prompt is sent as a single user message. The per-call timeout is
/// applied to the whole request.
pub struct OpenAiTextGenerator {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiTextGenerator {
    pub fn new(config: OpenAiConfig) -> Result<Self, OpenAiError> {
        let client = Client::builder().build()?;
        Ok(Self { config, client })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send one completion request and return the first choice's text
    pub async fn complete(
        &self,
        prompt: &str,
        temperature: f32,
        timeout: Duration,
    ) -> Result<String, OpenAiError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(
            model = %self.config.model,
            temperature,
            prompt_bytes = prompt.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .timeout(timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OpenAiError::Timeout
                } else {
                    OpenAiError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::status(status.as_u16(), &body));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                OpenAiError::Timeout
            } else {
                OpenAiError::Http(e)
            }
        })?;
        trace!("Chat completion body: {}", body);

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| OpenAiError::MalformedResponse(e.to_string()))?;

        parsed
            .into_first_content()
            .ok_or_else(|| OpenAiError::MalformedResponse("no message content".to_string()))
    }
}

#[async_trait]
impl TextGenerator for OpenAiTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        temperature: f32,
        timeout: Duration,
    ) -> Result<String, GenerationError> {
        Ok(self.complete(prompt, temperature, timeout).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve a single HTTP response and hand back the raw request text.
    ///
    /// With `stall`, the connection is held open without ever answering.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
        stall: bool,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/v1", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;

            if stall {
                tokio::time::sleep(Duration::from_secs(10)).await;
                return request;
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (base_url, handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buffer);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buffer.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn generator(base_url: &str) -> OpenAiTextGenerator {
        OpenAiTextGenerator::new(
            OpenAiConfig::new("test-key")
                .with_base_url(base_url)
                .with_model("test-model")
                .with_max_tokens(Some(256)),
        )
        .unwrap()
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug = format!("{:?}", OpenAiConfig::new("sk-secret"));
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let config = OpenAiConfig::new("k").with_base_url("http://localhost:8080/v1/");
        assert_eq!(
            config.completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_successful_completion() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"Biology\nJazz"}}]}"#,
            false,
        )
        .await;

        let text = generator(&base_url)
            .generate("Name two domains", 0.9, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(text, "Biology\nJazz");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1/chat/completions"));
        assert!(request.to_lowercase().contains("authorization: bearer test-key"));

        let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["model"], "test-model");
        assert_eq!(json["max_tokens"], 256);
        assert_eq!(json["messages"][0]["content"], "Name two domains");
        assert!((json["temperature"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_error_status_becomes_backend_error() {
        let (base_url, _server) = serve_once(
            "429 Too Many Requests",
            r#"{"error":{"message":"Rate limit reached"}}"#,
            false,
        )
        .await;

        let err = generator(&base_url)
            .generate("prompt", 0.3, Duration::from_secs(5))
            .await
            .unwrap_err();

        match err {
            GenerationError::Backend(message) => {
                assert!(message.starts_with("HTTP 429:"));
                assert!(message.contains("Rate limit reached"));
            }
            other => panic!("expected backend error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_stalled_server_times_out() {
        let (base_url, _server) = serve_once("200 OK", "{}", true).await;

        let err = generator(&base_url)
            .generate("prompt", 0.3, Duration::from_millis(200))
            .await
            .unwrap_err();

        assert_eq!(err, GenerationError::Timeout);
    }

    #[tokio::test]
    async fn test_missing_content_is_malformed() {
        let (base_url, _server) = serve_once("200 OK", r#"{"choices":[]}"#, false).await;

        let err = generator(&base_url)
            .complete("prompt", 0.3, Duration::from_secs(5))
            .await
            .unwrap_err();

        assert!(matches!(err, OpenAiError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let (base_url, _server) = serve_once("200 OK", "not json", false).await;

        let err = generator(&base_url)
            .complete("prompt", 0.3, Duration::from_secs(5))
            .await
            .unwrap_err();

        assert!(matches!(err, OpenAiError::MalformedResponse(_)));
    }
}
