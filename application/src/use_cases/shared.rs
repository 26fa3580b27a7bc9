//! Shared utilities for use cases.
//!
//! Contains [`GenerationClient`], the single path through which every use
//! case talks to the [`TextGenerator`] port.

use crate::config::GenerationParams;
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::text_generator::{GenerationError, TextGenerator};
use lateral_domain::GenerationRole;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Throttled, timed and transcribed access to the text generator.
///
/// Every call:
/// 1. samples at the temperature configured for its [`GenerationRole`],
/// 2. is bounded by `request_timeout` (elapsed → [`GenerationError::Timeout`]),
/// 3. treats a blank response as a backend error,
/// 4. is written to the transcript logger,
/// 5. is followed by `call_delay`, whether it succeeded or not.
pub struct GenerationClient<G: TextGenerator + 'static> {
    generator: Arc<G>,
    params: GenerationParams,
    logger: Arc<dyn GenerationLogger>,
}

impl<G: TextGenerator + 'static> Clone for GenerationClient<G> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            params: self.params.clone(),
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<G: TextGenerator + 'static> GenerationClient<G> {
    pub fn new(generator: Arc<G>, params: GenerationParams) -> Self {
        Self {
            generator,
            params,
            logger: Arc::new(NoGenerationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Issue one generation call.
    ///
    /// `purpose` names the pipeline step (e.g. `"why"`, `"metaphor"`) for
    /// logs and the transcript.
    pub async fn generate(
        &self,
        purpose: &'static str,
        role: GenerationRole,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let temperature = self.params.temperature(role);
        let timeout = self.params.request_timeout;
        let started = Instant::now();

        debug!(purpose, %role, temperature, "Issuing generation call");

        let outcome = match tokio::time::timeout(
            timeout,
            self.generator.generate(prompt, temperature, timeout),
        )
        .await
        {
            Ok(Ok(text)) if text.trim().is_empty() => {
                Err(GenerationError::backend("empty response"))
            }
            Ok(result) => result,
            Err(_) => Err(GenerationError::Timeout),
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            Ok(text) => {
                debug!(purpose, elapsed_ms, bytes = text.len(), "Generation succeeded");
                self.logger.log(GenerationEvent::new(
                    "generation",
                    serde_json::json!({
                        "purpose": purpose,
                        "role": role,
                        "temperature": temperature,
                        "prompt": prompt,
                        "response": text,
                        "elapsed_ms": elapsed_ms,
                    }),
                ));
            }
            Err(e) => {
                warn!(purpose, elapsed_ms, "Generation failed: {}", e);
                self.logger.log(GenerationEvent::new(
                    "generation_failed",
                    serde_json::json!({
                        "purpose": purpose,
                        "role": role,
                        "temperature": temperature,
                        "prompt": prompt,
                        "error": e.to_string(),
                        "elapsed_ms": elapsed_ms,
                    }),
                ));
            }
        }

        if !self.params.call_delay.is_zero() {
            tokio::time::sleep(self.params.call_delay).await;
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::ScriptedGenerator;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(String, serde_json::Value)>>,
    }

    impl GenerationLogger for RecordingLogger {
        fn log(&self, event: GenerationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type.to_string(), event.payload));
        }
    }

    #[tokio::test]
    async fn test_generate_uses_role_temperature() {
        let generator = Arc::new(ScriptedGenerator::new());
        let client = GenerationClient::new(Arc::clone(&generator), GenerationParams::unthrottled());

        client
            .generate("domains", GenerationRole::Domain, "Generate 3 knowledge domains")
            .await
            .unwrap();

        assert_eq!(generator.temperatures(), vec![0.9]);
    }

    #[tokio::test]
    async fn test_blank_response_is_backend_error() {
        let generator = Arc::new(ScriptedGenerator::new().on("anything", "   \n  "));
        let client = GenerationClient::new(generator, GenerationParams::unthrottled());

        let err = client
            .generate("why", GenerationRole::Analyst, "anything")
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::backend("empty response"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_call_times_out() {
        let generator = Arc::new(ScriptedGenerator::new().stall_on("slow", Duration::from_secs(120)));
        let params = GenerationParams::unthrottled().with_request_timeout(Duration::from_secs(5));
        let client = GenerationClient::new(generator, params);

        let err = client
            .generate("why", GenerationRole::Analyst, "slow prompt")
            .await
            .unwrap_err();
        assert!(err.is_timeout());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_applies_after_failure_too() {
        let generator = Arc::new(ScriptedGenerator::new().fail_on("bad"));
        let params = GenerationParams::default().with_call_delay(Duration::from_secs(2));
        let client = GenerationClient::new(generator, params);

        let start = tokio::time::Instant::now();
        let _ = client.generate("why", GenerationRole::Analyst, "bad").await;
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_transcript_records_success_and_failure() {
        let generator = Arc::new(ScriptedGenerator::new().fail_on("broken"));
        let logger = Arc::new(RecordingLogger::default());
        let client = GenerationClient::new(generator, GenerationParams::unthrottled())
            .with_logger(Arc::clone(&logger) as Arc<dyn GenerationLogger>);

        let _ = client
            .generate("metaphor", GenerationRole::Challenger, "metaphor or conceptual model")
            .await;
        let _ = client
            .generate("solution", GenerationRole::Challenger, "broken prompt")
            .await;

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "generation");
        assert_eq!(events[0].1["purpose"], "metaphor");
        assert_eq!(events[0].1["role"], "challenger");
        assert_eq!(events[1].0, "generation_failed");
        assert!(events[1].1["error"].as_str().unwrap().contains("Backend error"));
    }
}
