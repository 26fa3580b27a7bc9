//! Port for the generation transcript.
//!
//! Defines the [`GenerationLogger`] trait for recording every prompt and
//! response exchanged with the text backend.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the full transcript
//! in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured transcript event.
pub struct GenerationEvent {
    /// Event type identifier (e.g., "generation", "generation_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl GenerationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging generation events to a transcript.
///
/// `log` is synchronous and infallible; implementations swallow their own
/// I/O errors so a broken transcript never stops an analysis.
pub trait GenerationLogger: Send + Sync {
    fn log(&self, event: GenerationEvent);
}

/// No-op implementation for tests and when no transcript is configured.
pub struct NoGenerationLogger;

impl GenerationLogger for NoGenerationLogger {
    fn log(&self, _event: GenerationEvent) {}
}
