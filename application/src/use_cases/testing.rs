//! Scripted text generator for use case tests.

use crate::ports::text_generator::{GenerationError, TextGenerator};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

enum Reply {
    Text(String),
    Fail,
    Stall(Duration),
}

/// Answers prompts from a rule list, falling back to canned well-formed
/// replies keyed on the prompt wording. Records every prompt it receives.
pub(crate) struct ScriptedGenerator {
    rules: Vec<(String, Reply)>,
    calls: Mutex<Vec<(String, f32)>>,
    counter: AtomicUsize,
}

impl ScriptedGenerator {
    pub(crate) fn new() -> Self {
        Self {
            rules: Vec::new(),
            calls: Mutex::new(Vec::new()),
            counter: AtomicUsize::new(0),
        }
    }

    /// Reply with `text` to prompts containing `needle`
    pub(crate) fn on(mut self, needle: &str, text: &str) -> Self {
        self.rules
            .push((needle.to_string(), Reply::Text(text.to_string())));
        self
    }

    /// Fail prompts containing `needle` with a backend error
    pub(crate) fn fail_on(mut self, needle: &str) -> Self {
        self.rules.push((needle.to_string(), Reply::Fail));
        self
    }

    /// Sleep for `duration` before answering prompts containing `needle`
    pub(crate) fn stall_on(mut self, needle: &str, duration: Duration) -> Self {
        self.rules.push((needle.to_string(), Reply::Stall(duration)));
        self
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(p, _)| p.clone())
            .collect()
    }

    pub(crate) fn temperatures(&self) -> Vec<f32> {
        self.calls.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }

    pub(crate) fn count_containing(&self, needle: &str) -> usize {
        self.prompts().iter().filter(|p| p.contains(needle)).count()
    }

    fn canned_reply(&self, prompt: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        if prompt.contains("knowledge domains") {
            "Biology\nGame Theory\nMycology\nJazz\nOrigami".to_string()
        } else if prompt.contains("potential root cause(s)") {
            "Cause one\nCause two\nCause three\nCause four\nCause five".to_string()
        } else if prompt.contains("deeper underlying causes") {
            format!("Deeper cause {}a\nDeeper cause {}b\nDeeper cause {}c", n, n, n)
        } else if prompt.contains("metaphor or conceptual model") {
            format!("METAPHOR: Model {}\nDYNAMICS: Things interact.", n)
        } else if prompt.contains("create an innovative solution") {
            format!(
                "SOLUTION TITLE: Idea {}\nMETAPHORICAL INSIGHT: Insight.\nCREATIVE SOLUTION: Do it.\nIMPLEMENTATION: Fund it.",
                n
            )
        } else if prompt.contains("Score the solution") {
            "NOVELTY: 7\nFEASIBILITY: 8\nIMPACT: 6\nRELEVANCE: 9\n".to_string()
        } else {
            "ok".to_string()
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        prompt: &str,
        temperature: f32,
        _timeout: Duration,
    ) -> Result<String, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), temperature));

        for (needle, reply) in &self.rules {
            if prompt.contains(needle.as_str()) {
                return match reply {
                    Reply::Text(text) => Ok(text.clone()),
                    Reply::Fail => Err(GenerationError::backend("scripted failure")),
                    Reply::Stall(duration) => {
                        tokio::time::sleep(*duration).await;
                        Ok(self.canned_reply(prompt))
                    }
                };
            }
        }

        Ok(self.canned_reply(prompt))
    }
}
