//! Test-only provider that records every call and returns a scripted result.

use std::sync::{Arc, Mutex};

use crate::llm::ProviderError;

/// One recorded call: (system instruction, user text).
pub type RecordedCall = (String, String);

#[derive(Debug, Clone)]
pub struct MockProvider {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    /// `Ok(text)` to succeed, `Err(msg)` to simulate a remote failure.
    script: Result<String, String>,
}

impl MockProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { calls: Arc::default(), script: Ok(text.into()) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { calls: Arc::default(), script: Err(message.into()) }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }

    pub async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push((system.to_string(), user.to_string()));
        match &self.script {
            Ok(text) => Ok(text.clone()),
            Err(msg) => Err(ProviderError::Request(msg.clone())),
        }
    }
}
