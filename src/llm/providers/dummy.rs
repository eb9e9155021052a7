//! Dummy LLM provider — echoes input back prefixed with `[echo]`.
//! Used for exercising the full bot wiring without a real API key.

use crate::llm::ProviderError;

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn complete(&self, _system: &str, user: &str) -> Result<String, ProviderError> {
        Ok(format!("[echo] {user}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn complete_prefixes_echo() {
        let p = DummyProvider;
        assert_eq!(p.complete("system", "hello").await.unwrap(), "[echo] hello");
    }

    #[tokio::test]
    async fn system_prompt_is_ignored() {
        let p = DummyProvider;
        assert_eq!(p.complete("", "").await.unwrap(), "[echo] ");
    }
}
