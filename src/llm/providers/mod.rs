//! LLM provider implementations.
//!
//! `build(config, api_key)` is the factory — called once at startup.
//! Adding a new backend = new module + new match arm.

pub mod deepseek;
pub mod dummy;
#[cfg(test)]
pub mod mock;

use crate::config::LlmConfig;
use crate::llm::{LlmProvider, ProviderError};

/// Construct a [`LlmProvider`] from config and an optional API key.
///
/// `api_key` is sourced from the `LLM_API_KEY` env var (never TOML) and is
/// `None` only for the dummy backend.
pub fn build(config: &LlmConfig, api_key: Option<String>) -> Result<LlmProvider, ProviderError> {
    match config.provider.as_str() {
        "dummy" => Ok(LlmProvider::Dummy(dummy::DummyProvider)),
        "deepseek" => {
            let ds = &config.deepseek;
            let key = api_key.ok_or_else(|| {
                ProviderError::Request("LLM_API_KEY not set for deepseek provider".into())
            })?;
            let p = deepseek::DeepSeekProvider::new(
                ds.api_base_url.clone(),
                ds.model.clone(),
                ds.temperature,
                ds.timeout_seconds,
                key,
            )?;
            Ok(LlmProvider::DeepSeek(p))
        }
        _ => Err(ProviderError::UnknownProvider(config.provider.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeepSeekConfig, LlmConfig};

    fn llm_config(provider: &str) -> LlmConfig {
        LlmConfig {
            provider: provider.into(),
            deepseek: DeepSeekConfig {
                api_base_url: "http://localhost:0/v1/chat/completions".into(),
                model: "deepseek-chat".into(),
                temperature: 0.8,
                timeout_seconds: 1,
            },
        }
    }

    #[test]
    fn builds_dummy_without_key() {
        assert!(matches!(
            build(&llm_config("dummy"), None),
            Ok(LlmProvider::Dummy(_))
        ));
    }

    #[test]
    fn deepseek_requires_key() {
        assert!(matches!(
            build(&llm_config("deepseek"), None),
            Err(ProviderError::Request(_))
        ));
        assert!(matches!(
            build(&llm_config("deepseek"), Some("sk-test".into())),
            Ok(LlmProvider::DeepSeek(_))
        ));
    }

    #[test]
    fn unknown_provider_errors() {
        let err = build(&llm_config("gpt-9"), None).unwrap_err();
        assert!(err.to_string().contains("unknown provider"));
    }
}
