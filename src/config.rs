//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory,
//! then applies the `PRAVKA_LOG_LEVEL` env override. Secrets (the Telegram
//! bot token and the LLM API key) come from env vars only — never TOML.

use std::{env, fs, path::Path};

use serde::Deserialize;

use crate::error::AppError;

/// DeepSeek provider configuration. Populated from `[llm.deepseek]`.
#[derive(Debug, Clone)]
pub struct DeepSeekConfig {
    /// Full chat completions endpoint URL.
    pub api_base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    /// Sampling temperature. f64 so the wire value serializes exactly as
    /// configured (0.8, not a widened f32 approximation).
    pub temperature: f64,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

/// LLM configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider is active (`"dummy"` or `"deepseek"`).
    /// Maps to `default` in `[llm]` TOML.
    pub provider: String,
    /// Config for the DeepSeek provider (`[llm.deepseek]`).
    pub deepseek: DeepSeekConfig,
}

/// Fully-resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_name: String,
    pub log_level: String,
    /// Rewrites requested per submission (`[improve] variant_count`).
    pub variant_count: u8,
    pub llm: LlmConfig,
    /// Telegram bot token from `TELEGRAM_BOT_TOKEN` — required to run.
    pub telegram_token: Option<String>,
    /// API key from `LLM_API_KEY` — `None` only works with the dummy provider.
    pub llm_api_key: Option<String>,
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize)]
struct RawConfig {
    bot: RawBot,
    #[serde(default)]
    improve: RawImprove,
    #[serde(default)]
    llm: RawLlm,
}

#[derive(Deserialize)]
struct RawBot {
    bot_name: String,
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Deserialize)]
struct RawImprove {
    #[serde(default = "default_variant_count")]
    variant_count: u8,
}

impl Default for RawImprove {
    fn default() -> Self {
        Self { variant_count: default_variant_count() }
    }
}

#[derive(Deserialize)]
struct RawLlm {
    /// Maps to `default = "..."` in `[llm]`.
    #[serde(rename = "default", default = "default_llm_provider")]
    provider: String,
    #[serde(default)]
    deepseek: RawDeepSeekConfig,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self { provider: default_llm_provider(), deepseek: RawDeepSeekConfig::default() }
    }
}

#[derive(Deserialize)]
struct RawDeepSeekConfig {
    #[serde(default = "default_deepseek_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_deepseek_model")]
    model: String,
    #[serde(default = "default_deepseek_temperature")]
    temperature: f64,
    #[serde(default = "default_deepseek_timeout_seconds")]
    timeout_seconds: u64,
}

impl Default for RawDeepSeekConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_deepseek_api_base_url(),
            model: default_deepseek_model(),
            temperature: default_deepseek_temperature(),
            timeout_seconds: default_deepseek_timeout_seconds(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_variant_count() -> u8 { 3 }
fn default_llm_provider() -> String { "deepseek".to_string() }
fn default_deepseek_api_base_url() -> String {
    "https://api.deepseek.com/v1/chat/completions".to_string()
}
fn default_deepseek_model() -> String { "deepseek-chat".to_string() }
fn default_deepseek_temperature() -> f64 { 0.8 }
fn default_deepseek_timeout_seconds() -> u64 { 30 }

/// Load config from `config/default.toml`, then apply env-var overrides.
pub fn load() -> Result<Config, AppError> {
    let log_level_override = env::var("PRAVKA_LOG_LEVEL").ok();
    load_from(Path::new("config/default.toml"), log_level_override.as_deref())
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(path: &Path, log_level_override: Option<&str>) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    let log_level = log_level_override.unwrap_or(&parsed.bot.log_level).to_string();

    Ok(Config {
        bot_name: parsed.bot.bot_name,
        log_level,
        variant_count: parsed.improve.variant_count,
        llm: LlmConfig {
            provider: parsed.llm.provider,
            deepseek: DeepSeekConfig {
                api_base_url: parsed.llm.deepseek.api_base_url,
                model: parsed.llm.deepseek.model,
                temperature: parsed.llm.deepseek.temperature,
                timeout_seconds: parsed.llm.deepseek.timeout_seconds,
            },
        },
        telegram_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
        llm_api_key: env::var("LLM_API_KEY").ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_TOML: &str = r#"
[bot]
bot_name = "test-bot"
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_minimal_config_with_defaults() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), None).unwrap();
        assert_eq!(cfg.bot_name, "test-bot");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.variant_count, 3);
        assert_eq!(cfg.llm.provider, "deepseek");
        assert_eq!(
            cfg.llm.deepseek.api_base_url,
            "https://api.deepseek.com/v1/chat/completions"
        );
        assert_eq!(cfg.llm.deepseek.model, "deepseek-chat");
        assert_eq!(cfg.llm.deepseek.temperature, 0.8);
        assert_eq!(cfg.llm.deepseek.timeout_seconds, 30);
    }

    #[test]
    fn explicit_sections_override_defaults() {
        let f = write_toml(
            r#"
[bot]
bot_name = "test-bot"
log_level = "debug"

[improve]
variant_count = 5

[llm]
default = "dummy"

[llm.deepseek]
model = "deepseek-reasoner"
timeout_seconds = 10
"#,
        );
        let cfg = load_from(f.path(), None).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.variant_count, 5);
        assert_eq!(cfg.llm.provider, "dummy");
        assert_eq!(cfg.llm.deepseek.model, "deepseek-reasoner");
        assert_eq!(cfg.llm.deepseek.timeout_seconds, 10);
    }

    #[test]
    fn missing_file_errors() {
        let result = load_from(Path::new("/nonexistent/config.toml"), None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("config error"));
    }

    #[test]
    fn malformed_toml_errors() {
        let f = write_toml("[bot\nbot_name =");
        let result = load_from(f.path(), None);
        assert!(result.unwrap_err().to_string().contains("parse error"));
    }

    #[test]
    fn log_level_override_wins() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), Some("trace")).unwrap();
        assert_eq!(cfg.log_level, "trace");
    }
}
