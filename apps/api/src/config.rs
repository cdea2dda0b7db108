use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
/// Nothing here is required: a missing credential only degrades model replies
/// to the fallback sentence.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub llm_model: String,
    pub llm_base_url: String,
    pub llm_temperature: f32,
    pub enable_translation: bool,
    pub enable_llm_sentiment: bool,
    pub max_message_chars: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            llm_model: optional_env("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            llm_base_url: optional_env("LLM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            llm_temperature: parse_env("LLM_TEMPERATURE", 0.2)?,
            enable_translation: parse_env("ENABLE_TRANSLATION", true)?,
            enable_llm_sentiment: parse_env("ENABLE_LLM_SENTIMENT", true)?,
            max_message_chars: parse_env("MAX_MESSAGE_CHARS", 4000)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.openai_api_key.trim().is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openai_api_key: String::new(),
            llm_model: DEFAULT_MODEL.to_string(),
            llm_base_url: DEFAULT_BASE_URL.to_string(),
            llm_temperature: 0.2,
            enable_translation: true,
            enable_llm_sentiment: true,
            max_message_chars: 4000,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Returns the variable only when it is set to a non-blank value.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let port: u16 = parse_env("TALENTSCOUT_TEST_UNSET_PORT", 9090).unwrap();
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("TALENTSCOUT_TEST_BAD_BOOL", "maybe");
        let result: Result<bool> = parse_env("TALENTSCOUT_TEST_BAD_BOOL", true);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("TALENTSCOUT_TEST_TEMPERATURE", " 0.7 ");
        let t: f32 = parse_env("TALENTSCOUT_TEST_TEMPERATURE", 0.2).unwrap();
        assert!((t - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_default_model_is_gpt_4o() {
        assert_eq!(Config::default().llm_model, "gpt-4o");
    }
}
