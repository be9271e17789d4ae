//! Configuration, read from the environment.

use std::path::PathBuf;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API key.
    pub api_key: SecretString,
    /// Generative model name, e.g. "gemini-pro".
    pub model: String,
    /// Directory holding the persisted profile data.
    pub data_dir: PathBuf,
    /// HTTP port for the REST surface.
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from `GEMINI_API_KEY` and the `ZODIAC_AI_*`
    /// environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;

        let model =
            std::env::var("ZODIAC_AI_MODEL").unwrap_or_else(|_| "gemini-pro".to_string());

        let data_dir = std::env::var("ZODIAC_AI_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let port = match std::env::var("ZODIAC_AI_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "ZODIAC_AI_PORT".to_string(),
                message: format!("not a valid port number: {raw}"),
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            api_key: SecretString::from(api_key),
            model,
            data_dir,
            port,
        })
    }
}
