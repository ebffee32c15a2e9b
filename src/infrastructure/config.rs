use crate::domain::error::{AppError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    /// Must be provisioned through config or environment. There is no
    /// built-in default: startup aborts when it is missing.
    pub api_key: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.7,
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
}

impl Settings {
    /// Layered load: defaults, then `findecoder.toml`, then environment
    /// variables (`FINDECODER_SERVER__PORT=8080` style). `GOOGLE_API_KEY`
    /// is honored as a conventional fallback for the Gemini credential.
    pub fn load() -> Result<Self> {
        let mut settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("findecoder.toml"))
            .merge(Env::prefixed("FINDECODER_").split("__"))
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        if settings.gemini.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
                settings.gemini.api_key = key;
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.gemini.api_key.trim().is_empty() {
            return Err(AppError::ConfigError(
                "Gemini API key is not configured. Set FINDECODER_GEMINI__API_KEY or \
                 GOOGLE_API_KEY before starting the server."
                    .to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}
