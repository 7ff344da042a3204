use super::{cors_config, gemini_config::GeminiConfig, server_config::ServerConfig};
use poem::middleware::Cors;

/// Aggregated runtime configuration, resolved once at startup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Fails when the Gemini credential cannot be resolved, so the
    /// listener never starts with a missing key.
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            gemini: GeminiConfig::resolve()?,
        })
    }
}
