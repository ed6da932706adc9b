use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Public base URL, used to build problem `type` URIs.
    pub app_url: String,
    pub bind_address: String,

    /// Comma separated list of allowed origins, or `*`. CORS is disabled when unset.
    pub cors_allowed_origins: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = required_var("APP_URL")?;
        url::Url::parse(&app_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            app_url: app_url.trim_end_matches('/').to_string(),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|origins| origins.trim().to_string())
                .filter(|origins| !origins.is_empty()),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
