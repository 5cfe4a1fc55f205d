use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    /// Shared secret for validating pre-issued login tokens. When unset,
    /// only anonymous identities can be established.
    pub auth_token_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            auth_token_secret: std::env::var("AUTH_TOKEN_SECRET").ok(),
        })
    }
}
