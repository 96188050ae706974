use crate::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub app_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// `DATABASE_URL` is required. The Discord client id and secret fall back
    /// to the empty string so the server (and the test suite) can start
    /// without provider credentials; OAuth flows will fail at the provider
    /// until they are set.
    pub fn from_env() -> Result<Self, AppError> {
        let app_url =
            std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            discord_client_id: std::env::var("DISCORD_CLIENT_ID").unwrap_or_default(),
            discord_client_secret: std::env::var("DISCORD_CLIENT_SECRET").unwrap_or_default(),
            discord_redirect_url: std::env::var("DISCORD_REDIRECT_URL")
                .unwrap_or_else(|_| format!("{}/api/auth/callback", app_url)),
            app_url,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
        })
    }
}
