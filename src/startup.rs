use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::auth::provider::DiscordProvider,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application touches the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the cookie-session layer backed by the application database.
///
/// Sessions share the SQLite pool with the rest of the application and expire
/// after seven days of inactivity.
///
/// # Arguments
/// - `db` - Database connection whose pool backs the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session layer ready to wrap the router
/// - `Err(AppError)` - Failed to migrate the session store table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the HTTP client used for calls to the external provider.
///
/// Redirects are disabled so a malicious response cannot bounce requests to
/// internal addresses.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Discord identity provider from configuration.
///
/// Constructs the typed OAuth2 client pointed at Discord's authorize and token
/// endpoints. Empty client credentials are accepted here; they only fail once
/// an actual exchange is attempted.
///
/// # Arguments
/// - `config` - Application configuration with Discord endpoints and credentials
/// - `http_client` - HTTP client used for token and profile requests
///
/// # Returns
/// - `Ok(DiscordProvider)` - Provider ready for login URL generation and exchanges
/// - `Err(AppError::ConfigErr)` - One of the configured URLs failed to parse
pub fn setup_discord_provider(
    config: &Config,
    http_client: reqwest::Client,
) -> Result<DiscordProvider, AppError> {
    let oauth_client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.discord_auth_url.clone())
                .map_err(|e| ConfigError::InvalidUrl("discord_auth_url".to_string(), e.to_string()))?,
        )
        .set_token_uri(
            TokenUrl::new(config.discord_token_url.clone()).map_err(|e| {
                ConfigError::InvalidUrl("discord_token_url".to_string(), e.to_string())
            })?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone()).map_err(|e| {
                ConfigError::InvalidUrl("discord_redirect_url".to_string(), e.to_string())
            })?,
        );

    Ok(DiscordProvider::new(oauth_client, http_client))
}
