/**
 * Server Configuration
 *
 * This module holds the process-wide configuration object and the database
 * bootstrap.
 *
 * # Configuration Sources
 *
 * `AppConfig::from_env` reads the process environment (seeded from `.env` by
 * the binary). The resulting value is built once at startup and handed to
 * every collaborator that needs it; nothing re-reads the environment later.
 *
 * | Variable            | Required | Default                                  |
 * |---------------------|----------|------------------------------------------|
 * | `JWT_SECRET`        | yes      |                                          |
 * | `DATABASE_URL`      | no       | in-memory stores                         |
 * | `PORT`/`SERVER_PORT`| no       | 3000                                     |
 * | `BCRYPT_COST`       | no       | `bcrypt::DEFAULT_COST`                   |
 * | `WENXIN_API_URL`    | no       | provider disabled when unset             |
 * | `WENXIN_API_KEY`    | no       |                                          |
 * | `DEEPSEEK_API_KEY`  | no       | provider disabled when unset             |
 * | `DEEPSEEK_BASE_URL` | no       | `https://api.deepseek.com`               |
 * | `DEEPSEEK_MODEL`    | no       | `deepseek-chat`                          |
 * | `TONGYI_API_KEY`    | no       | provider disabled when unset             |
 * | `TONGYI_BASE_URL`   | no       | DashScope compatible-mode endpoint       |
 * | `TONGYI_MODEL`      | no       | `qwen-turbo`                             |
 */

use std::time::Duration;

use sqlx::PgPool;
use thiserror::Error;

/// Fixed validity window of issued tokens
pub const TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Work factor bounds accepted by bcrypt
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

pub const DEFAULT_DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek-chat";
pub const DEFAULT_TONGYI_BASE_URL: &str = "https://dashscope.aliyuncs.com/compatible-mode/v1";
pub const DEFAULT_TONGYI_MODEL: &str = "qwen-turbo";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {message}")]
    InvalidValue {
        name: &'static str,
        message: String,
    },
}

/// Settings for the Wenxin integration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WenxinSettings {
    pub api_url: String,
    pub api_key: String,
}

/// Settings for an OpenAI-compatible chat completions integration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

/// Credentials for every provider the gateway knows about
///
/// A `None` entry means the provider is not registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSettings {
    pub wenxin: Option<WenxinSettings>,
    pub deepseek: Option<CompletionSettings>,
    pub tongyi: Option<CompletionSettings>,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string; in-memory stores are used when absent
    pub database_url: Option<String>,
    /// Token signing secret
    pub jwt_secret: String,
    /// Listening port
    pub port: u16,
    /// Token validity window
    pub token_ttl: Duration,
    /// bcrypt work factor for stored password digests
    pub bcrypt_cost: u32,
    /// Provider credentials
    pub providers: ProviderSettings,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();

        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = get("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(port) = get("PORT").or_else(|| get("SERVER_PORT")) {
            let port = port.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: "PORT",
                message: e.to_string(),
            })?;
            builder = builder.port(port);
        }
        if let Some(cost) = get("BCRYPT_COST") {
            let cost = cost.parse::<u32>().map_err(|e| ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                message: e.to_string(),
            })?;
            builder = builder.bcrypt_cost(cost);
        }

        let mut providers = ProviderSettings::default();
        match (get("WENXIN_API_URL"), get("WENXIN_API_KEY")) {
            (Some(api_url), Some(api_key)) => {
                providers.wenxin = Some(WenxinSettings { api_url, api_key });
            }
            (Some(_), None) => return Err(ConfigError::MissingValue("WENXIN_API_KEY")),
            (None, Some(_)) => return Err(ConfigError::MissingValue("WENXIN_API_URL")),
            (None, None) => {}
        }
        if let Some(api_key) = get("DEEPSEEK_API_KEY") {
            providers.deepseek = Some(CompletionSettings {
                base_url: get("DEEPSEEK_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_DEEPSEEK_BASE_URL.to_string()),
                api_key,
                model: get("DEEPSEEK_MODEL").unwrap_or_else(|| DEFAULT_DEEPSEEK_MODEL.to_string()),
            });
        }
        if let Some(api_key) = get("TONGYI_API_KEY") {
            providers.tongyi = Some(CompletionSettings {
                base_url: get("TONGYI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_TONGYI_BASE_URL.to_string()),
                api_key,
                model: get("TONGYI_MODEL").unwrap_or_else(|| DEFAULT_TONGYI_MODEL.to_string()),
            });
        }

        builder.providers(providers).build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                message: format!("must be between {} and {}", MIN_BCRYPT_COST, MAX_BCRYPT_COST),
            });
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "token_ttl",
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    port: u16,
    token_ttl: Duration,
    bcrypt_cost: u32,
    providers: ProviderSettings,
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self {
            database_url: None,
            jwt_secret: None,
            port: DEFAULT_PORT,
            token_ttl: TOKEN_TTL,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            providers: ProviderSettings::default(),
        }
    }
}

impl AppConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn providers(mut self, providers: ProviderSettings) -> Self {
        self.providers = providers;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database_url: self.database_url,
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            port: self.port,
            token_ttl: self.token_ttl,
            bcrypt_cost: self.bcrypt_cost,
            providers: self.providers,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Connect to Postgres and run migrations
///
/// A configured database that cannot be reached or migrated is a startup
/// failure; only an unset `DATABASE_URL` selects the in-memory stores.
pub async fn load_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
