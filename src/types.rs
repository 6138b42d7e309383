pub use crate::utils::database;
use crate::modules::{auth, food, user};
use async_trait::async_trait;
use std::{env, sync::Arc};

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("failed to connect to the database: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub session_ttl_hours: i64,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = parse_var::<u16>("PORT", 8000)?;
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let max_connections = parse_var::<u32>("DATABASE_MAX_CONNECTIONS", 4)?;
        let session_ttl_hours = parse_var::<i64>("SESSION_TTL_HOURS", 24 * 7)?;

        if session_ttl_hours <= 0 {
            return Err(ConfigError::InvalidValue {
                name: "SESSION_TTL_HOURS",
                value: session_ttl_hours.to_string(),
            });
        }

        Ok(Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            auth: AuthConfig { session_ttl_hours },
        })
    }
}

#[derive(Clone, Debug)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct AuthContext {
    pub session_ttl: chrono::Duration,
}

/// The collections every request handler reads from and writes to.
#[derive(Clone)]
pub struct Store {
    pub foods: Arc<dyn food::repository::FoodRepository>,
    pub users: Arc<dyn user::repository::UserRepository>,
    pub sessions: Arc<dyn auth::repository::SessionRepository>,
}

impl Store {
    pub fn in_memory() -> Self {
        Self {
            foods: Arc::new(food::repository::memory::MemoryFoodRepository::default()),
            users: Arc::new(user::repository::memory::MemoryUserRepository::default()),
            sessions: Arc::new(auth::repository::memory::MemorySessionRepository::default()),
        }
    }

    pub fn postgres(db_conn: database::DatabaseConnection) -> Self {
        Self {
            foods: Arc::new(food::repository::postgres::PgFoodRepository::new(
                db_conn.clone(),
            )),
            users: Arc::new(user::repository::postgres::PgUserRepository::new(
                db_conn.clone(),
            )),
            sessions: Arc::new(auth::repository::postgres::PgSessionRepository::new(
                db_conn,
            )),
        }
    }
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub auth: AuthContext,
    pub store: Store,
}

impl Context {
    pub fn new(config: &Config, store: Store) -> Self {
        Self {
            app: AppContext {
                host: config.app.host.clone(),
                environment: config.app.environment.clone(),
                port: config.app.port,
            },
            auth: AuthContext {
                session_ttl: chrono::Duration::hours(config.auth.session_ttl_hours),
            },
            store,
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, ContextError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, ContextError> {
        let store = match self.database.url.as_deref() {
            Some(url) => {
                let db_conn = database::connect(url, self.database.max_connections).await?;
                database::migrate(&db_conn).await?;
                tracing::info!("Using the PostgreSQL store");
                Store::postgres(db_conn)
            }
            None => {
                tracing::warn!("DATABASE_URL not set, falling back to the in-memory store");
                Store::in_memory()
            }
        };

        Ok(Context::new(&self, store))
    }
}
