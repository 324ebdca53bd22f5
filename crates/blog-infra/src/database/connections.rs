#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Scheme selecting the in-memory store instead of a real database.
pub const MEMORY_SCHEME: &str = "memory://";

/// Configuration for the blog post store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Config with the default pool sizes.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
        }
    }

    /// Which storage backend the URL asks for.
    pub fn backend(&self) -> Option<StorageBackend> {
        StorageBackend::from_url(&self.url)
    }
}

/// Storage backends understood by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres,
}

impl StorageBackend {
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with(MEMORY_SCHEME) {
            Some(Self::Memory)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else {
            None
        }
    }
}

/// Pooled connection to the main database.
#[cfg(feature = "postgres")]
pub struct DatabasePool {
    conn: DbConn,
}

#[cfg(feature = "postgres")]
impl DatabasePool {
    /// Open the pool and wait until a connection is established.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        conn.ping().await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self { conn })
    }

    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    /// Hand the pool over to its owner, which is responsible for closing it.
    pub fn into_conn(self) -> DbConn {
        self.conn
    }
}
