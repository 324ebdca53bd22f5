//! Server lifecycle - start the listener and its storage, stop both.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing_actix_web::TracingLogger;

use blog_core::ports::BlogPostRepository;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::{AppState, Storage};

/// Failures while bringing the server up. Fatal to the caller.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedDatabase(String),

    #[error("Database connection failed: {0}")]
    Database(String),

    #[error("Database migration failed: {0}")]
    Migration(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP listener reported no bound address")]
    NoAddress,
}

/// Failures while tearing the server down.
#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("HTTP server exited with error: {0}")]
    Server(#[from] std::io::Error),

    #[error("HTTP server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Closing database connection failed: {0}")]
    Database(String),
}

/// Entry point of the server lifecycle.
pub struct BlogServer;

impl BlogServer {
    /// Open storage, bind the listener and start serving.
    ///
    /// Resolves once the storage connection is open and the socket is bound.
    pub async fn start(config: AppConfig) -> Result<RunningServer, StartupError> {
        let storage = Storage::connect(&config.database).await?;
        let state = web::Data::new(AppState::new(storage.posts()));

        let mut server = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .app_data(state.clone())
                .configure(handlers::configure_routes)
        })
        .disable_signals();
        if let Some(workers) = config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind((config.host.as_str(), config.port))
            .map_err(|source| StartupError::Bind {
                addr: format!("{}:{}", config.host, config.port),
                source,
            })?;
        let addr = server
            .addrs()
            .first()
            .copied()
            .ok_or(StartupError::NoAddress)?;

        let server = server.run();
        let handle = server.handle();
        let task = tokio::spawn(server);

        tracing::info!(%addr, "HTTP listener bound");

        Ok(RunningServer {
            addr,
            handle,
            task,
            storage,
        })
    }
}

/// A started server. Dropping it without [`RunningServer::stop`] leaves the
/// listener running until the runtime shuts down.
pub struct RunningServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<std::io::Result<()>>,
    storage: Storage,
}

impl RunningServer {
    /// Address the listener is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL for HTTP clients, e.g. `http://127.0.0.1:41234`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// The repository the handlers serve from.
    pub fn repository(&self) -> Arc<dyn BlogPostRepository> {
        self.storage.posts()
    }

    /// Gracefully stop the listener, then close storage.
    pub async fn stop(self) -> Result<(), ShutdownError> {
        tracing::info!(addr = %self.addr, "Stopping HTTP server");

        self.handle.stop(true).await;
        self.task.await??;
        self.storage.close().await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_start_and_stop_with_memory_storage() {
        let server = BlogServer::start(AppConfig::for_database("memory://"))
            .await
            .unwrap();

        assert_ne!(server.addr().port(), 0);
        assert!(server.base_url().starts_with("http://127.0.0.1:"));
        assert!(server.repository().list_all().await.unwrap().is_empty());

        server.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_start_fails_on_unsupported_database() {
        let result = BlogServer::start(AppConfig::for_database("ftp://nowhere")).await;
        assert!(matches!(result, Err(StartupError::UnsupportedDatabase(_))));
    }
}
