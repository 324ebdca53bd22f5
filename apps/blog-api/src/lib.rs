//! # Blog API
//!
//! HTTP surface and process lifecycle of the blog post service.
//! The binary in `main.rs` is a thin wrapper around [`BlogServer`].

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::{BlogServer, RunningServer, ShutdownError, StartupError};
pub use state::AppState;
