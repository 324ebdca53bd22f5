//! # Blog Infrastructure
//!
//! Concrete implementations of the storage port defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `minimal` - No external dependencies, in-memory storage only

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryBlogPostRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabasePool, PostgresBlogPostRepository};
