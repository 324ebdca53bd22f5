//! # Blog Shared
//!
//! Wire types shared between the blog API server and its clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
