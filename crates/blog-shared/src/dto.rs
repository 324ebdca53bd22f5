//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are optional so that a missing field surfaces as a
//! validation error naming it, not as an opaque deserialization failure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// POST /posts body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub author: Option<AuthorDto>,
    pub content: Option<String>,
}

/// PUT /posts/{id} body. `id`, when sent, must match the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Author fields of a stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub first_name: String,
    pub last_name: String,
}

/// Public view of a blog post. Storage metadata is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: Uuid,
    pub title: String,
    pub author: AuthorResponse,
    pub content: String,
}

/// GET /posts body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostListResponse {
    pub blogposts: Vec<BlogPostResponse>,
}
