//! Blog post handlers - one per route, each a thin adapter over the repository.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, BlogPostPatch, NewBlogPost, parse_post_id, require_field};
use blog_core::{DomainError, RepoError};
use blog_shared::dto::{
    AuthorResponse, BlogPostListResponse, BlogPostResponse, CreateBlogPostRequest,
    UpdateBlogPostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "BlogPost";

fn post_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id,
        title: post.title,
        author: AuthorResponse {
            first_name: post.author.first_name,
            last_name: post.author.last_name,
        },
        content: post.content,
    }
}

fn not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: ENTITY,
        id,
    }
    .into()
}

/// Attach the id to a repository not-found.
fn for_post(id: Uuid) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound => not_found(id),
        other => other.into(),
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;

    Ok(HttpResponse::Ok().json(BlogPostListResponse {
        blogposts: posts.into_iter().map(post_response).collect(),
    }))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let title = require_field("title", req.title)?;
    let content = require_field("content", req.content)?;
    let author = require_field("author", req.author)?;
    let author = Author::new(
        require_field("author.firstName", author.first_name)?,
        require_field("author.lastName", author.last_name)?,
    );

    let draft = NewBlogPost::new(title, author, content)?;
    let post = state.posts.create(draft).await?;
    tracing::info!(post_id = %post.id, "Blog post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", post.id)))
        .json(post_response(post)))
}

/// PUT /posts/{id}
///
/// Only `title` and `content` are updated. A body `id`, when present, must
/// name the same post as the path.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let req = body.into_inner();

    if let Some(body_id) = req.id.as_deref()
        && Uuid::parse_str(body_id).ok() != Some(id)
    {
        return Err(AppError::BadRequest(format!(
            "Request path id ({}) and request body id ({}) must match",
            path.as_str(),
            body_id
        )));
    }

    let patch = BlogPostPatch::new(req.title, req.content)?;
    state
        .posts
        .update_by_id(id, patch)
        .await
        .map_err(for_post(id))?;
    tracing::info!(post_id = %id, "Blog post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    state.posts.delete_by_id(id).await.map_err(for_post(id))?;
    tracing::info!(post_id = %id, "Blog post deleted");

    Ok(HttpResponse::NoContent().finish())
}
