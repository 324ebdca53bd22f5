//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, Set};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};

/// PostgreSQL blog post repository.
pub struct PostgresBlogPostRepository {
    db: DbConn,
}

impl PostgresBlogPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Give back the connection the repository was built on.
    pub fn into_conn(self) -> DbConn {
        self.db
    }

    /// Close the underlying pool.
    pub async fn close(self) -> Result<(), DbErr> {
        self.into_conn().close().await?;
        tracing::info!("Database connection closed");
        Ok(())
    }
}

fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn insert_many(&self, drafts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let posts: Vec<BlogPost> = drafts.into_iter().map(BlogPost::new).collect();
        let models = posts.iter().cloned().map(blog_post::ActiveModel::from);

        BlogPostEntity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(query_error)?;

        tracing::debug!(count = posts.len(), "Inserted blog posts");
        Ok(posts)
    }

    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn update_by_id(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        let model = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?
            .ok_or(RepoError::NotFound)?;

        if patch.is_empty() {
            return Ok(model.into());
        }

        let mut active = model.into_active_model();
        if let Some(title) = patch.title() {
            active.title = Set(title.to_string());
        }
        if let Some(content) = patch.content() {
            active.content = Set(content.to_string());
        }

        let updated = active.update(&self.db).await.map_err(query_error)?;
        tracing::debug!(post_id = %id, "Updated blog post");
        Ok(updated.into())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let result = BlogPostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn drop_all(&self) -> Result<u64, RepoError> {
        let result = BlogPostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        tracing::debug!(count = result.rows_affected, "Dropped all blog posts");
        Ok(result.rows_affected)
    }
}
