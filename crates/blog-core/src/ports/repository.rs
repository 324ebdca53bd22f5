use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::error::RepoError;

/// Blog post storage - the full persistence contract of the service.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Persist a batch of posts, assigning ids and creation timestamps.
    async fn insert_many(&self, drafts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError>;

    /// Every stored post, in storage-defined order.
    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Apply `title`/`content` changes to an existing post.
    ///
    /// Returns [`RepoError::NotFound`] if no post has this id.
    async fn update_by_id(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError>;

    /// Delete a post. A second delete of the same id fails with [`RepoError::NotFound`].
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError>;

    /// Remove every post, returning how many were removed.
    async fn drop_all(&self) -> Result<u64, RepoError>;

    /// Persist a single post.
    async fn create(&self, draft: NewBlogPost) -> Result<BlogPost, RepoError> {
        self.insert_many(vec![draft])
            .await?
            .pop()
            .ok_or_else(|| RepoError::Query("insert returned no rows".to_string()))
    }
}
