use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// BlogPost entity - a persisted blog post.
///
/// `id`, `author` and `created_at` are fixed at creation; only `title` and
/// `content` change afterwards, through [`BlogPostPatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub author: Author,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    /// Persist-ready post with a generated id and creation timestamp.
    pub fn new(draft: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            author: draft.author,
            content: draft.content,
            created_at: Utc::now(),
        }
    }

    /// Apply a patch in place, leaving absent fields untouched.
    pub fn apply(&mut self, patch: &BlogPostPatch) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(content) = &patch.content {
            self.content.clone_from(content);
        }
    }
}

/// A validated, not yet persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    title: String,
    author: Author,
    content: String,
}

impl NewBlogPost {
    /// Validate the inputs of a new post. Every text field must be non-blank.
    pub fn new(
        title: impl Into<String>,
        author: Author,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = non_blank("title", title.into())?;
        let author = Author {
            first_name: non_blank("author.firstName", author.first_name)?,
            last_name: non_blank("author.lastName", author.last_name)?,
        };
        let content = non_blank("content", content.into())?;

        Ok(Self {
            title,
            author,
            content,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Partial update of the mutable fields of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostPatch {
    title: Option<String>,
    content: Option<String>,
}

impl BlogPostPatch {
    /// Build a patch. Fields that are present must be non-blank.
    pub fn new(title: Option<String>, content: Option<String>) -> Result<Self, DomainError> {
        Ok(Self {
            title: title.map(|t| non_blank("title", t)).transpose()?,
            content: content.map(|c| non_blank("content", c)).transpose()?,
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Unwrap a required request field, reporting its name when missing.
pub fn require_field<T>(field: &'static str, value: Option<T>) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::Validation(format!("Missing `{field}` in request body")))
}

/// Parse a post identifier from its textual form.
pub fn parse_post_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::InvalidId(raw.to_string()))
}

fn non_blank(field: &'static str, value: String) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("`{field}` must not be empty")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewBlogPost {
        NewBlogPost::new("A", Author::new("J", "D"), "C").unwrap()
    }

    #[test]
    fn test_new_post_assigns_unique_ids() {
        let first = BlogPost::new(draft());
        let second = BlogPost::new(draft());
        assert_ne!(first.id, second.id);
        assert_eq!(first.title, "A");
        assert_eq!(first.author, Author::new("J", "D"));
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let err = NewBlogPost::new("  ", Author::new("J", "D"), "C").unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("title")));

        let err = NewBlogPost::new("A", Author::new("J", ""), "C").unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("author.lastName")));
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut post = BlogPost::new(draft());
        let created_at = post.created_at;

        let patch = BlogPostPatch::new(Some("New".to_string()), None).unwrap();
        post.apply(&patch);

        assert_eq!(post.title, "New");
        assert_eq!(post.content, "C");
        assert_eq!(post.author, Author::new("J", "D"));
        assert_eq!(post.created_at, created_at);
    }

    #[test]
    fn test_patch_rejects_empty_content() {
        assert!(BlogPostPatch::new(None, Some(String::new())).is_err());
        assert!(BlogPostPatch::new(None, None).unwrap().is_empty());
    }

    #[test]
    fn test_require_field_names_the_missing_field() {
        let err = require_field::<String>("content", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Missing `content` in request body"
        );
    }

    #[test]
    fn test_parse_post_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_post_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_post_id("not-a-uuid"),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn test_author_serializes_camel_case() {
        let json = serde_json::to_value(Author::new("Jane", "Doe")).unwrap();
        assert_eq!(json, serde_json::json!({"firstName": "Jane", "lastName": "Doe"}));
    }
}
