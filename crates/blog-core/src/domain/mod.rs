//! Domain entities - the core business objects.

mod post;

pub use post::{Author, BlogPost, BlogPostPatch, NewBlogPost, parse_post_id, require_field};
