//! Integration test harness: start a server, seed it, tear it down.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use blog_api::{AppConfig, BlogServer, RunningServer};
use blog_core::DomainError;
use blog_core::domain::{Author, BlogPost, NewBlogPost};
use blog_core::ports::BlogPostRepository;

/// Records seeded before every test.
pub const SEED_COUNT: usize = 11;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Frances", "Ken", "Margaret", "Niklaus",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Allen", "Thompson", "Hamilton",
    "Wirth",
];

fn pick<'a>(rng: &mut StdRng, list: &[&'a str]) -> &'a str {
    list[rng.gen_range(0..list.len())]
}

fn sentence(rng: &mut StdRng, words: std::ops::Range<usize>) -> String {
    let len = rng.gen_range(words);
    let text = (0..len).map(|_| pick(rng, WORDS)).collect::<Vec<_>>().join(" ");

    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// A synthetic post, fully determined by `seed`.
pub fn generate_record(seed: u64) -> Result<NewBlogPost, DomainError> {
    let mut rng = StdRng::seed_from_u64(seed);

    let title = sentence(&mut rng, 3..8);
    let author = Author::new(pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES));
    let content = (0..rng.gen_range(2..5))
        .map(|_| sentence(&mut rng, 6..14))
        .collect::<Vec<_>>()
        .join(" ");

    NewBlogPost::new(title, author, content)
}

/// Bulk-insert `count` generated posts.
pub async fn seed_blog_posts(
    repo: &dyn BlogPostRepository,
    count: usize,
    base_seed: u64,
) -> anyhow::Result<Vec<BlogPost>> {
    let drafts = (0..count as u64)
        .map(|i| generate_record(base_seed.wrapping_add(i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(repo.insert_many(drafts).await?)
}

/// Empty the store, then seed [`SEED_COUNT`] posts.
///
/// Clearing first means rows left behind by a test that panicked before
/// `teardown` never leak into the next test.
pub async fn reset_and_seed(
    repo: &dyn BlogPostRepository,
    base_seed: u64,
) -> anyhow::Result<Vec<BlogPost>> {
    let leftover = repo.drop_all().await?;
    if leftover > 0 {
        eprintln!("cleared {leftover} posts left by a previous test");
    }
    seed_blog_posts(repo, SEED_COUNT, base_seed).await
}

/// Database used by the suite. Defaults to an isolated in-memory store.
pub fn test_database_url() -> String {
    std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "memory://".to_string())
}

/// A running server seeded with [`SEED_COUNT`] posts.
pub struct TestApp {
    pub server: RunningServer,
    pub client: reqwest::Client,
    pub seeded: Vec<BlogPost>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let server = BlogServer::start(AppConfig::for_database(test_database_url()))
            .await
            .expect("server should start");

        let base_seed = rand::thread_rng().r#gen::<u64>();
        let seeded = reset_and_seed(server.repository().as_ref(), base_seed)
            .await
            .expect("seeding should succeed");

        Self {
            server,
            client: reqwest::Client::new(),
            seeded,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.base_url(), path)
    }

    pub fn repository(&self) -> Arc<dyn BlogPostRepository> {
        self.server.repository()
    }

    /// Leave the store empty, then stop the server.
    pub async fn teardown(self) {
        self.repository()
            .drop_all()
            .await
            .expect("clearing the store should succeed");
        assert!(self.repository().list_all().await.unwrap().is_empty());

        self.server.stop().await.expect("server should stop");
    }
}
