//! Document store abstraction.
//!
//! The search engine never talks to a concrete database; it issues
//! ordered range queries and keyword-containment queries through
//! [`DocumentStore`]. Any backend that can answer "field between start
//! and end, up to limit" can sit behind this trait; [`MemoryStore`] is
//! the bundled implementation backing tests and the CLI.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A book document with its write-time search fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDoc {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    /// Lowercase mood label, when the book is mood-tagged.
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub searchable_title: String,
    #[serde(default)]
    pub searchable_author: String,
    #[serde(default)]
    pub searchable_genres: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// An author document with its write-time search fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDoc {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub book_count: Option<u32>,
    #[serde(default)]
    pub searchable_name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A review document, including its like state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDoc {
    pub id: String,
    pub title: String,
    pub book_id: String,
    pub book_title: String,
    pub username: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub liked_by: Vec<String>,
    #[serde(default)]
    pub searchable_book_title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Errors a store backend can report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(String),
}

/// Ordered-query capability over the `books`, `authors`, and `reviews`
/// collections.
///
/// Range methods take inclusive `[start, end]` bounds; callers emulate
/// "starts with" by passing [`crate::text::prefix_range`] bounds.
/// Results come back in field order, document id breaking ties.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Books whose mood label is within `[start, end]`.
    async fn books_in_mood_range(
        &self,
        start: &str,
        end: &str,
        limit: usize,
    ) -> Result<Vec<BookDoc>, StoreError>;

    /// Books whose indexed genre tokens contain `token` exactly.
    async fn books_with_genre(
        &self,
        token: &str,
        limit: usize,
    ) -> Result<Vec<BookDoc>, StoreError>;

    /// Books whose normalized title is within `[start, end]`.
    async fn books_in_title_range(
        &self,
        start: &str,
        end: &str,
        limit: usize,
    ) -> Result<Vec<BookDoc>, StoreError>;

    /// Authors whose normalized name is within `[start, end]`.
    async fn authors_in_name_range(
        &self,
        start: &str,
        end: &str,
        limit: usize,
    ) -> Result<Vec<AuthorDoc>, StoreError>;

    /// Fetch a single review by id.
    async fn review(&self, id: &str) -> Result<Option<ReviewDoc>, StoreError>;

    /// Insert or replace a book, reindexing its search fields.
    async fn put_book(&self, book: BookDoc) -> Result<(), StoreError>;

    /// Insert or replace an author, reindexing its search fields.
    async fn put_author(&self, author: AuthorDoc) -> Result<(), StoreError>;

    /// Insert or replace a review.
    async fn put_review(&self, review: ReviewDoc) -> Result<(), StoreError>;

    /// Drop every document from every collection.
    async fn clear(&self) -> Result<(), StoreError>;
}
