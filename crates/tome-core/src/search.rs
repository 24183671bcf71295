//! The search cascade.
//!
//! [`SearchEngine::search`] turns a free-text term into an ordered,
//! deduplicated result list. Mood-classified terms query the store by
//! mood and top up from the curated picks; everything else runs the
//! genre → title → author query sequence. Static recommendations and
//! the genre-alias table guarantee the engine always resolves to some
//! list, store or no store.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::catalog::{self, CatalogBook};
use crate::mood::{self, Mood};
use crate::recents::RecentSearches;
use crate::recommend;
use crate::store::{AuthorDoc, BookDoc, DocumentStore, ReviewDoc};
use crate::text;

/// Hard cap on a single search's result list.
pub const MAX_RESULTS: usize = 10;

/// Kind tag used for identity: a result is unique by (kind, id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResultKind {
    Book,
    Author,
    Review,
}

/// A single entry in a search result list.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    Book {
        id: String,
        title: String,
        author: String,
        cover: Option<String>,
        genres: Vec<String>,
        rating: Option<f64>,
    },
    Author {
        id: String,
        name: String,
        photo: Option<String>,
        book_count: Option<u32>,
    },
    Review {
        id: String,
        title: String,
        book_title: String,
        username: String,
        rating: Option<f64>,
    },
}

impl SearchResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            SearchResult::Book { .. } => ResultKind::Book,
            SearchResult::Author { .. } => ResultKind::Author,
            SearchResult::Review { .. } => ResultKind::Review,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SearchResult::Book { id, .. } => id,
            SearchResult::Author { id, .. } => id,
            SearchResult::Review { id, .. } => id,
        }
    }

    /// The primary display line: book title, author name, or review
    /// title.
    pub fn label(&self) -> &str {
        match self {
            SearchResult::Book { title, .. } => title,
            SearchResult::Author { name, .. } => name,
            SearchResult::Review { title, .. } => title,
        }
    }

    /// The secondary display line, when there is one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            SearchResult::Book { author, .. } => Some(author),
            SearchResult::Author { .. } => None,
            SearchResult::Review { book_title, .. } => Some(book_title),
        }
    }
}

impl From<&CatalogBook> for SearchResult {
    fn from(book: &CatalogBook) -> Self {
        SearchResult::Book {
            id: book.id.to_string(),
            title: book.title.to_string(),
            author: book.author.to_string(),
            cover: book.cover.map(str::to_string),
            genres: book.genres.iter().map(|g| g.to_string()).collect(),
            rating: book.rating,
        }
    }
}

impl From<BookDoc> for SearchResult {
    fn from(book: BookDoc) -> Self {
        SearchResult::Book {
            id: book.id,
            title: book.title,
            author: book.author,
            cover: book.cover,
            genres: book.genres,
            rating: book.rating,
        }
    }
}

impl From<AuthorDoc> for SearchResult {
    fn from(author: AuthorDoc) -> Self {
        SearchResult::Author {
            id: author.id,
            name: author.name,
            photo: author.photo,
            book_count: author.book_count,
        }
    }
}

impl From<ReviewDoc> for SearchResult {
    fn from(review: ReviewDoc) -> Self {
        SearchResult::Review {
            id: review.id,
            title: review.title,
            book_title: review.book_title,
            username: review.username,
            rating: review.rating,
        }
    }
}

/// Query orchestrator over an injected [`DocumentStore`].
pub struct SearchEngine {
    store: Arc<dyn DocumentStore>,
    recents: Mutex<RecentSearches>,
    max_results: usize,
}

impl SearchEngine {
    pub fn new(store: Arc<dyn DocumentStore>, recents: RecentSearches) -> Self {
        Self {
            store,
            recents: Mutex::new(recents),
            max_results: MAX_RESULTS,
        }
    }

    /// Lower the result cap below the default.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.clamp(1, MAX_RESULTS);
        self
    }

    /// Run the full cascade for a term.
    ///
    /// Never fails: a store error downgrades that query step to zero
    /// results and the static fallbacks still run, so some list always
    /// comes back.
    pub async fn search(&self, term: &str) -> Vec<SearchResult> {
        // 1. Empty query: popular books, no store access
        if term.trim().is_empty() {
            return catalog::POPULAR_BOOKS.iter().map(SearchResult::from).collect();
        }

        let key = text::normalize(term);
        let lowered = term.to_lowercase();
        let mut results: Vec<SearchResult> = Vec::new();

        // 2. Mood terms query the store by mood; everything else runs
        //    the genre/title/author sequence
        match mood::classify(term) {
            Some(mood) => self.search_by_mood(&key, mood, &mut results).await,
            None => self.search_general(&key, &mut results).await,
        }

        // 3. Static recommendations when the list is thin, or whenever
        //    the reader asked for recommendations outright
        if results.len() < 5 || lowered.contains("recommend") || lowered.contains("suggest") {
            append_catalog_books(&mut results, recommend::recommendations_for(term));
        }

        // 4. Still nothing: known genre labels resolve from the
        //    catalog, anything else gets one more recommendation pass
        if results.is_empty() {
            match catalog::books_for_alias(lowered.trim()) {
                Some(books) => append_catalog_books(&mut results, books),
                None => append_catalog_books(&mut results, recommend::recommendations_for(term)),
            }
        }

        // 5. Cap the merged list
        results.truncate(self.max_results);

        // 6. Remember the term
        self.recents.lock().await.push(term);

        results
    }

    /// Mood path: a prefix-range query on the book mood field, topped
    /// up with the mood's curated picks when thin.
    async fn search_by_mood(&self, key: &str, mood: Mood, results: &mut Vec<SearchResult>) {
        let (start, end) = text::prefix_range(key);
        match self.store.books_in_mood_range(&start, &end, 5).await {
            Ok(books) => append_book_docs(results, books),
            Err(err) => tracing::warn!("mood query failed: {err}"),
        }

        if results.len() < 3 {
            append_catalog_books(results, catalog::picks_for(mood));
        }
    }

    /// General path: genre containment, then title prefix, then author
    /// prefix, each gated on how full the list already is.
    async fn search_general(&self, key: &str, results: &mut Vec<SearchResult>) {
        match self.store.books_with_genre(key, 5).await {
            Ok(books) => append_book_docs(results, books),
            Err(err) => tracing::warn!("genre query failed: {err}"),
        }

        if results.len() < 5 {
            let (start, end) = text::prefix_range(key);
            match self.store.books_in_title_range(&start, &end, 5).await {
                Ok(books) => append_book_docs(results, books),
                Err(err) => tracing::warn!("title query failed: {err}"),
            }
        }

        if results.len() < 8 {
            let (start, end) = text::prefix_range(key);
            match self.store.authors_in_name_range(&start, &end, 3).await {
                Ok(authors) => {
                    for author in authors {
                        push_unique(results, SearchResult::from(author));
                    }
                }
                Err(err) => tracing::warn!("author query failed: {err}"),
            }
        }
    }

    /// Recent search terms, most recent first.
    pub async fn recent_searches(&self) -> Vec<String> {
        self.recents
            .lock()
            .await
            .all()
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    /// Forget all recent searches, including the persisted copy.
    pub async fn clear_recent_searches(&self) {
        self.recents.lock().await.clear();
    }
}

/// Append a result unless its (kind, id) pair is already present.
fn push_unique(results: &mut Vec<SearchResult>, candidate: SearchResult) {
    let exists = results
        .iter()
        .any(|r| r.kind() == candidate.kind() && r.id() == candidate.id());
    if !exists {
        results.push(candidate);
    }
}

fn append_book_docs(results: &mut Vec<SearchResult>, books: Vec<BookDoc>) {
    for book in books {
        push_unique(results, SearchResult::from(book));
    }
}

/// Append catalog books, skipping any whose id or case-insensitive
/// title is already present among the book results.
fn append_catalog_books<'a, I>(results: &mut Vec<SearchResult>, books: I)
where
    I: IntoIterator<Item = &'a CatalogBook>,
{
    for book in books {
        let duplicate = results.iter().any(|r| match r {
            SearchResult::Book { id, title, .. } => {
                id == book.id || title.to_lowercase() == book.title.to_lowercase()
            }
            _ => false,
        });
        if !duplicate {
            results.push(SearchResult::from(book));
        }
    }
}
