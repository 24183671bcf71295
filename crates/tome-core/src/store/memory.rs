//! In-memory store backed by ordered field indexes.
//!
//! Documents live in per-collection maps; each queryable field keeps a
//! `BTreeMap` from field value to the sorted set of document ids
//! carrying that value, so range queries are `.range()` scans in field
//! order with ids breaking ties.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Bound::Included;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AuthorDoc, BookDoc, DocumentStore, ReviewDoc, StoreError};

/// Field value → sorted ids of documents carrying that value.
type FieldIndex = BTreeMap<String, BTreeSet<String>>;

#[derive(Default)]
struct Collections {
    books: HashMap<String, BookDoc>,
    authors: HashMap<String, AuthorDoc>,
    reviews: HashMap<String, ReviewDoc>,
    book_moods: FieldIndex,
    book_titles: FieldIndex,
    book_genres: FieldIndex,
    author_names: FieldIndex,
}

/// Thread-safe in-memory [`DocumentStore`].
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collections::default()),
        }
    }

    pub async fn book_count(&self) -> usize {
        self.inner.read().await.books.len()
    }

    pub async fn author_count(&self) -> usize {
        self.inner.read().await.authors.len()
    }

    pub async fn review_count(&self) -> usize {
        self.inner.read().await.reviews.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn index_insert(index: &mut FieldIndex, value: &str, id: &str) {
    index
        .entry(value.to_string())
        .or_default()
        .insert(id.to_string());
}

fn index_remove(index: &mut FieldIndex, value: &str, id: &str) {
    if let Some(bucket) = index.get_mut(value) {
        bucket.remove(id);
        if bucket.is_empty() {
            index.remove(value);
        }
    }
}

fn index_book(collections: &mut Collections, book: &BookDoc) {
    if let Some(mood) = &book.mood {
        index_insert(&mut collections.book_moods, mood, &book.id);
    }
    index_insert(&mut collections.book_titles, &book.searchable_title, &book.id);
    for token in &book.searchable_genres {
        index_insert(&mut collections.book_genres, token, &book.id);
    }
}

fn unindex_book(collections: &mut Collections, book: &BookDoc) {
    if let Some(mood) = &book.mood {
        index_remove(&mut collections.book_moods, mood, &book.id);
    }
    index_remove(&mut collections.book_titles, &book.searchable_title, &book.id);
    for token in &book.searchable_genres {
        index_remove(&mut collections.book_genres, token, &book.id);
    }
}

/// Collect up to `limit` ids whose field value lies in `[start, end]`.
fn scan(index: &FieldIndex, start: &str, end: &str, limit: usize) -> Vec<String> {
    let mut out = Vec::new();
    // BTreeMap::range panics on inverted bounds.
    if start > end {
        return out;
    }
    for bucket in index
        .range::<str, _>((Included(start), Included(end)))
        .map(|(_, ids)| ids)
    {
        for id in bucket {
            if out.len() == limit {
                return out;
            }
            out.push(id.clone());
        }
    }
    out
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn books_in_mood_range(
        &self,
        start: &str,
        end: &str,
        limit: usize,
    ) -> Result<Vec<BookDoc>, StoreError> {
        let collections = self.inner.read().await;
        let ids = scan(&collections.book_moods, start, end, limit);
        Ok(ids
            .iter()
            .filter_map(|id| collections.books.get(id).cloned())
            .collect())
    }

    async fn books_with_genre(
        &self,
        token: &str,
        limit: usize,
    ) -> Result<Vec<BookDoc>, StoreError> {
        let collections = self.inner.read().await;
        let mut out = Vec::new();
        if let Some(bucket) = collections.book_genres.get(token) {
            for id in bucket {
                if out.len() == limit {
                    break;
                }
                if let Some(book) = collections.books.get(id) {
                    out.push(book.clone());
                }
            }
        }
        Ok(out)
    }

    async fn books_in_title_range(
        &self,
        start: &str,
        end: &str,
        limit: usize,
    ) -> Result<Vec<BookDoc>, StoreError> {
        let collections = self.inner.read().await;
        let ids = scan(&collections.book_titles, start, end, limit);
        Ok(ids
            .iter()
            .filter_map(|id| collections.books.get(id).cloned())
            .collect())
    }

    async fn authors_in_name_range(
        &self,
        start: &str,
        end: &str,
        limit: usize,
    ) -> Result<Vec<AuthorDoc>, StoreError> {
        let collections = self.inner.read().await;
        let ids = scan(&collections.author_names, start, end, limit);
        Ok(ids
            .iter()
            .filter_map(|id| collections.authors.get(id).cloned())
            .collect())
    }

    async fn review(&self, id: &str) -> Result<Option<ReviewDoc>, StoreError> {
        let collections = self.inner.read().await;
        Ok(collections.reviews.get(id).cloned())
    }

    async fn put_book(&self, book: BookDoc) -> Result<(), StoreError> {
        let mut collections = self.inner.write().await;
        if let Some(old) = collections.books.remove(&book.id) {
            unindex_book(&mut collections, &old);
        }
        index_book(&mut collections, &book);
        collections.books.insert(book.id.clone(), book);
        Ok(())
    }

    async fn put_author(&self, author: AuthorDoc) -> Result<(), StoreError> {
        let mut collections = self.inner.write().await;
        if let Some(old) = collections.authors.remove(&author.id) {
            index_remove(&mut collections.author_names, &old.searchable_name, &old.id);
        }
        index_insert(&mut collections.author_names, &author.searchable_name, &author.id);
        collections.authors.insert(author.id.clone(), author);
        Ok(())
    }

    async fn put_review(&self, review: ReviewDoc) -> Result<(), StoreError> {
        let mut collections = self.inner.write().await;
        collections.reviews.insert(review.id.clone(), review);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut collections = self.inner.write().await;
        *collections = Collections::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{normalize, prefix_range};

    fn book(id: &str, title: &str, author: &str, mood: Option<&str>, genres: &[&str]) -> BookDoc {
        BookDoc {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            cover: None,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            rating: None,
            year: None,
            page_count: None,
            description: None,
            mood: mood.map(|m| m.to_string()),
            searchable_title: normalize(title),
            searchable_author: normalize(author),
            searchable_genres: genres.iter().map(|g| normalize(g)).collect(),
            keywords: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_title_range_scan() {
        let store = MemoryStore::new();
        store
            .put_book(book("dune", "Dune", "Frank Herbert", None, &[]))
            .await
            .unwrap();
        store
            .put_book(book("dune-messiah", "Dune Messiah", "Frank Herbert", None, &[]))
            .await
            .unwrap();
        store
            .put_book(book("emma", "Emma", "Jane Austen", None, &[]))
            .await
            .unwrap();

        let (start, end) = prefix_range("dune");
        let hits = store.books_in_title_range(&start, &end, 5).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "dune");
        assert_eq!(hits[1].id, "dune-messiah");
    }

    #[tokio::test]
    async fn test_range_respects_limit() {
        let store = MemoryStore::new();
        for i in 0..8 {
            let id = format!("book-{i}");
            let title = format!("Saga Part {i}");
            store
                .put_book(book(&id, &title, "Somebody", None, &[]))
                .await
                .unwrap();
        }

        let (start, end) = prefix_range("saga");
        let hits = store.books_in_title_range(&start, &end, 5).await.unwrap();
        assert_eq!(hits.len(), 5);
    }

    #[tokio::test]
    async fn test_mood_range_scan() {
        let store = MemoryStore::new();
        store
            .put_book(book("a", "A", "X", Some("happy"), &[]))
            .await
            .unwrap();
        store
            .put_book(book("b", "B", "Y", Some("sad"), &[]))
            .await
            .unwrap();

        let (start, end) = prefix_range("happy");
        let hits = store.books_in_mood_range(&start, &end, 5).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
    }

    #[tokio::test]
    async fn test_genre_containment_is_exact() {
        let store = MemoryStore::new();
        store
            .put_book(book("f1", "F1", "X", None, &["Fantasy", "Epic"]))
            .await
            .unwrap();
        store
            .put_book(book("s1", "S1", "Y", None, &["Science Fiction"]))
            .await
            .unwrap();

        let hits = store.books_with_genre("fantasy", 5).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "f1");

        // Partial tokens do not match.
        assert!(store.books_with_genre("fanta", 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_put_replaces_and_reindexes() {
        let store = MemoryStore::new();
        store
            .put_book(book("x", "Old Title", "X", Some("happy"), &[]))
            .await
            .unwrap();
        store
            .put_book(book("x", "New Title", "X", None, &[]))
            .await
            .unwrap();

        let (start, end) = prefix_range("old");
        assert!(store
            .books_in_title_range(&start, &end, 5)
            .await
            .unwrap()
            .is_empty());

        let (start, end) = prefix_range("new");
        let hits = store.books_in_title_range(&start, &end, 5).await.unwrap();
        assert_eq!(hits.len(), 1);

        let (start, end) = prefix_range("happy");
        assert!(store
            .books_in_mood_range(&start, &end, 5)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(store.book_count().await, 1);
    }

    #[tokio::test]
    async fn test_author_name_range() {
        let store = MemoryStore::new();
        let author = AuthorDoc {
            id: "austen".to_string(),
            name: "Jane Austen".to_string(),
            bio: None,
            photo: None,
            book_count: Some(6),
            searchable_name: normalize("Jane Austen"),
            keywords: Vec::new(),
        };
        store.put_author(author).await.unwrap();

        let (start, end) = prefix_range("jane");
        let hits = store.authors_in_name_range(&start, &end, 3).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "austen");
    }

    #[tokio::test]
    async fn test_clear_empties_everything() {
        let store = MemoryStore::new();
        store
            .put_book(book("a", "A", "X", Some("happy"), &["Fantasy"]))
            .await
            .unwrap();
        store.clear().await.unwrap();

        assert_eq!(store.book_count().await, 0);
        let (start, end) = prefix_range("a");
        assert!(store
            .books_in_title_range(&start, &end, 5)
            .await
            .unwrap()
            .is_empty());
    }
}
