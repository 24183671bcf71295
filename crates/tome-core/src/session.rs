//! Debounced search sessions.
//!
//! A [`SearchSession`] sits between keystrokes and the engine. Each
//! submitted term restarts a trailing debounce window, and every
//! submission takes a fresh ticket from a shared counter. A search
//! whose ticket is no longer the newest is dropped instead of
//! published, so a slow query can never overwrite the results of a
//! later one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::search::{SearchEngine, SearchResult};

/// Trailing debounce applied to submitted terms.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// A published snapshot of the latest completed search.
#[derive(Debug, Clone, Default)]
pub struct SearchSnapshot {
    /// The term the results belong to.
    pub term: String,
    /// The results, capped by the engine.
    pub results: Vec<SearchResult>,
    /// Whether a newer submission is still in flight.
    pub searching: bool,
}

/// Debounced, cancellation-safe front end over a [`SearchEngine`].
pub struct SearchSession {
    engine: Arc<SearchEngine>,
    debounce: Duration,
    ticket: Arc<AtomicU64>,
    tx: watch::Sender<SearchSnapshot>,
    rx: watch::Receiver<SearchSnapshot>,
}

impl SearchSession {
    pub fn new(engine: Arc<SearchEngine>) -> Self {
        Self::with_debounce(engine, DEBOUNCE)
    }

    pub fn with_debounce(engine: Arc<SearchEngine>, debounce: Duration) -> Self {
        let (tx, rx) = watch::channel(SearchSnapshot::default());
        Self {
            engine,
            debounce,
            ticket: Arc::new(AtomicU64::new(0)),
            tx,
            rx,
        }
    }

    /// Subscribe to published snapshots.
    pub fn snapshots(&self) -> watch::Receiver<SearchSnapshot> {
        self.rx.clone()
    }

    /// Submit a term.
    ///
    /// Restarts the debounce window. A submission superseded before
    /// its window elapses never queries the engine; one superseded
    /// while its query runs completes but never publishes.
    pub fn submit(&self, term: &str) {
        let ticket = self.ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let term = term.to_string();
        let engine = Arc::clone(&self.engine);
        let newest = Arc::clone(&self.ticket);
        let tx = self.tx.clone();
        let debounce = self.debounce;

        self.tx.send_modify(|snap| snap.searching = true);

        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if newest.load(Ordering::SeqCst) != ticket {
                return;
            }

            let results = engine.search(&term).await;

            // A newer submission may have landed while the query ran.
            if newest.load(Ordering::SeqCst) != ticket {
                return;
            }

            let _ = tx.send(SearchSnapshot {
                term,
                results,
                searching: false,
            });
        });
    }

    /// The most recently published snapshot.
    pub fn current(&self) -> SearchSnapshot {
        self.rx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::recents::RecentSearches;
    use crate::store::{
        AuthorDoc, BookDoc, DocumentStore, MemoryStore, ReviewDoc, StoreError,
    };
    use async_trait::async_trait;

    /// Store double whose genre query stalls for terms starting with
    /// "slow", to force out-of-order completion.
    struct SlowStore;

    #[async_trait]
    impl DocumentStore for SlowStore {
        async fn books_in_mood_range(
            &self,
            _start: &str,
            _end: &str,
            _limit: usize,
        ) -> Result<Vec<BookDoc>, StoreError> {
            Ok(Vec::new())
        }

        async fn books_with_genre(
            &self,
            token: &str,
            _limit: usize,
        ) -> Result<Vec<BookDoc>, StoreError> {
            if token.starts_with("slow") {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            Ok(Vec::new())
        }

        async fn books_in_title_range(
            &self,
            _start: &str,
            _end: &str,
            _limit: usize,
        ) -> Result<Vec<BookDoc>, StoreError> {
            Ok(Vec::new())
        }

        async fn authors_in_name_range(
            &self,
            _start: &str,
            _end: &str,
            _limit: usize,
        ) -> Result<Vec<AuthorDoc>, StoreError> {
            Ok(Vec::new())
        }

        async fn review(&self, _id: &str) -> Result<Option<ReviewDoc>, StoreError> {
            Ok(None)
        }

        async fn put_book(&self, _book: BookDoc) -> Result<(), StoreError> {
            Ok(())
        }

        async fn put_author(&self, _author: AuthorDoc) -> Result<(), StoreError> {
            Ok(())
        }

        async fn put_review(&self, _review: ReviewDoc) -> Result<(), StoreError> {
            Ok(())
        }

        async fn clear(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn session_over(store: Arc<dyn DocumentStore>, debounce_ms: u64) -> SearchSession {
        let engine = Arc::new(SearchEngine::new(store, RecentSearches::new()));
        SearchSession::with_debounce(engine, Duration::from_millis(debounce_ms))
    }

    async fn wait_for_term(rx: &mut watch::Receiver<SearchSnapshot>, term: &str) -> SearchSnapshot {
        let deadline = Duration::from_secs(5);
        tokio::time::timeout(deadline, async {
            loop {
                {
                    let snap = rx.borrow();
                    if snap.term == term && !snap.searching {
                        return snap.clone();
                    }
                }
                rx.changed().await.unwrap();
            }
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_empty_term_publishes_popular() {
        let session = session_over(Arc::new(MemoryStore::new()), 10);
        let mut rx = session.snapshots();

        session.submit("");
        let snap = wait_for_term(&mut rx, "").await;

        assert_eq!(snap.results.len(), catalog::POPULAR_BOOKS.len());
    }

    #[tokio::test]
    async fn test_rapid_submissions_publish_only_the_newest() {
        let session = session_over(Arc::new(MemoryStore::new()), 50);
        let mut rx = session.snapshots();

        session.submit("hap");
        tokio::time::sleep(Duration::from_millis(10)).await;
        session.submit("happ");
        tokio::time::sleep(Duration::from_millis(10)).await;
        session.submit("happy");

        let snap = wait_for_term(&mut rx, "happy").await;
        assert!(!snap.results.is_empty());

        // Superseded submissions never reached the engine, so only the
        // final term was recorded.
        let recents = session.engine.recent_searches().await;
        assert_eq!(recents, vec!["happy"]);
    }

    #[tokio::test]
    async fn test_slow_search_cannot_overwrite_a_newer_one() {
        let session = session_over(Arc::new(SlowStore), 10);
        let mut rx = session.snapshots();

        session.submit("slowest");
        // Let the slow query get past its debounce and into the store.
        tokio::time::sleep(Duration::from_millis(50)).await;
        session.submit("fast");

        let snap = wait_for_term(&mut rx, "fast").await;
        assert_eq!(snap.term, "fast");

        // Give the stalled query time to finish, then confirm it was
        // dropped rather than published.
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(session.current().term, "fast");
    }

    #[tokio::test]
    async fn test_searching_flag_tracks_in_flight_state() {
        let session = session_over(Arc::new(MemoryStore::new()), 30);
        let mut rx = session.snapshots();

        session.submit("dune");
        assert!(session.current().searching);

        let snap = wait_for_term(&mut rx, "dune").await;
        assert!(!snap.searching);
    }
}
