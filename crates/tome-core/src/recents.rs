//! Recent-search history.
//!
//! A small most-recent-first list of prior search terms, persisted as
//! a JSON array so it survives restarts. Pushing a term that is
//! already present moves it to the front rather than duplicating it.
//! Clearing drops the persisted file entirely.

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

/// Maximum number of remembered search terms.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Bounded, persisted list of recent search terms.
#[derive(Debug)]
pub struct RecentSearches {
    terms: VecDeque<String>,
    data_path: Option<PathBuf>,
}

impl RecentSearches {
    /// An empty in-memory list with no persistence.
    pub fn new() -> Self {
        Self {
            terms: VecDeque::with_capacity(MAX_RECENT_SEARCHES),
            data_path: None,
        }
    }

    /// Load from the default location, or start empty if there is
    /// nothing (or nothing readable) there.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => Self::new(),
        }
    }

    /// Load from an explicit file path, which also becomes the
    /// write-through target.
    pub fn load_from(path: PathBuf) -> Self {
        let mut terms: VecDeque<String> = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => VecDeque::new(),
        };
        terms.truncate(MAX_RECENT_SEARCHES);
        Self {
            terms,
            data_path: Some(path),
        }
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tome").join("recent_searches.json"))
    }

    /// Record a search term at the front of the list.
    ///
    /// The term is trimmed first; empty terms are ignored. An existing
    /// entry moves to the front instead of duplicating. Writes through
    /// to disk on every change.
    pub fn push(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }

        // Remove if already present (move to front)
        self.terms.retain(|t| t != term);
        self.terms.push_front(term.to_string());
        self.terms.truncate(MAX_RECENT_SEARCHES);

        self.save();
    }

    /// Forget every term and delete the persisted file.
    pub fn clear(&mut self) {
        self.terms.clear();
        if let Some(path) = &self.data_path {
            let _ = fs::remove_file(path);
        }
    }

    /// All terms, most recent first.
    pub fn all(&self) -> Vec<&str> {
        self.terms.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn save(&self) {
        let Some(path) = &self.data_path else {
            return;
        };

        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        match serde_json::to_string_pretty(&self.terms) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    tracing::warn!("failed to persist recent searches: {err}");
                }
            }
            Err(err) => tracing::warn!("failed to encode recent searches: {err}"),
        }
    }
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::new()
    }
}
