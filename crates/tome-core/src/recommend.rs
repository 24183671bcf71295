//! Recommendation sources: the term-driven picks appended by the
//! search cascade, typed suggestion strings, and the themed shelves of
//! the browse page.

use crate::catalog::{self, CatalogBook};
use crate::mood::{self, Mood};
use crate::search::SearchResult;
use crate::store::DocumentStore;
use crate::text;

/// Books to append when a search runs thin or the reader asks for
/// recommendations outright.
///
/// Mood terms get their curated picks. Terms naming a genre get that
/// genre's fallback list. Everything else gets the mixed picks, so the
/// call always produces something.
pub fn recommendations_for(term: &str) -> Vec<&'static CatalogBook> {
    if let Some(mood) = mood::classify(term) {
        return catalog::picks_for(mood).iter().collect();
    }

    let lowered = term.to_lowercase();
    for entry in catalog::GENRE_ALIASES {
        if entry.aliases.iter().any(|alias| lowered.contains(alias)) {
            return entry.books.iter().collect();
        }
    }

    catalog::picks_for(Mood::Mixed).iter().collect()
}

/// Suggestion strings offered alongside results while typing. The term
/// is kept as typed; any variant equal to it is dropped.
pub fn suggestions_for(term: &str) -> Vec<String> {
    if term.trim().is_empty() {
        return Vec::new();
    }
    [
        format!("{term} books"),
        format!("{term} authors"),
        format!("books about {term}"),
        format!("{term} series"),
    ]
    .into_iter()
    .filter(|s| s != term)
    .collect()
}

/// A themed browse shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    Happy,
    Romantic,
    Inspired,
    Relaxed,
    Intellectual,
    Adventurous,
}

/// Display copy and sourcing data for one shelf.
#[derive(Debug, Clone)]
pub struct ShelfProfile {
    pub shelf: Shelf,
    pub label: &'static str,
    pub blurb: &'static str,
    /// Display genres a store book may be tagged with to land on this
    /// shelf.
    pub genres: &'static [&'static str],
    /// Built-in picks shown when the store has nothing for the shelf.
    pub defaults: &'static [CatalogBook],
}

pub static SHELVES: &[ShelfProfile] = &[
    ShelfProfile {
        shelf: Shelf::Happy,
        label: "Happy & Light",
        blurb: "Light-hearted and uplifting books that will make you smile",
        genres: &["Humor", "Comedy", "Feel-Good", "Contemporary"],
        defaults: &[
            CatalogBook {
                id: "happy-shelf-1",
                title: "The Hitchhiker's Guide to the Galaxy",
                author: "Douglas Adams",
                cover: Some("https://images.unsplash.com/photo-1518744386442-2d48ac47a7eb?q=80"),
                genres: &["Humor", "Science Fiction", "Comedy"],
                rating: Some(4.5),
            },
            CatalogBook {
                id: "happy-shelf-2",
                title: "Where'd You Go, Bernadette",
                author: "Maria Semple",
                cover: Some("https://images.unsplash.com/photo-1518744386442-2d48ac47a7eb?q=80"),
                genres: &["Humor", "Contemporary", "Fiction"],
                rating: Some(4.2),
            },
        ],
    },
    ShelfProfile {
        shelf: Shelf::Romantic,
        label: "Romantic",
        blurb: "Stories of love, connection, and relationships",
        genres: &["Romance", "Love", "Relationships"],
        defaults: &[
            CatalogBook {
                id: "romantic-shelf-1",
                title: "Pride and Prejudice",
                author: "Jane Austen",
                cover: Some("https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80"),
                genres: &["Classic", "Romance", "Historical Fiction"],
                rating: Some(4.5),
            },
            CatalogBook {
                id: "romantic-shelf-2",
                title: "The Seven Husbands of Evelyn Hugo",
                author: "Taylor Jenkins Reid",
                cover: Some("https://images.unsplash.com/photo-1512820790803-83ca734da794?q=80"),
                genres: &["Historical Fiction", "Romance", "LGBT"],
                rating: Some(4.7),
            },
        ],
    },
    ShelfProfile {
        shelf: Shelf::Inspired,
        label: "Inspired",
        blurb: "Books that will motivate and inspire you to reach new heights",
        genres: &["Self-Help", "Motivation", "Personal Development", "Philosophy"],
        defaults: &[
            CatalogBook {
                id: "inspired-shelf-1",
                title: "Atomic Habits",
                author: "James Clear",
                cover: Some("https://images.unsplash.com/photo-1598618443855-232ee0f819f6?q=80"),
                genres: &["Self-Help", "Personal Development", "Psychology"],
                rating: Some(4.9),
            },
            CatalogBook {
                id: "inspired-shelf-2",
                title: "Thinking, Fast and Slow",
                author: "Daniel Kahneman",
                cover: Some("https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80"),
                genres: &["Psychology", "Economics", "Science"],
                rating: Some(4.6),
            },
        ],
    },
    ShelfProfile {
        shelf: Shelf::Relaxed,
        label: "Relaxed",
        blurb: "Calming reads perfect for unwinding and relaxation",
        genres: &["Comfort", "Cozy", "Nature", "Slow Living"],
        defaults: &[
            CatalogBook {
                id: "relaxed-shelf-1",
                title: "The House in the Cerulean Sea",
                author: "TJ Klune",
                cover: Some("https://images.unsplash.com/photo-1532012197267-da84d127e765?q=80"),
                genres: &["Fantasy", "LGBT", "Fiction"],
                rating: Some(4.6),
            },
            CatalogBook {
                id: "relaxed-shelf-2",
                title: "The Secret Garden",
                author: "Frances Hodgson Burnett",
                cover: Some("https://images.unsplash.com/photo-1533327325824-76bc4e62d560?q=80"),
                genres: &["Classic", "Children's Literature", "Fiction"],
                rating: Some(4.3),
            },
        ],
    },
    ShelfProfile {
        shelf: Shelf::Intellectual,
        label: "Intellectual",
        blurb: "Thought-provoking books that will challenge your mind",
        genres: &["Science", "History", "Philosophy", "Psychology"],
        defaults: &[
            CatalogBook {
                id: "intellectual-shelf-1",
                title: "Sapiens: A Brief History of Humankind",
                author: "Yuval Noah Harari",
                cover: Some("https://images.unsplash.com/photo-1592496001020-d31bd830651f?q=80"),
                genres: &["History", "Science", "Anthropology"],
                rating: Some(4.7),
            },
            CatalogBook {
                id: "intellectual-shelf-2",
                title: "Guns, Germs, and Steel",
                author: "Jared Diamond",
                cover: Some("https://images.unsplash.com/photo-1541963463532-d68292c34b19?q=80"),
                genres: &["History", "Science", "Anthropology"],
                rating: Some(4.3),
            },
        ],
    },
    ShelfProfile {
        shelf: Shelf::Adventurous,
        label: "Adventurous",
        blurb: "Books that will take you on an exciting journey",
        genres: &["Adventure", "Action", "Travel", "Fantasy"],
        defaults: &[
            CatalogBook {
                id: "adventurous-shelf-1",
                title: "The Hobbit",
                author: "J.R.R. Tolkien",
                cover: Some("https://images.unsplash.com/photo-1528458909336-e7a0adfed0a5?q=80"),
                genres: &["Fantasy", "Adventure", "Classic"],
                rating: Some(4.6),
            },
            CatalogBook {
                id: "adventurous-shelf-2",
                title: "Jurassic Park",
                author: "Michael Crichton",
                cover: Some("https://images.unsplash.com/photo-1601295528983-1bf522ee7e3d?q=80"),
                genres: &["Science Fiction", "Thriller", "Adventure"],
                rating: Some(4.2),
            },
        ],
    },
];

impl Shelf {
    pub fn label(self) -> &'static str {
        self.profile().label
    }

    pub fn blurb(self) -> &'static str {
        self.profile().blurb
    }

    pub fn profile(self) -> &'static ShelfProfile {
        let idx = match self {
            Shelf::Happy => 0,
            Shelf::Romantic => 1,
            Shelf::Inspired => 2,
            Shelf::Relaxed => 3,
            Shelf::Intellectual => 4,
            Shelf::Adventurous => 5,
        };
        &SHELVES[idx]
    }

    pub fn from_name(name: &str) -> Option<Shelf> {
        match name.to_lowercase().as_str() {
            "happy" => Some(Shelf::Happy),
            "romantic" => Some(Shelf::Romantic),
            "inspired" => Some(Shelf::Inspired),
            "relaxed" => Some(Shelf::Relaxed),
            "intellectual" => Some(Shelf::Intellectual),
            "adventurous" => Some(Shelf::Adventurous),
            _ => None,
        }
    }
}

/// Books for a shelf: store titles tagged with any of the shelf's
/// genres, with the built-in picks filling in when the store has
/// nothing for it.
pub async fn shelf_books(store: &dyn DocumentStore, shelf: Shelf) -> Vec<SearchResult> {
    let profile = shelf.profile();
    let mut results: Vec<SearchResult> = Vec::new();

    for genre in profile.genres {
        match store.books_with_genre(&text::normalize(genre), 4).await {
            Ok(books) => {
                for book in books {
                    let candidate = SearchResult::from(book);
                    if !results.iter().any(|r| r.id() == candidate.id()) {
                        results.push(candidate);
                    }
                }
            }
            Err(err) => tracing::warn!("shelf query failed: {err}"),
        }
    }

    results.truncate(8);
    if results.is_empty() {
        results.extend(profile.defaults.iter().map(SearchResult::from));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{BookDoc, MemoryStore};
    use crate::text::normalize;

    #[test]
    fn test_mood_terms_get_their_picks() {
        let picks = recommendations_for("something happy");
        assert_eq!(picks[0].id, "happy-pick-1");

        let picks = recommendations_for("scary mystery");
        assert_eq!(picks[0].id, "mystery-pick-1");
    }

    #[test]
    fn test_genre_terms_get_the_genre_list() {
        let picks = recommendations_for("best fantasy novels");
        assert_eq!(picks[0].id, "name-of-wind");

        let picks = recommendations_for("sci-fi to read on a plane");
        assert_eq!(picks[0].id, "dune");
    }

    #[test]
    fn test_generic_terms_get_the_mixed_picks() {
        let picks = recommendations_for("recommend anything");
        let ids: Vec<_> = picks.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["mood-mix-1", "mood-mix-2", "mood-mix-3"]);
    }

    #[test]
    fn test_suggestion_shapes() {
        assert_eq!(
            suggestions_for("dune"),
            vec![
                "dune books",
                "dune authors",
                "books about dune",
                "dune series"
            ]
        );
        assert!(suggestions_for("").is_empty());
        assert!(suggestions_for("   ").is_empty());
    }

    #[test]
    fn test_shelf_lookup() {
        let shelf = Shelf::from_name("HAPPY").unwrap();
        assert_eq!(shelf.label(), "Happy & Light");
        assert!(shelf.profile().genres.contains(&"Humor"));
        assert!(Shelf::from_name("gloomy").is_none());
    }

    #[test]
    fn test_every_shelf_has_defaults() {
        for profile in SHELVES {
            assert!(!profile.defaults.is_empty(), "{} defaults", profile.label);
        }
    }

    #[tokio::test]
    async fn test_shelf_falls_back_to_defaults() {
        let store = MemoryStore::new();
        let results = shelf_books(&store, Shelf::Happy).await;

        let ids: Vec<_> = results.iter().map(|r| r.id().to_string()).collect();
        assert_eq!(ids, vec!["happy-shelf-1", "happy-shelf-2"]);
    }

    #[tokio::test]
    async fn test_shelf_prefers_store_books() {
        let store = MemoryStore::new();
        let doc = BookDoc {
            id: "h1".to_string(),
            title: "Comedy Gold".to_string(),
            author: "A".to_string(),
            cover: None,
            genres: vec!["Humor".to_string()],
            rating: None,
            year: None,
            page_count: None,
            description: None,
            mood: None,
            searchable_title: normalize("Comedy Gold"),
            searchable_author: normalize("A"),
            searchable_genres: vec![normalize("Humor")],
            keywords: Vec::new(),
        };
        store.put_book(doc).await.unwrap();

        let results = shelf_books(&store, Shelf::Happy).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), "h1");
    }
}
