//! Static book catalogs: the popular list, per-genre fallback lists,
//! curated picks per mood, and the genre-alias table. These back every
//! degraded path of the search cascade, so search always has something
//! to answer with even when the store yields nothing.

use crate::mood::Mood;

/// A catalog entry. Mirrors the display fields of a book result.
#[derive(Debug, Clone)]
pub struct CatalogBook {
    pub id: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub cover: Option<&'static str>,
    pub genres: &'static [&'static str],
    pub rating: Option<f64>,
}

/// Shown when the search term is empty.
pub static POPULAR_BOOKS: &[CatalogBook] = &[
    CatalogBook {
        id: "atomic-habits",
        title: "Atomic Habits",
        author: "James Clear",
        cover: Some("https://images.unsplash.com/photo-1598618443855-232ee0f819f6?q=80"),
        genres: &["Self-Help", "Personal Development", "Psychology"],
        rating: None,
    },
    CatalogBook {
        id: "midnight-library",
        title: "The Midnight Library",
        author: "Matt Haig",
        cover: Some("https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80"),
        genres: &["Fiction", "Fantasy", "Contemporary"],
        rating: None,
    },
    CatalogBook {
        id: "project-hail-mary",
        title: "Project Hail Mary",
        author: "Andy Weir",
        cover: Some("https://images.unsplash.com/photo-1532012197267-da84d127e765?q=80"),
        genres: &["Science Fiction", "Adventure", "Space"],
        rating: None,
    },
    CatalogBook {
        id: "klara-and-sun",
        title: "Klara and the Sun",
        author: "Kazuo Ishiguro",
        cover: Some("https://images.unsplash.com/photo-1541963463532-d68292c34b19?q=80"),
        genres: &["Science Fiction", "Literary Fiction"],
        rating: None,
    },
];

pub static CLASSIC_BOOKS: &[CatalogBook] = &[
    CatalogBook {
        id: "pride-and-prejudice",
        title: "Pride and Prejudice",
        author: "Jane Austen",
        cover: None,
        genres: &["Classic", "Romance", "Literary Fiction"],
        rating: None,
    },
    CatalogBook {
        id: "to-kill-mockingbird",
        title: "To Kill a Mockingbird",
        author: "Harper Lee",
        cover: None,
        genres: &["Classic", "Fiction", "Historical"],
        rating: None,
    },
    CatalogBook {
        id: "1984",
        title: "1984",
        author: "George Orwell",
        cover: None,
        genres: &["Classic", "Dystopian", "Science Fiction"],
        rating: None,
    },
];

pub static ROMANCE_BOOKS: &[CatalogBook] = &[
    CatalogBook {
        id: "it-ends-with-us",
        title: "It Ends with Us",
        author: "Colleen Hoover",
        cover: None,
        genres: &["Romance", "Contemporary", "Fiction"],
        rating: None,
    },
    CatalogBook {
        id: "normal-people",
        title: "Normal People",
        author: "Sally Rooney",
        cover: None,
        genres: &["Romance", "Contemporary", "Literary Fiction"],
        rating: None,
    },
];

pub static FANTASY_BOOKS: &[CatalogBook] = &[
    CatalogBook {
        id: "name-of-wind",
        title: "The Name of the Wind",
        author: "Patrick Rothfuss",
        cover: None,
        genres: &["Fantasy", "Adventure", "Epic"],
        rating: None,
    },
    CatalogBook {
        id: "way-of-kings",
        title: "The Way of Kings",
        author: "Brandon Sanderson",
        cover: None,
        genres: &["Fantasy", "Epic", "High Fantasy"],
        rating: None,
    },
];

pub static SCIENCE_FICTION_BOOKS: &[CatalogBook] = &[
    CatalogBook {
        id: "dune",
        title: "Dune",
        author: "Frank Herbert",
        cover: None,
        genres: &["Science Fiction", "Space Opera", "Adventure"],
        rating: None,
    },
    CatalogBook {
        id: "foundation",
        title: "Foundation",
        author: "Isaac Asimov",
        cover: None,
        genres: &["Science Fiction", "Classic", "Space"],
        rating: None,
    },
];

pub static MYSTERY_BOOKS: &[CatalogBook] = &[
    CatalogBook {
        id: "gone-girl",
        title: "Gone Girl",
        author: "Gillian Flynn",
        cover: None,
        genres: &["Mystery", "Thriller", "Suspense"],
        rating: None,
    },
    CatalogBook {
        id: "girl-with-dragon-tattoo",
        title: "The Girl with the Dragon Tattoo",
        author: "Stieg Larsson",
        cover: None,
        genres: &["Mystery", "Thriller", "Crime"],
        rating: None,
    },
];

pub static NON_FICTION_BOOKS: &[CatalogBook] = &[
    CatalogBook {
        id: "sapiens",
        title: "Sapiens: A Brief History of Humankind",
        author: "Yuval Noah Harari",
        cover: None,
        genres: &["Non-Fiction", "History", "Science"],
        rating: None,
    },
    CatalogBook {
        id: "becoming",
        title: "Becoming",
        author: "Michelle Obama",
        cover: None,
        genres: &["Non-Fiction", "Memoir", "Biography"],
        rating: None,
    },
];

static HAPPY_PICKS: &[CatalogBook] = &[
    CatalogBook {
        id: "happy-pick-1",
        title: "The House in the Cerulean Sea",
        author: "TJ Klune",
        cover: Some("https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80"),
        genres: &["Fantasy", "Feel-Good", "LGBT"],
        rating: Some(4.5),
    },
    CatalogBook {
        id: "happy-pick-2",
        title: "Eleanor Oliphant Is Completely Fine",
        author: "Gail Honeyman",
        cover: Some("https://images.unsplash.com/photo-1511367734837-f2956f0d8020?q=80"),
        genres: &["Contemporary", "Fiction", "Feel-Good"],
        rating: Some(4.3),
    },
    CatalogBook {
        id: "happy-pick-3",
        title: "Good Omens",
        author: "Terry Pratchett & Neil Gaiman",
        cover: Some("https://images.unsplash.com/photo-1531901599634-485ed3a85db3?q=80"),
        genres: &["Fantasy", "Humor", "Comedy"],
        rating: Some(4.3),
    },
];

static SAD_PICKS: &[CatalogBook] = &[
    CatalogBook {
        id: "sad-pick-1",
        title: "A Little Life",
        author: "Hanya Yanagihara",
        cover: Some("https://images.unsplash.com/photo-1543002588-bfa74002ed7e?q=80"),
        genres: &["Contemporary", "Fiction", "LGBT"],
        rating: Some(4.3),
    },
    CatalogBook {
        id: "sad-pick-2",
        title: "When Breath Becomes Air",
        author: "Paul Kalanithi",
        cover: Some("https://images.unsplash.com/photo-1633477189729-9290b3261d0a?q=80"),
        genres: &["Memoir", "Biography", "Medical"],
        rating: Some(4.4),
    },
    CatalogBook {
        id: "sad-pick-3",
        title: "It Ends with Us",
        author: "Colleen Hoover",
        cover: Some("https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80"),
        genres: &["Fiction", "Romance", "Contemporary"],
        rating: Some(4.1),
    },
];

static RELAXED_PICKS: &[CatalogBook] = &[
    CatalogBook {
        id: "relaxed-pick-1",
        title: "The Little Paris Bookshop",
        author: "Nina George",
        cover: Some("https://images.unsplash.com/photo-1585779034823-7e9ac8faec70?q=80"),
        genres: &["Fiction", "Romance", "Cultural"],
        rating: Some(3.9),
    },
    CatalogBook {
        id: "relaxed-pick-2",
        title: "Under the Tuscan Sun",
        author: "Frances Mayes",
        cover: Some("https://images.unsplash.com/photo-1490127252417-7c393f756e8e?q=80"),
        genres: &["Memoir", "Travel", "Italy"],
        rating: Some(3.8),
    },
    CatalogBook {
        id: "relaxed-pick-3",
        title: "The Alchemist",
        author: "Paulo Coelho",
        cover: Some("https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80"),
        genres: &["Fiction", "Philosophy", "Spirituality"],
        rating: Some(4.0),
    },
];

static INSPIRED_PICKS: &[CatalogBook] = &[
    CatalogBook {
        id: "inspired-pick-1",
        title: "Atomic Habits",
        author: "James Clear",
        cover: Some("https://images.unsplash.com/photo-1598618443855-232ee0f819f6?q=80"),
        genres: &["Self-Help", "Personal Development", "Psychology"],
        rating: Some(4.4),
    },
    CatalogBook {
        id: "inspired-pick-2",
        title: "Becoming",
        author: "Michelle Obama",
        cover: Some("https://images.unsplash.com/photo-1603415526960-f7e0328c63b1?q=80"),
        genres: &["Memoir", "Biography", "Inspirational"],
        rating: Some(4.6),
    },
    CatalogBook {
        id: "inspired-pick-3",
        title: "Can't Hurt Me",
        author: "David Goggins",
        cover: Some("https://images.unsplash.com/photo-1574279606130-09958dc756f7?q=80"),
        genres: &["Memoir", "Self-Help", "Motivation"],
        rating: Some(4.5),
    },
];

static ADVENTUROUS_PICKS: &[CatalogBook] = &[
    CatalogBook {
        id: "adventure-pick-1",
        title: "The Lost City of Z",
        author: "David Grann",
        cover: Some("https://images.unsplash.com/photo-1518020382113-a7e8fc38eac9?q=80"),
        genres: &["Adventure", "Non-Fiction", "Exploration"],
        rating: Some(4.0),
    },
    CatalogBook {
        id: "adventure-pick-2",
        title: "Into Thin Air",
        author: "Jon Krakauer",
        cover: Some("https://images.unsplash.com/photo-1551632811-561732d1e306?q=80"),
        genres: &["Adventure", "Non-Fiction", "Mountaineering"],
        rating: Some(4.2),
    },
    CatalogBook {
        id: "adventure-pick-3",
        title: "The Call of the Wild",
        author: "Jack London",
        cover: Some("https://images.unsplash.com/photo-1605973029521-8154da591bd7?q=80"),
        genres: &["Adventure", "Classic", "Animals"],
        rating: Some(4.0),
    },
];

static ROMANTIC_PICKS: &[CatalogBook] = &[
    CatalogBook {
        id: "romance-pick-1",
        title: "The Love Hypothesis",
        author: "Ali Hazelwood",
        cover: Some("https://images.unsplash.com/photo-1551654441-f0e34c313b91?q=80"),
        genres: &["Romance", "Contemporary", "Fiction"],
        rating: Some(4.2),
    },
    CatalogBook {
        id: "romance-pick-2",
        title: "Red, White & Royal Blue",
        author: "Casey McQuiston",
        cover: Some("https://images.unsplash.com/photo-1517673132405-a56a62b18caf?q=80"),
        genres: &["Romance", "LGBT", "Contemporary"],
        rating: Some(4.2),
    },
    CatalogBook {
        id: "romance-pick-3",
        title: "Pride and Prejudice",
        author: "Jane Austen",
        cover: Some("https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80"),
        genres: &["Classic", "Romance", "Literary Fiction"],
        rating: Some(4.3),
    },
];

static MYSTERIOUS_PICKS: &[CatalogBook] = &[
    CatalogBook {
        id: "mystery-pick-1",
        title: "The Silent Patient",
        author: "Alex Michaelides",
        cover: Some("https://images.unsplash.com/photo-1528458909336-e7a0adfed0a5?q=80"),
        genres: &["Mystery", "Thriller", "Psychological"],
        rating: Some(4.2),
    },
    CatalogBook {
        id: "mystery-pick-2",
        title: "Gone Girl",
        author: "Gillian Flynn",
        cover: Some("https://images.unsplash.com/photo-1518742772913-b2017cf7fc32?q=80"),
        genres: &["Mystery", "Thriller", "Suspense"],
        rating: Some(4.1),
    },
    CatalogBook {
        id: "mystery-pick-3",
        title: "The Thursday Murder Club",
        author: "Richard Osman",
        cover: Some("https://images.unsplash.com/photo-1590283603385-c1c9cfd24fd3?q=80"),
        genres: &["Mystery", "Humor", "Crime"],
        rating: Some(4.0),
    },
];

static MIXED_PICKS: &[CatalogBook] = &[
    CatalogBook {
        id: "mood-mix-1",
        title: "The House in the Cerulean Sea",
        author: "TJ Klune",
        cover: Some("https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80"),
        genres: &["Fantasy", "Feel-Good", "LGBT"],
        rating: Some(4.5),
    },
    CatalogBook {
        id: "mood-mix-2",
        title: "A Little Life",
        author: "Hanya Yanagihara",
        cover: Some("https://images.unsplash.com/photo-1543002588-bfa74002ed7e?q=80"),
        genres: &["Contemporary", "Fiction", "LGBT"],
        rating: Some(4.3),
    },
    CatalogBook {
        id: "mood-mix-3",
        title: "Atomic Habits",
        author: "James Clear",
        cover: Some("https://images.unsplash.com/photo-1598618443855-232ee0f819f6?q=80"),
        genres: &["Self-Help", "Personal Development", "Psychology"],
        rating: Some(4.4),
    },
];

/// Curated picks for a mood.
pub fn picks_for(mood: Mood) -> &'static [CatalogBook] {
    match mood {
        Mood::Happy => HAPPY_PICKS,
        Mood::Sad => SAD_PICKS,
        Mood::Relaxed => RELAXED_PICKS,
        Mood::Inspired => INSPIRED_PICKS,
        Mood::Adventurous => ADVENTUROUS_PICKS,
        Mood::Romantic => ROMANTIC_PICKS,
        Mood::Mysterious => MYSTERIOUS_PICKS,
        Mood::Mixed => MIXED_PICKS,
    }
}

/// A genre label, its accepted aliases, and the fallback list it maps
/// to.
#[derive(Debug, Clone)]
pub struct GenreAlias {
    pub aliases: &'static [&'static str],
    pub books: &'static [CatalogBook],
}

/// Alias table consulted when a search produced nothing at all. Terms
/// are compared lowercased, whole-string.
pub static GENRE_ALIASES: &[GenreAlias] = &[
    GenreAlias { aliases: &["classic", "classics"], books: CLASSIC_BOOKS },
    GenreAlias { aliases: &["romance", "romantic", "love"], books: ROMANCE_BOOKS },
    GenreAlias { aliases: &["fantasy", "magic"], books: FANTASY_BOOKS },
    GenreAlias { aliases: &["science fiction", "sci-fi", "scifi"], books: SCIENCE_FICTION_BOOKS },
    GenreAlias { aliases: &["mystery", "thriller", "detective"], books: MYSTERY_BOOKS },
    GenreAlias { aliases: &["non-fiction", "nonfiction", "factual"], books: NON_FICTION_BOOKS },
];

/// Resolve a lowercased term against the alias table. "all" and
/// "books" yield the cross-catalog [`mixed_sample`].
pub fn books_for_alias(term: &str) -> Option<Vec<&'static CatalogBook>> {
    for entry in GENRE_ALIASES {
        if entry.aliases.contains(&term) {
            return Some(entry.books.iter().collect());
        }
    }
    if term == "all" || term == "books" {
        return Some(mixed_sample());
    }
    None
}

/// The popular books plus the first entry of every genre catalog,
/// capped at 10.
pub fn mixed_sample() -> Vec<&'static CatalogBook> {
    let mut sample: Vec<&'static CatalogBook> = POPULAR_BOOKS.iter().collect();
    for list in [
        CLASSIC_BOOKS,
        ROMANCE_BOOKS,
        FANTASY_BOOKS,
        SCIENCE_FICTION_BOOKS,
        MYSTERY_BOOKS,
        NON_FICTION_BOOKS,
    ] {
        if let Some(first) = list.first() {
            sample.push(first);
        }
    }
    sample.truncate(10);
    sample
}
