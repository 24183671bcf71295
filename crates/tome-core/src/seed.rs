//! Demo fixtures and write-time document preparation.
//!
//! Preparation is where indexing happens: searchable fields are
//! normalized and keyword expansions attached before a document ever
//! reaches the store, so queries never transform stored values at read
//! time. Moods are normalized here too, which keeps them comparable
//! with normalized search terms.

use crate::error::TomeResult;
use crate::store::{AuthorDoc, BookDoc, DocumentStore, ReviewDoc};
use crate::text::{keywords, normalize};

/// Document-level cap on attached keywords.
const MAX_DOC_KEYWORDS: usize = 100;

/// How many description keywords a book may contribute.
const MAX_DESCRIPTION_KEYWORDS: usize = 20;

/// What a [`seed`] call wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCounts {
    pub books: usize,
    pub authors: usize,
    pub reviews: usize,
}

/// Attach searchable fields and weighted keywords to a book. Title and
/// author keywords carry a namespace prefix so they rank separably;
/// description keywords are capped to keep the noisy tail out.
pub fn prepare_book(mut book: BookDoc) -> BookDoc {
    book.searchable_title = normalize(&book.title);
    book.searchable_author = normalize(&book.author);
    book.searchable_genres = book.genres.iter().map(|g| normalize(g)).collect();
    book.mood = book
        .mood
        .as_deref()
        .map(normalize)
        .filter(|m| !m.is_empty());

    let mut kw: Vec<String> = Vec::new();
    kw.extend(keywords(&book.title).into_iter().map(|k| format!("title_{k}")));
    kw.extend(keywords(&book.author).into_iter().map(|k| format!("author_{k}")));
    let description = book.description.as_deref().unwrap_or("");
    kw.extend(keywords(description).into_iter().take(MAX_DESCRIPTION_KEYWORDS));
    kw.extend(book.searchable_genres.iter().map(|g| format!("genre_{g}")));
    kw.truncate(MAX_DOC_KEYWORDS);
    book.keywords = kw;

    book
}

/// Attach the searchable name and name/bio keywords to an author.
pub fn prepare_author(mut author: AuthorDoc) -> AuthorDoc {
    author.searchable_name = normalize(&author.name);

    let mut kw = keywords(&author.name);
    let bio = author.bio.as_deref().unwrap_or("");
    kw.extend(keywords(bio));
    kw.truncate(MAX_DOC_KEYWORDS);
    author.keywords = kw;

    author
}

/// Attach the searchable book title and content keywords to a review.
pub fn prepare_review(mut review: ReviewDoc) -> ReviewDoc {
    review.searchable_book_title = normalize(&review.book_title);

    let content = review.content.as_deref().unwrap_or("");
    let mut kw = keywords(content);
    kw.extend(keywords(&review.book_title));
    kw.truncate(MAX_DOC_KEYWORDS);
    review.keywords = kw;

    review
}

/// Load the demo catalog into a store.
pub async fn seed(store: &dyn DocumentStore) -> TomeResult<SeedCounts> {
    for raw in BOOKS {
        store.put_book(prepare_book(raw.doc())).await?;
    }
    for raw in AUTHORS {
        store.put_author(prepare_author(raw.doc())).await?;
    }
    for raw in REVIEWS {
        store.put_review(prepare_review(raw.doc())).await?;
    }

    Ok(SeedCounts {
        books: BOOKS.len(),
        authors: AUTHORS.len(),
        reviews: REVIEWS.len(),
    })
}

/// Drop everything the store holds.
pub async fn clear(store: &dyn DocumentStore) -> TomeResult<()> {
    store.clear().await?;
    Ok(())
}

struct RawBook {
    id: &'static str,
    title: &'static str,
    author: &'static str,
    cover: &'static str,
    description: &'static str,
    genres: &'static [&'static str],
    rating: f64,
    year: i32,
    mood: &'static str,
    page_count: u32,
}

impl RawBook {
    fn doc(&self) -> BookDoc {
        BookDoc {
            id: self.id.to_string(),
            title: self.title.to_string(),
            author: self.author.to_string(),
            cover: Some(self.cover.to_string()),
            genres: self.genres.iter().map(|g| g.to_string()).collect(),
            rating: Some(self.rating),
            year: Some(self.year),
            page_count: Some(self.page_count),
            description: Some(self.description.to_string()),
            mood: Some(self.mood.to_string()),
            searchable_title: String::new(),
            searchable_author: String::new(),
            searchable_genres: Vec::new(),
            keywords: Vec::new(),
        }
    }
}

struct RawAuthor {
    id: &'static str,
    name: &'static str,
    bio: &'static str,
    book_count: u32,
    photo: &'static str,
}

impl RawAuthor {
    fn doc(&self) -> AuthorDoc {
        AuthorDoc {
            id: self.id.to_string(),
            name: self.name.to_string(),
            bio: Some(self.bio.to_string()),
            photo: Some(self.photo.to_string()),
            book_count: Some(self.book_count),
            searchable_name: String::new(),
            keywords: Vec::new(),
        }
    }
}

struct RawReview {
    id: &'static str,
    title: &'static str,
    book_id: &'static str,
    book_title: &'static str,
    username: &'static str,
    content: &'static str,
    rating: f64,
    date: &'static str,
}

impl RawReview {
    fn doc(&self) -> ReviewDoc {
        ReviewDoc {
            id: self.id.to_string(),
            title: self.title.to_string(),
            book_id: self.book_id.to_string(),
            book_title: self.book_title.to_string(),
            username: self.username.to_string(),
            content: Some(self.content.to_string()),
            rating: Some(self.rating),
            date: Some(self.date.to_string()),
            likes: 0,
            liked_by: Vec::new(),
            searchable_book_title: String::new(),
            keywords: Vec::new(),
        }
    }
}

static BOOKS: &[RawBook] = &[
    RawBook {
        id: "the-house-in-the-cerulean-sea",
        title: "The House in the Cerulean Sea",
        author: "TJ Klune",
        cover: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80",
        description: "A magical story about finding family in the most unexpected places.",
        genres: &["Fantasy", "LGBT", "Feel-Good", "Happy"],
        rating: 4.5,
        year: 2020,
        mood: "Happy",
        page_count: 396,
    },
    RawBook {
        id: "good-omens",
        title: "Good Omens",
        author: "Terry Pratchett & Neil Gaiman",
        cover: "https://images.unsplash.com/photo-1531901599634-485ed3a85db3?q=80",
        description: "The humorous tale of an angel and demon trying to prevent the apocalypse.",
        genres: &["Fantasy", "Humor", "Comedy", "Happy"],
        rating: 4.3,
        year: 1990,
        mood: "Happy",
        page_count: 288,
    },
    RawBook {
        id: "a-little-life",
        title: "A Little Life",
        author: "Hanya Yanagihara",
        cover: "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?q=80",
        description: "A heart-wrenching story of trauma and friendship spanning decades.",
        genres: &["Contemporary", "Literary Fiction", "LGBT", "Sad"],
        rating: 4.3,
        year: 2015,
        mood: "Sad",
        page_count: 720,
    },
    RawBook {
        id: "when-breath-becomes-air",
        title: "When Breath Becomes Air",
        author: "Paul Kalanithi",
        cover: "https://images.unsplash.com/photo-1633477189729-9290b3261d0a?q=80",
        description: "A memoir by a neurosurgeon diagnosed with terminal cancer.",
        genres: &["Memoir", "Biography", "Medical", "Sad"],
        rating: 4.4,
        year: 2016,
        mood: "Sad",
        page_count: 228,
    },
    RawBook {
        id: "the-lost-city-of-z",
        title: "The Lost City of Z",
        author: "David Grann",
        cover: "https://images.unsplash.com/photo-1518020382113-a7e8fc38eac9?q=80",
        description: "The true story of Percy Fawcett's search for a lost city in the Amazon.",
        genres: &["Adventure", "Non-Fiction", "Exploration", "History"],
        rating: 4.0,
        year: 2009,
        mood: "Adventurous",
        page_count: 352,
    },
    RawBook {
        id: "into-the-wild",
        title: "Into the Wild",
        author: "Jon Krakauer",
        cover: "https://images.unsplash.com/photo-1473773508845-188df298d2d1?q=80",
        description: "The story of Christopher McCandless's journey into the Alaskan wilderness.",
        genres: &["Adventure", "Biography", "Travel", "Survival"],
        rating: 4.0,
        year: 1996,
        mood: "Adventurous",
        page_count: 224,
    },
    RawBook {
        id: "pride-and-prejudice",
        title: "Pride and Prejudice",
        author: "Jane Austen",
        cover: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80",
        description: "A classic novel about manners, upbringing, morality, education, and marriage.",
        genres: &["Classic", "Romance", "Literary Fiction"],
        rating: 4.3,
        year: 1813,
        mood: "Romantic",
        page_count: 432,
    },
    RawBook {
        id: "to-kill-a-mockingbird",
        title: "To Kill a Mockingbird",
        author: "Harper Lee",
        cover: "https://images.unsplash.com/photo-1603162617030-b91671d2173b?q=80",
        description: "A novel about racial injustice and the loss of innocence in the American South.",
        genres: &["Classic", "Historical Fiction", "Coming of Age"],
        rating: 4.3,
        year: 1960,
        mood: "Reflective",
        page_count: 281,
    },
    RawBook {
        id: "the-love-hypothesis",
        title: "The Love Hypothesis",
        author: "Ali Hazelwood",
        cover: "https://images.unsplash.com/photo-1551654441-f0e34c313b91?q=80",
        description: "A fake dating arrangement between academics turns into something real.",
        genres: &["Romance", "Contemporary", "Fiction", "Humor"],
        rating: 4.2,
        year: 2021,
        mood: "Romantic",
        page_count: 384,
    },
    RawBook {
        id: "red-white-and-royal-blue",
        title: "Red, White & Royal Blue",
        author: "Casey McQuiston",
        cover: "https://images.unsplash.com/photo-1517673132405-a56a62b18caf?q=80",
        description: "Romance between the First Son of the US and a British prince.",
        genres: &["Romance", "LGBT", "Contemporary", "Humor"],
        rating: 4.2,
        year: 2019,
        mood: "Romantic",
        page_count: 432,
    },
    RawBook {
        id: "atomic-habits",
        title: "Atomic Habits",
        author: "James Clear",
        cover: "https://images.unsplash.com/photo-1598618443855-232ee0f819f6?q=80",
        description: "Proven strategies to build good habits and break bad ones.",
        genres: &["Self-Help", "Personal Development", "Psychology", "Inspirational"],
        rating: 4.4,
        year: 2018,
        mood: "Inspired",
        page_count: 320,
    },
    RawBook {
        id: "becoming",
        title: "Becoming",
        author: "Michelle Obama",
        cover: "https://images.unsplash.com/photo-1603415526960-f7e0328c63b1?q=80",
        description: "The memoir of the former First Lady of the United States.",
        genres: &["Memoir", "Biography", "Autobiography", "Inspirational"],
        rating: 4.6,
        year: 2018,
        mood: "Inspired",
        page_count: 448,
    },
    RawBook {
        id: "gone-girl",
        title: "Gone Girl",
        author: "Gillian Flynn",
        cover: "https://images.unsplash.com/photo-1518742772913-b2017cf7fc32?q=80",
        description: "A psychological thriller about a woman who disappears on her wedding anniversary.",
        genres: &["Thriller", "Mystery", "Suspense", "Crime"],
        rating: 4.1,
        year: 2012,
        mood: "Tense",
        page_count: 432,
    },
    RawBook {
        id: "the-silent-patient",
        title: "The Silent Patient",
        author: "Alex Michaelides",
        cover: "https://images.unsplash.com/photo-1528458909336-e7a0adfed0a5?q=80",
        description: "A woman shoots her husband and then refuses to speak.",
        genres: &["Thriller", "Mystery", "Psychological", "Suspense"],
        rating: 4.2,
        year: 2019,
        mood: "Mysterious",
        page_count: 336,
    },
    RawBook {
        id: "project-hail-mary",
        title: "Project Hail Mary",
        author: "Andy Weir",
        cover: "https://images.unsplash.com/photo-1532012197267-da84d127e765?q=80",
        description: "A lone astronaut must save Earth from an extinction-level threat.",
        genres: &["Science Fiction", "Space", "Adventure"],
        rating: 4.5,
        year: 2021,
        mood: "Exciting",
        page_count: 496,
    },
    RawBook {
        id: "dune",
        title: "Dune",
        author: "Frank Herbert",
        cover: "https://images.unsplash.com/photo-1632751328992-dd6af59052a3?q=80",
        description: "The story of a young man's journey to protect the most vital substance in the galaxy.",
        genres: &["Science Fiction", "Space Opera", "Classic"],
        rating: 4.2,
        year: 1965,
        mood: "Epic",
        page_count: 412,
    },
];

static AUTHORS: &[RawAuthor] = &[
    RawAuthor {
        id: "tj-klune",
        name: "TJ Klune",
        bio: "Lambda Literary Award-winning author known for fantasy and romance novels.",
        book_count: 15,
        photo: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?q=80",
    },
    RawAuthor {
        id: "hanya-yanagihara",
        name: "Hanya Yanagihara",
        bio: "American novelist and editor known for \"A Little Life\" and \"The People in the Trees\".",
        book_count: 3,
        photo: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?q=80",
    },
    RawAuthor {
        id: "david-grann",
        name: "David Grann",
        bio: "American journalist and author who writes about true crime and history.",
        book_count: 4,
        photo: "https://images.unsplash.com/photo-1500048993953-d23a436266cf?q=80",
    },
    RawAuthor {
        id: "jane-austen",
        name: "Jane Austen",
        bio: "English novelist known for her six major novels including \"Pride and Prejudice\".",
        book_count: 6,
        photo: "https://images.unsplash.com/photo-1508084133331-25be8f0a7b6e?q=80",
    },
    RawAuthor {
        id: "casey-mcquiston",
        name: "Casey McQuiston",
        bio: "New York Times bestselling author of LGBTQ+ romantic comedies.",
        book_count: 3,
        photo: "https://images.unsplash.com/photo-1611432579699-484f7990b127?q=80",
    },
    RawAuthor {
        id: "james-clear",
        name: "James Clear",
        bio: "Author and speaker focused on habits, decision-making, and continuous improvement.",
        book_count: 1,
        photo: "https://images.unsplash.com/photo-1531427186611-ecfd6d936c79?q=80",
    },
    RawAuthor {
        id: "andy-weir",
        name: "Andy Weir",
        bio: "American science fiction author known for technically accurate novels like \"The Martian\".",
        book_count: 3,
        photo: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80",
    },
];

static REVIEWS: &[RawReview] = &[
    RawReview {
        id: "review-cerulean-1",
        title: "A heartwarming tale that changed my perspective",
        book_id: "the-house-in-the-cerulean-sea",
        book_title: "The House in the Cerulean Sea",
        username: "BookLover42",
        content: "This book was exactly what I needed during these difficult times. It's like a warm hug in book form.",
        rating: 5.0,
        date: "2023-02-15",
    },
    RawReview {
        id: "review-little-life-1",
        title: "Emotionally devastating but beautifully written",
        book_id: "a-little-life",
        book_title: "A Little Life",
        username: "LiteraryReader",
        content: "This book broke me. It's not an easy read, but it's an important one. The character development is unmatched.",
        rating: 5.0,
        date: "2022-11-03",
    },
    RawReview {
        id: "review-hail-mary-1",
        title: "The best sci-fi novel I've read in years",
        book_id: "project-hail-mary",
        book_title: "Project Hail Mary",
        username: "SciFiEnthusiast",
        content: "Andy Weir does it again! The perfect blend of science, humor, and heart-pounding adventure.",
        rating: 5.0,
        date: "2023-07-19",
    },
    RawReview {
        id: "review-love-hypothesis-1",
        title: "Cute romance with great representation",
        book_id: "the-love-hypothesis",
        book_title: "The Love Hypothesis",
        username: "RomanceReader",
        content: "As someone in STEM, I appreciated the academic setting and the realistic portrayal of women in science.",
        rating: 4.0,
        date: "2023-05-22",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_prepare_book_attaches_search_fields() {
        let raw = &BOOKS[0];
        let doc = prepare_book(raw.doc());

        assert_eq!(doc.searchable_title, "the house in the cerulean sea");
        assert_eq!(doc.searchable_author, "tj klune");
        assert_eq!(doc.mood.as_deref(), Some("happy"));
        assert!(doc.searchable_genres.contains(&"feel good".to_string()));

        assert!(doc.keywords.iter().any(|k| k == "title_cerulean"));
        assert!(doc.keywords.iter().any(|k| k == "author_klune"));
        assert!(doc.keywords.iter().any(|k| k == "genre_fantasy"));
        assert!(doc.keywords.len() <= MAX_DOC_KEYWORDS);
    }

    #[test]
    fn test_prepare_author_and_review() {
        let author = prepare_author(AUTHORS[3].doc());
        assert_eq!(author.searchable_name, "jane austen");
        assert!(author.keywords.iter().any(|k| k == "austen"));

        let review = prepare_review(REVIEWS[0].doc());
        assert_eq!(
            review.searchable_book_title,
            "the house in the cerulean sea"
        );
        assert!(review.keywords.iter().any(|k| k == "warm"));
    }

    #[test]
    fn test_prepare_book_without_mood() {
        let mut doc = BOOKS[0].doc();
        doc.mood = None;
        assert_eq!(prepare_book(doc).mood, None);
    }

    #[tokio::test]
    async fn test_seed_and_clear() {
        let store = MemoryStore::new();

        let counts = seed(&store).await.unwrap();
        assert_eq!(
            counts,
            SeedCounts {
                books: 16,
                authors: 7,
                reviews: 4
            }
        );

        let happy = store
            .books_in_mood_range("happy", "happy\u{f8ff}", 5)
            .await
            .unwrap();
        assert_eq!(happy.len(), 2);

        clear(&store).await.unwrap();
        let classics = store.books_with_genre("classic", 5).await.unwrap();
        assert!(classics.is_empty());
    }
}
