pub mod catalog;
pub mod config;
pub mod error;
pub mod mood;
pub mod recents;
pub mod recommend;
pub mod reviews;
pub mod search;
pub mod seed;
pub mod session;
pub mod store;
pub mod text;

pub use config::TomeConfig;
pub use error::{TomeError, TomeResult};
pub use mood::Mood;
pub use recents::RecentSearches;
pub use recommend::Shelf;
pub use search::{ResultKind, SearchEngine, SearchResult};
pub use session::{SearchSession, SearchSnapshot};
pub use store::{DocumentStore, MemoryStore};
