//! Tome command line.
//!
//! A thin front end over the search core: seeds the demo catalog into
//! the in-memory store, then runs searches, shelves, and suggestions
//! against it.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tome_core::recents::RecentSearches;
use tome_core::recommend::{self, Shelf, SHELVES};
use tome_core::reviews;
use tome_core::search::{ResultKind, SearchEngine, SearchResult};
use tome_core::seed;
use tome_core::session::SearchSession;
use tome_core::store::MemoryStore;
use tome_core::TomeConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tome=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // Load configuration
    let config = TomeConfig::load();

    // Seed the demo catalog
    let store = Arc::new(MemoryStore::new());
    let counts = seed::seed(store.as_ref()).await?;
    tracing::info!(
        "seeded demo catalog: {} books, {} authors, {} reviews",
        counts.books,
        counts.authors,
        counts.reviews
    );

    let engine = Arc::new(
        SearchEngine::new(store.clone(), RecentSearches::load())
            .with_max_results(config.search.max_results),
    );

    match args[0].as_str() {
        "search" => {
            let term = args[1..].join(" ");
            let results = engine.search(&term).await;
            print_results(&results);
        }
        "live" => {
            run_session(engine, &config)?;
        }
        "shelf" => match args.get(1) {
            Some(name) => match Shelf::from_name(name) {
                Some(shelf) => {
                    println!("{}: {}", shelf.label(), shelf.blurb());
                    let books = recommend::shelf_books(store.as_ref(), shelf).await;
                    print_results(&books);
                }
                None => {
                    eprintln!("Unknown shelf: {name}");
                    std::process::exit(2);
                }
            },
            None => {
                for profile in SHELVES {
                    println!("{:14} {}", profile.label, profile.blurb);
                }
            }
        },
        "suggest" => {
            let term = args[1..].join(" ");
            for suggestion in recommend::suggestions_for(&term) {
                println!("{suggestion}");
            }
        }
        "recents" => {
            for term in engine.recent_searches().await {
                println!("{term}");
            }
        }
        "clear-recents" => {
            engine.clear_recent_searches().await;
            println!("Cleared recent searches.");
        }
        "like" => match args.get(1) {
            Some(review_id) => {
                let user = args.get(2).map(String::as_str);
                match reviews::toggle_like(store.as_ref(), user, review_id).await {
                    Ok(status) => {
                        let verb = if status.liked { "Liked" } else { "Unliked" };
                        println!("{verb} {review_id} ({} likes)", status.likes);
                    }
                    Err(e) => {
                        eprintln!("{e}");
                        std::process::exit(1);
                    }
                }
            }
            None => {
                eprintln!("Usage: tome like <review-id> [username]");
                std::process::exit(2);
            }
        },
        other => {
            eprintln!("Unknown command: {other}");
            print_help();
            std::process::exit(2);
        }
    }

    Ok(())
}

fn print_help() {
    println!("Tome - Book discovery from the command line");
    println!();
    println!("Usage: tome <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  search <term>...        Run one search against the demo catalog");
    println!("  live                    Interactive debounced search session");
    println!("  shelf [name]            Show a themed shelf, or list the shelves");
    println!("  suggest <term>...       Show typed-ahead suggestion strings");
    println!("  recents                 List recent search terms");
    println!("  clear-recents           Forget recent search terms");
    println!("  like <review> [user]    Toggle a like on a demo review");
    println!("  --help, -h              Show this help message");
}

fn print_results(results: &[SearchResult]) {
    if results.is_empty() {
        println!("  (no results)");
        return;
    }
    for (i, result) in results.iter().enumerate() {
        let kind = match result.kind() {
            ResultKind::Book => "book",
            ResultKind::Author => "author",
            ResultKind::Review => "review",
        };
        match result.detail() {
            Some(detail) => println!("{:2}. [{kind}] {} ({detail})", i + 1, result.label()),
            None => println!("{:2}. [{kind}] {}", i + 1, result.label()),
        }
    }
}

/// Interactive loop: every typed line is a submission, results print as
/// snapshots publish.
fn run_session(engine: Arc<SearchEngine>, config: &TomeConfig) -> anyhow::Result<()> {
    let session = SearchSession::with_debounce(engine, config.session.debounce());
    let mut rx = session.snapshots();

    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let snapshot = rx.borrow().clone();
            if snapshot.searching {
                continue;
            }
            println!();
            if snapshot.term.is_empty() {
                println!("Popular right now:");
            } else {
                println!("Results for \"{}\":", snapshot.term);
            }
            print_results(&snapshot.results);
            print!("> ");
            let _ = io::stdout().flush();
        }
    });

    println!("Type to search; an empty line shows the popular list; Ctrl-D exits.");
    print!("> ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        session.submit(line?.trim());
    }

    Ok(())
}
