//! Text normalization and keyword expansion for search indexing.
//!
//! `normalize` produces the canonical key used both when indexing
//! documents and when building range queries. `keywords` widens a text
//! into the bounded set of words, phrases, and leading substrings that
//! a prefix-only store can match against.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Upper bound on keywords generated per text (bounded write cost).
pub const MAX_KEYWORDS: usize = 50;

/// High private-use code point used as a range-end sentinel. It sorts
/// after every printable character, so `[key, key + SENTINEL]` spans
/// exactly the strings that start with `key`.
pub const PREFIX_SENTINEL: char = '\u{f8ff}';

/// Normalize free text into a canonical search key.
///
/// Decomposes to NFD and drops combining marks ("café" → "cafe"),
/// lowercases, replaces anything outside `[a-z0-9_]` with a space, and
/// collapses whitespace runs. Idempotent; empty input yields an empty
/// key.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Expand text into the keyword set indexed at write time.
///
/// Emits individual words longer than 2 characters, sliding-window
/// phrases of 2–4 words whose joined length exceeds 3, and every
/// leading substring (length ≥ 3) of words longer than 4 characters.
/// Order-preserving dedup, capped at [`MAX_KEYWORDS`].
pub fn keywords(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Vec::new();
    }
    let words: Vec<&str> = normalized.split(' ').collect();
    let mut keywords: Vec<String> = Vec::new();

    // Individual words
    for word in &words {
        if word.len() > 2 {
            push_unique(&mut keywords, (*word).to_string());
        }
    }

    // Word combinations, up to four words per phrase
    for i in 0..words.len() {
        for j in (i + 1)..words.len().min(i + 4) {
            let phrase = words[i..=j].join(" ");
            if phrase.len() > 3 {
                push_unique(&mut keywords, phrase);
            }
        }
    }

    // Leading substrings for starts-with matching against a store that
    // only supports range queries. Normalized text is ASCII, so byte
    // indexing stays on char boundaries.
    for word in &words {
        if word.len() > 4 {
            for end in 3..word.len() {
                push_unique(&mut keywords, word[..end].to_string());
            }
        }
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// Build the `[start, end]` bounds of a starts-with range query for a
/// normalized key.
pub fn prefix_range(key: &str) -> (String, String) {
    let mut end = String::with_capacity(key.len() + PREFIX_SENTINEL.len_utf8());
    end.push_str(key);
    end.push(PREFIX_SENTINEL);
    (key.to_string(), end)
}

fn push_unique(keywords: &mut Vec<String>, keyword: String) {
    if !keywords.contains(&keyword) {
        keywords.push(keyword);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_collapses() {
        assert_eq!(normalize("  The  GREAT   Gatsby "), "the great gatsby");
    }

    #[test]
    fn test_normalize_strips_diacritics_and_punctuation() {
        assert_eq!(normalize("Café: au Lait!"), "cafe au lait");
        assert_eq!(normalize("naïve's"), "naive s");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!?."), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["Crème Brûlée", "The Hobbit", "  mixed CASE  words ", ""] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_keywords_individual_words() {
        let keys = keywords("The Hobbit");
        // "the" qualifies (3 chars), "hobbit" qualifies
        assert!(keys.contains(&"the".to_string()));
        assert!(keys.contains(&"hobbit".to_string()));
    }

    #[test]
    fn test_keywords_short_words_skipped() {
        let keys = keywords("it is an ox");
        assert!(!keys.iter().any(|k| k == "it" || k == "is" || k == "an" || k == "ox"));
    }

    #[test]
    fn test_keywords_phrases() {
        let keys = keywords("war and peace");
        assert!(keys.contains(&"war and".to_string()));
        assert!(keys.contains(&"war and peace".to_string()));
        assert!(keys.contains(&"and peace".to_string()));
    }

    #[test]
    fn test_keywords_leading_substrings() {
        let keys = keywords("gatsby");
        assert!(keys.contains(&"gat".to_string()));
        assert!(keys.contains(&"gats".to_string()));
        assert!(keys.contains(&"gatsb".to_string()));
        assert!(keys.contains(&"gatsby".to_string()));
    }

    #[test]
    fn test_keywords_no_duplicates_and_capped() {
        let long = "one of the most remarkable and thoroughly celebrated \
                    adventure stories about friendship courage wonder and \
                    discovery ever written for curious readers everywhere";
        let keys = keywords(long);
        assert!(keys.len() <= MAX_KEYWORDS);
        let mut seen = std::collections::HashSet::new();
        for k in &keys {
            assert!(seen.insert(k.clone()), "duplicate keyword: {k}");
        }
    }

    #[test]
    fn test_keywords_empty() {
        assert!(keywords("").is_empty());
        assert!(keywords("  !! ").is_empty());
    }

    #[test]
    fn test_prefix_range_bounds() {
        let (start, end) = prefix_range("dune");
        assert_eq!(start, "dune");
        assert_eq!(end, format!("dune{PREFIX_SENTINEL}"));
        assert!(start < end);
        assert!("dune messiah".to_string() > start);
        assert!("dune messiah".to_string() < end);
    }
}
