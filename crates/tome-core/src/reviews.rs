//! Review interactions. Currently just the like toggle, which is the
//! one review operation that mutates shared state.

use crate::error::{TomeError, TomeResult};
use crate::store::DocumentStore;

/// Outcome of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeStatus {
    /// Whether the user likes the review after the toggle.
    pub liked: bool,
    /// The review's like count after the toggle.
    pub likes: u32,
}

/// Toggle a user's like on a review.
///
/// Requires a signed-in user. The like count never drops below zero,
/// even if it disagrees with the liked-by list.
pub async fn toggle_like(
    store: &dyn DocumentStore,
    user: Option<&str>,
    review_id: &str,
) -> TomeResult<LikeStatus> {
    let user = user.ok_or(TomeError::SignInRequired)?;

    let mut review = store
        .review(review_id)
        .await?
        .ok_or_else(|| TomeError::ReviewNotFound(review_id.to_string()))?;

    let liked = if let Some(pos) = review.liked_by.iter().position(|u| u == user) {
        review.liked_by.remove(pos);
        review.likes = review.likes.saturating_sub(1);
        false
    } else {
        review.liked_by.push(user.to_string());
        review.likes = review.likes.saturating_add(1);
        true
    };

    let likes = review.likes;
    store.put_review(review).await?;

    Ok(LikeStatus { liked, likes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, ReviewDoc};
    use crate::text::normalize;

    fn review_doc(id: &str, likes: u32, liked_by: &[&str]) -> ReviewDoc {
        let book_title = "The Hobbit";
        ReviewDoc {
            id: id.to_string(),
            title: "A stunning debut".to_string(),
            book_id: "hobbit".to_string(),
            book_title: book_title.to_string(),
            username: "meg".to_string(),
            content: None,
            rating: Some(5.0),
            date: None,
            likes,
            liked_by: liked_by.iter().map(|u| u.to_string()).collect(),
            searchable_book_title: normalize(book_title),
            keywords: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_like_requires_sign_in() {
        let store = MemoryStore::new();
        store.put_review(review_doc("r1", 0, &[])).await.unwrap();

        let err = toggle_like(&store, None, "r1").await.unwrap_err();
        assert!(matches!(err, TomeError::SignInRequired));
    }

    #[tokio::test]
    async fn test_unknown_review() {
        let store = MemoryStore::new();
        let err = toggle_like(&store, Some("ana"), "nope").await.unwrap_err();
        assert!(matches!(err, TomeError::ReviewNotFound(_)));
    }

    #[tokio::test]
    async fn test_like_then_unlike_round_trip() {
        let store = MemoryStore::new();
        store.put_review(review_doc("r1", 4, &[])).await.unwrap();

        let status = toggle_like(&store, Some("ana"), "r1").await.unwrap();
        assert_eq!(status, LikeStatus { liked: true, likes: 5 });

        let status = toggle_like(&store, Some("ana"), "r1").await.unwrap();
        assert_eq!(status, LikeStatus { liked: false, likes: 4 });
    }

    #[tokio::test]
    async fn test_likes_do_not_go_negative() {
        let store = MemoryStore::new();
        store.put_review(review_doc("r1", 0, &["ana"])).await.unwrap();

        let status = toggle_like(&store, Some("ana"), "r1").await.unwrap();
        assert_eq!(status, LikeStatus { liked: false, likes: 0 });
    }
}
