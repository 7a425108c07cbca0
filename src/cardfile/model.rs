use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single note. `content` is the free-form body; everything else is metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Card {
    /// A fresh card with a new id, stamped with the current time.
    pub fn new(content: String) -> Self {
        let now = now_timestamp();
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the body and bumps `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub fn touch_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = now_timestamp().max(self.updated_at);
    }
}

/// Seconds since the Unix epoch.
pub fn now_timestamp() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_has_matching_timestamps() {
        let card = Card::new("hello".into());
        assert_eq!(card.created_at, card.updated_at);
        assert!(Uuid::parse_str(&card.id).is_ok());
    }

    #[test]
    fn new_cards_get_distinct_ids() {
        let a = Card::new("same".into());
        let b = Card::new("same".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn touch_keeps_updated_at_monotonic() {
        let mut card = Card::new("old".into());
        let future = card.updated_at + 10_000;
        card.updated_at = future;
        card.touch_content("new".into());
        assert_eq!(card.content, "new");
        assert_eq!(card.updated_at, future);
        assert!(card.updated_at >= card.created_at);
    }
}
