use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::{option_serializer, serializer};

// BookEntity abstracts a single copy of a book held by the catalog, along with
// its current loan. Duplicate titles are separate entities with their own identifier.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub loaned: bool,
    pub borrower: Option<String>,
    #[serde(with = "option_serializer")]
    pub loaned_at: Option<NaiveDateTime>,
    #[serde(with = "option_serializer")]
    pub returned_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, publication_year: i32) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            loaned: false,
            borrower: None,
            loaned_at: None,
            returned_at: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // Marks the book as loaned, returns false without touching anything if it is already loaned.
    pub(crate) fn loan(&mut self, borrower: &str, at: NaiveDateTime) -> bool {
        if self.loaned {
            return false;
        }
        self.loaned = true;
        self.borrower = Some(borrower.to_string());
        self.loaned_at = Some(at);
        true
    }

    // Marks the book as returned, returns false if it is not on loan.
    // loaned_at is kept as the start of the last loan.
    pub(crate) fn give_back(&mut self, at: NaiveDateTime) -> bool {
        if !self.loaned {
            return false;
        }
        self.loaned = false;
        self.borrower = None;
        self.returned_at = Some(at);
        true
    }

    pub(crate) fn title_contains(&self, lower_query: &str) -> bool {
        self.title.to_lowercase().contains(lower_query)
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn is_loaned(&self) -> bool {
        self.loaned
    }

    fn borrower(&self) -> Option<&str> {
        self.borrower.as_deref()
    }
}
