use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::{display_date, option_serializer, serializer};

// BookDto is a data transfer object for Catalog service, callers get a copy of
// the stored book and refer back to it by book_id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
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

impl BookDto {
    /// Renders bibliographic data and availability. Loaned books also show the
    /// borrower, the loan date and the last return date.
    pub fn describe(&self) -> String {
        let mut info = format!("Title: {}\n", self.title);
        info += format!("Author: {}\n", self.author).as_str();
        info += format!("Publication year: {}\n", self.publication_year).as_str();
        info += format!("Availability: {}", self.status()).as_str();
        if self.loaned {
            info += format!("\nBorrower: {}", self.borrower.as_deref().unwrap_or("-")).as_str();
            info += format!("\nLoaned at: {}", display_date(self.loaned_at)).as_str();
            info += format!("\nReturned at: {}", display_date(self.returned_at)).as_str();
        }
        info
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn is_loaned(&self) -> bool {
        self.loaned
    }

    fn borrower(&self) -> Option<&str> {
        self.borrower.as_deref()
    }
}

// BookSummary is the listing projection of a book, it leaves out loan and return dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub loaned: bool,
    pub borrower: Option<String>,
}

impl Display for BookSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.publication_year)?;
        match self.borrower.as_deref() {
            Some(borrower) if self.loaned => write!(f, " - Loaned to {}", borrower),
            _ => write!(f, " - Available"),
        }
    }
}
