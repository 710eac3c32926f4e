use std::collections::HashMap;
use chrono::Utc;
use tracing::{debug, info};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookSummary};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

const EVENTS_GROUP: &str = "catalog";

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // stores the changed book and publishes the stored copy.
    // The change stays saved when publishing fails.
    fn save_and_publish(&mut self, book: &BookEntity, name: &str) -> LibraryResult<()> {
        self.book_repository.update(book)?;
        let saved = BookDto::from(&self.book_repository.get(book.book_id.as_str())?);
        self.events_publisher.publish(&DomainEvent::updated(
            name, EVENTS_GROUP, saved.book_id.as_str(), &self.metadata(), &saved)?)
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, title: &str, author: &str, publication_year: i32) -> LibraryResult<BookDto> {
        let book = BookEntity::new(title, author, publication_year);
        // saved before publishing, a failed publish leaves the book in the catalog
        self.book_repository.create(&book)?;
        let added = BookDto::from(&book);
        self.events_publisher.publish(&DomainEvent::added(
            "book_added", EVENTS_GROUP, added.book_id.as_str(), &self.metadata(), &added)?)?;
        info!(book_id = added.book_id.as_str(), title, "added book");
        Ok(added)
    }

    fn find_by_title(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_by_title(query)?;
        debug!(query, matches = res.len(), "searched by title");
        Ok(res.iter().map(BookDto::from).collect())
    }

    fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).map(|b| BookDto::from(&b))
    }

    fn loan_book(&mut self, id: &str, borrower: &str) -> LibraryResult<()> {
        let mut book = self.book_repository.get(id)?;
        if !book.loan(borrower, Utc::now().naive_utc()) {
            debug!(book_id = id, borrower = ?book.borrower(), requested_by = borrower,
                "book is already loaned, ignoring loan");
            return Ok(());
        }
        self.save_and_publish(&book, "book_loaned")?;
        info!(book_id = id, borrower, "loaned book");
        Ok(())
    }

    fn return_book(&mut self, id: &str) -> LibraryResult<()> {
        let mut book = self.book_repository.get(id)?;
        if !book.give_back(Utc::now().naive_utc()) {
            debug!(book_id = id, "book is not loaned, ignoring return");
            return Ok(());
        }
        self.save_and_publish(&book, "book_returned")?;
        info!(book_id = id, "returned book");
        Ok(())
    }

    fn list_all(&self) -> LibraryResult<Vec<BookSummary>> {
        let res = self.book_repository.find_all()?;
        Ok(res.iter().map(BookSummary::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            publication_year: other.publication_year,
            loaned: other.loaned,
            borrower: other.borrower.clone(),
            loaned_at: other.loaned_at,
            returned_at: other.returned_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookEntity> for BookSummary {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            publication_year: other.publication_year,
            loaned: other.loaned,
            borrower: other.borrower.clone(),
        }
    }
}
