pub mod service;

use crate::books::dto::{BookDto, BookSummary};
use crate::core::library::LibraryResult;

pub trait CatalogService {
    fn add_book(&mut self, title: &str, author: &str, publication_year: i32) -> LibraryResult<BookDto>;
    fn find_by_title(&self, query: &str) -> LibraryResult<Vec<BookDto>>;
    fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    // no-op when the book is already loaned
    fn loan_book(&mut self, id: &str, borrower: &str) -> LibraryResult<()>;
    // no-op when the book is not loaned
    fn return_book(&mut self, id: &str) -> LibraryResult<()>;
    fn list_all(&self) -> LibraryResult<Vec<BookSummary>>;
}
