pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {
    // case-insensitive substring match on title, in insertion order
    fn find_by_title(&self, query: &str) -> LibraryResult<Vec<BookEntity>>;
}
