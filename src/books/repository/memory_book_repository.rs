use chrono::Utc;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in insertion order, lookups are linear.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: vec![],
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|b| b.book_id == id)
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        if self.position(entity.book_id.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("book {} already exists", entity.id()).as_str()));
        }
        self.books.push(entity.clone());
        Ok(1)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        let ndx = self.position(entity.book_id.as_str()).ok_or_else(|| LibraryError::not_found(
            format!("book not found for {}", entity.book_id).as_str()))?;
        let existing = &mut self.books[ndx];
        if existing.version() != entity.version() {
            return Err(LibraryError::unavailable(
                format!("book {} version {} is stale, current version {}",
                        entity.id(), entity.version(), existing.version()).as_str(),
                Some("409".to_string()), true));
        }
        *existing = entity.clone();
        existing.version = entity.version + 1;
        existing.updated_at = Utc::now().naive_utc();
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.iter().find(|b| b.book_id == id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.clone())
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_title(&self, query: &str) -> LibraryResult<Vec<BookEntity>> {
        let lower_query = query.to_lowercase();
        Ok(self.books.iter().filter(|b| b.title_contains(lower_query.as_str())).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    #[test]
    fn test_should_create_get_books() {
        let mut repo = MemoryBookRepository::new();
        let book = BookEntity::new("1984", "George Orwell", 1949);
        let size = repo.create(&book).expect("should create book");
        assert_eq!(1, size);

        let loaded = repo.get(book.book_id.as_str()).expect("should return book");
        assert_eq!(book, loaded);
    }

    #[test]
    fn test_should_reject_duplicate_id() {
        let mut repo = MemoryBookRepository::new();
        let book = BookEntity::new("1984", "George Orwell", 1949);
        let _ = repo.create(&book).expect("should create book");
        let res = repo.create(&book);
        assert!(matches!(res, Err(LibraryError::DuplicateKey{ message: _ })));
    }

    #[test]
    fn test_should_allow_duplicate_titles() {
        let mut repo = MemoryBookRepository::new();
        let _ = repo.create(&BookEntity::new("1984", "George Orwell", 1949)).expect("should create book");
        let _ = repo.create(&BookEntity::new("1984", "George Orwell", 1949)).expect("should create book");
        assert_eq!(2, repo.find_by_title("1984").expect("should find books").len());
    }

    #[test]
    fn test_should_not_get_unknown_book() {
        let repo = MemoryBookRepository::new();
        let res = repo.get("missing");
        assert!(matches!(res, Err(LibraryError::NotFound{ message: _ })));
    }

    #[test]
    fn test_should_update_books() {
        let mut repo = MemoryBookRepository::new();
        let mut book = BookEntity::new("1984", "George Orwell", 1949);
        let _ = repo.create(&book).expect("should create book");

        book.title = "Nineteen Eighty-Four".to_string();
        let _ = repo.update(&book).expect("should update book");
        let loaded = repo.get(book.book_id.as_str()).expect("should return book");
        assert_eq!("Nineteen Eighty-Four", loaded.title.as_str());
        assert_eq!(1, loaded.version);
    }

    #[test]
    fn test_should_reject_stale_update() {
        let mut repo = MemoryBookRepository::new();
        let book = BookEntity::new("1984", "George Orwell", 1949);
        let _ = repo.create(&book).expect("should create book");
        let _ = repo.update(&book).expect("should update book");

        let res = repo.update(&book);
        assert!(matches!(res, Err(LibraryError::CurrentlyUnavailable{ message: _, reason_code: _, retryable: true })));
    }

    #[test]
    fn test_should_not_update_unknown_book() {
        let mut repo = MemoryBookRepository::new();
        let res = repo.update(&BookEntity::new("1984", "George Orwell", 1949));
        assert!(matches!(res, Err(LibraryError::NotFound{ message: _ })));
    }

    #[test]
    fn test_should_find_by_title_in_insertion_order() {
        let mut repo = MemoryBookRepository::new();
        for (title, year) in [("Dune", 1965), ("1984", 1949), ("Dune Messiah", 1969)] {
            let _ = repo.create(&BookEntity::new(title, "author", year)).expect("should create book");
        }
        let res = repo.find_by_title("DUNE").expect("should find books");
        let titles: Vec<&str> = res.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["Dune", "Dune Messiah"], titles);

        assert_eq!(1, repo.find_by_title("98").expect("should find books").len());
        assert!(repo.find_by_title("xyz").expect("should find books").is_empty());
        assert_eq!(3, repo.find_all().expect("should list books").len());
    }
}
