use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Identifiable {
    fn is_loaned(&self) -> bool;
    fn borrower(&self) -> Option<&str>;

    fn status(&self) -> BookStatus {
        if self.is_loaned() {
            BookStatus::Loaned
        } else {
            BookStatus::Available
        }
    }
}
