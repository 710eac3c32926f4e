use lms_catalog::catalog::factory::create_catalog_service;
use lms_catalog::core::domain::Configuration;
use lms_catalog::core::library::{LibraryError, LibraryResult};
use lms_catalog::utils::logging::setup_tracing;

fn main() -> LibraryResult<()> {
    let config = Configuration::from_env()?;
    setup_tracing(&config)?;

    let mut catalog = create_catalog_service(&config);

    catalog.add_book("Cien años de soledad", "Gabriel García Márquez", 1967)?;
    catalog.add_book("1984", "George Orwell", 1949)?;
    catalog.add_book("Don Quijote de la Mancha", "Miguel de Cervantes Saavedra", 1605)?;

    let found = catalog.find_by_title("cien")?;
    println!("Books found:");
    for book in &found {
        println!("{}", book.describe());
    }

    let book = found.first().ok_or_else(|| LibraryError::not_found("no book matches \"cien\""))?;
    catalog.loan_book(book.book_id.as_str(), "Usuario1")?;
    println!("The book \"{}\" has been loaned to Usuario1.", book.title);

    catalog.return_book(book.book_id.as_str())?;
    println!("The book \"{}\" has been returned.", book.title);

    println!("Books in the library:");
    for summary in catalog.list_all()? {
        println!("{}", summary);
    }
    Ok(())
}
