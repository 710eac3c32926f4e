use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository();
    let publisher = create_publisher(config.events);
    Box::new(CatalogServiceImpl::new(config, book_repo, publisher))
}

#[cfg(test)]
mod tests {
    use crate::catalog::factory::create_catalog_service;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_create_catalog_service() {
        let mut config = Configuration::new("test");
        config.events = GatewayPublisherVia::Noop;
        let mut svc = create_catalog_service(&config);
        let book = svc.add_book("1984", "George Orwell", 1949).expect("should add book");
        assert_eq!(1, svc.list_all().expect("should list books").len());
        assert_eq!(book, svc.find_book_by_id(book.book_id.as_str()).expect("should return book"));
    }
}
