pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::catalog_service::{CatalogError, CatalogService, DeletedProduct, ProductListing};
pub use domain::product::{CatalogStats, ListFilter, NewProduct, Product, ProductPatch};
pub use storage::memory::MemoryProductRepository;
pub use storage::postgres::PgProductRepository;
pub use storage::repository::ProductRepository;
