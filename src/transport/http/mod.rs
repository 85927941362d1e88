pub mod router;
pub mod types;
pub mod handlers {
    pub mod categories;
    pub mod health;
    pub mod products;
    pub mod stats;
}

pub use router::{create_router, handler_404, handler_panic, ApiDoc};
pub use types::AppState;
