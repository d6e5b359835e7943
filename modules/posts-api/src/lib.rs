use std::sync::Arc;

use event_bus_client::EventPublisher;

pub mod error;
pub mod rest;
pub mod routes;
pub mod store;

pub use error::ApiError;
pub use routes::build_router;
pub use store::PostStore;

pub struct AppState {
    pub store: PostStore,
    pub publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(store: PostStore, publisher: Arc<dyn EventPublisher>) -> Self {
        Self { store, publisher }
    }
}
