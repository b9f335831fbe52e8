//! Shared application state for all routes.

use crate::config::Catalog;
use crate::store::DbPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        AppState {
            pool,
            catalog: Arc::new(Catalog::standard()),
        }
    }
}
