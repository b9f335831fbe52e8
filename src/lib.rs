//! Censo API: REST backend over the PERSONA, VIVIENDA and MUNICIPIO tables.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Catalog, Resource, Settings};
pub use error::{AppError, ConfigError};
pub use routes::{common_routes, entity_routes, router};
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, connect_with, DbPool};
