//! Autosouk backend: vehicle-listing marketplace REST API over a MongoDB
//! document store.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, common_routes, cors_layer};
pub use state::AppState;
pub use store::Store;
