//! Pizza API: restaurants, pizzas and their priced associations over SQLite.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use error::{AppError, ConfigError, ValidationError};
pub use routes::{api_routes, app, common_routes, common_routes_with_ready};
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, ensure_tables};
