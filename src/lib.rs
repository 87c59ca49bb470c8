//! docstore-gateway: configuration-driven REST CRUD over document collections.

pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod response;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::{load_config, presets, resolve, ApiConfig, Operation, ResolvedModel, ResolvedResource, Settings};
pub use error::{AppError, ConfigError, GatewayError};
pub use model::{Car, Family, Plant, Record, User};
pub use routes::{app, common_routes, resource_routes};
pub use service::{CollectionGateway, Stored};
pub use state::AppState;
pub use store::{DocumentStore, MemoryStore, MongoStore};
