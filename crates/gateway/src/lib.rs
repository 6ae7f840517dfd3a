//! Database gateway for the PI-Credit status service.
//!
//! Every call to [`StatusGateway::fetch_message`] is independent: the
//! PostgreSQL implementation opens a fresh connection, runs one fixed
//! read-only query and closes the connection again before returning.

pub mod config;
pub mod error;
pub mod gateway;
pub mod memory;
pub mod postgres;

pub use config::DatabaseConfig;
pub use error::{GatewayError, Result};
pub use gateway::{STATUS_MESSAGE, STATUS_QUERY, StatusGateway};
pub use memory::InMemoryGateway;
pub use postgres::{APPLICATION_NAME, DEFAULT_CONNECT_TIMEOUT, PostgresGateway};
