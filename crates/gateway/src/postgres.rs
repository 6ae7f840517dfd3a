//! PostgreSQL-backed gateway using one connection per call.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

use crate::{DatabaseConfig, GatewayError, Result, STATUS_QUERY, StatusGateway};

/// Upper bound on establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// `application_name` reported by every connection the gateway opens.
pub const APPLICATION_NAME: &str = "pi-credit";

/// Gateway that connects to PostgreSQL afresh for every request.
///
/// No connection outlives a call to [`StatusGateway::fetch_message`]: the
/// connection is closed after the query on success and on failure, and a
/// connection dropped any other way (cancellation, panic) closes its socket
/// in `Drop`.
#[derive(Debug, Clone)]
pub struct PostgresGateway {
    config: DatabaseConfig,
    connect_timeout: Duration,
}

impl PostgresGateway {
    /// Creates a gateway with the default 3 second connect timeout.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Overrides the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Returns the connection parameters.
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .database(&self.config.name)
            .username(&self.config.user)
            .password(&self.config.password)
            .application_name(APPLICATION_NAME)
    }

    async fn connect(&self) -> Result<PgConnection> {
        let options = self.connect_options();

        match tokio::time::timeout(self.connect_timeout, PgConnection::connect_with(&options)).await
        {
            Ok(connection) => Ok(connection?),
            Err(_) => Err(GatewayError::ConnectTimeout(self.connect_timeout)),
        }
    }
}

#[async_trait]
impl StatusGateway for PostgresGateway {
    async fn fetch_message(&self) -> Result<String> {
        let mut conn = self.connect().await?;
        tracing::debug!(
            host = %self.config.host,
            database = %self.config.name,
            "connected to database"
        );

        let message = sqlx::query_scalar::<_, String>(STATUS_QUERY)
            .fetch_one(&mut conn)
            .await;

        // Closed whether or not the query succeeded.
        if let Err(err) = conn.close().await {
            tracing::warn!(error = %err, "failed to close database connection");
        }

        Ok(message?)
    }
}
