//! Connection parameters for the status database.

use std::fmt;

/// Default PostgreSQL port.
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Where and as whom the gateway connects.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl DatabaseConfig {
    /// Creates a configuration on the default port.
    pub fn new(
        host: impl Into<String>,
        name: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_DB_PORT,
            name: name.into(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// Overrides the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
