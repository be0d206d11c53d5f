//! Lazily-opened single connection bound to a configurable endpoint.
//!
//! # Invariants
//! - At most one live connection is cached at a time.
//! - Changing the endpoint drops the cached connection; the next
//!   `connection()` call reconnects to the new target.

use super::open::open_endpoint;
use super::{DbEndpoint, DbResult};
use log::info;
use rusqlite::Connection;

/// Supplies one shared connection to the configured endpoint.
///
/// DAOs borrow the connection returned by [`ConnectionProvider::connection`],
/// so the provider must outlive every DAO built from it.
#[derive(Debug)]
pub struct ConnectionProvider {
    endpoint: DbEndpoint,
    conn: Option<Connection>,
}

impl ConnectionProvider {
    pub fn new(endpoint: DbEndpoint) -> Self {
        Self {
            endpoint,
            conn: None,
        }
    }

    pub fn endpoint(&self) -> &DbEndpoint {
        &self.endpoint
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Returns the cached connection, opening it on first use.
    ///
    /// # Errors
    /// - `DbError::Open` when the endpoint cannot be reached.
    /// - Schema bootstrap failures from the freshly opened connection.
    pub fn connection(&mut self) -> DbResult<&Connection> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => open_endpoint(&self.endpoint)?,
        };
        let conn: &Connection = self.conn.insert(conn);
        Ok(conn)
    }

    /// Points the provider at `endpoint`, invalidating any cached connection.
    pub fn set_endpoint(&mut self, endpoint: DbEndpoint) {
        let dropped = self.conn.take().is_some();
        info!(
            "event=provider_endpoint_changed module=db status=ok from={} to={} dropped_connection={}",
            self.endpoint, endpoint, dropped
        );
        self.endpoint = endpoint;
    }
}
