//! Simulated database connection (translates the `DatabaseConnection`
//! singleton of the C++ catalogue).
//!
//! Nothing here touches a real database: `connect` flips a flag and
//! `execute` records the query text. The point is the guarded-singleton
//! shape — one mutex around the whole connection state, and precondition
//! errors instead of silent misbehaviour. Because the connected flag, the
//! connection string, and the history share that mutex, every operation is
//! atomic end to end: a query can never pass the connected check and then
//! land in the history after a concurrent `disconnect`.

use std::sync::{Mutex, OnceLock};

use dp_core::{ensure, errors::Result};

/// Default connection string used by [`DbConnection::new`].
pub const DEFAULT_CONNECTION_STRING: &str = "mongodb://localhost:27017/designpatterns";

struct DbState {
    connection_string: String,
    connected: bool,
    history: Vec<String>,
}

/// A simulated, thread-safe database connection with a tracked query history.
///
/// ```
/// use dp_services::DbConnection;
///
/// let db = DbConnection::new();
/// assert!(db.execute("SELECT 1").is_err()); // not connected yet
///
/// db.connect();
/// assert_eq!(db.execute("SELECT 1").unwrap(), "executed: SELECT 1");
/// assert_eq!(db.history(), ["SELECT 1"]);
/// ```
pub struct DbConnection {
    state: Mutex<DbState>,
}

impl DbConnection {
    /// Create a disconnected connection with the default connection string.
    pub fn new() -> Self {
        Self::with_connection_string(DEFAULT_CONNECTION_STRING)
    }

    /// Create a disconnected connection with the given connection string.
    pub fn with_connection_string(connection_string: &str) -> Self {
        DbConnection {
            state: Mutex::new(DbState {
                connection_string: connection_string.to_string(),
                connected: false,
                history: Vec::new(),
            }),
        }
    }

    /// Return a reference to the process-wide instance, constructing it on
    /// the first call from any thread.
    pub fn instance() -> &'static DbConnection {
        static INSTANCE: OnceLock<DbConnection> = OnceLock::new();
        INSTANCE.get_or_init(DbConnection::new)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DbState> {
        self.state.lock().expect("DbConnection mutex poisoned")
    }

    /// Establish the (simulated) connection. Idempotent; returns the
    /// connected state, which is always `true` afterwards.
    pub fn connect(&self) -> bool {
        self.lock().connected = true;
        true
    }

    /// Drop the connection. Idempotent. The query history is retained.
    pub fn disconnect(&self) {
        self.lock().connected = false;
    }

    /// `true` while connected.
    pub fn is_connected(&self) -> bool {
        self.lock().connected
    }

    /// Execute a (simulated) query.
    ///
    /// Fails with a precondition error if the connection has not been
    /// established. On success the query is appended to the history and a
    /// confirmation string is returned. The check and the append happen
    /// under one lock, so a success always means the connection was live
    /// when the query was recorded.
    pub fn execute(&self, query: &str) -> Result<String> {
        let mut state = self.lock();
        ensure!(state.connected, "database is not connected");
        state.history.push(query.to_string());
        Ok(format!("executed: {query}"))
    }

    /// The current connection string.
    pub fn connection_string(&self) -> String {
        self.lock().connection_string.clone()
    }

    /// Change the connection string.
    ///
    /// Fails with a precondition error while connected: reconfiguring a live
    /// connection was a throw in the C++ version too.
    pub fn set_connection_string(&self, connection_string: &str) -> Result<()> {
        let mut state = self.lock();
        ensure!(
            !state.connected,
            "cannot change the connection string while connected"
        );
        state.connection_string = connection_string.to_string();
        Ok(())
    }

    /// A snapshot of every successfully executed query, in order.
    pub fn history(&self) -> Vec<String> {
        self.lock().history.clone()
    }

    /// Number of successfully executed queries.
    pub fn history_len(&self) -> usize {
        self.lock().history.len()
    }
}

impl Default for DbConnection {
    fn default() -> Self {
        Self::new()
    }
}
