//! Process-wide database connection flag
//!
//! No I/O happens here: the instance only records whether the rest of the
//! process considers itself connected. It is created on first access and
//! lives until the process exits.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, instrument};

use crate::common::traits::Connection;

static INSTANCE: Lazy<DatabaseConnection> = Lazy::new(|| {
    debug!("Creating database connection instance");
    DatabaseConnection {
        connected: AtomicBool::new(false),
    }
});

/// The single database connection of the process
#[derive(Debug)]
pub struct DatabaseConnection {
    connected: AtomicBool,
}

impl DatabaseConnection {
    /// Get the shared instance, creating it disconnected on first call
    pub fn instance() -> &'static DatabaseConnection {
        &INSTANCE
    }
}

impl Connection for DatabaseConnection {
    #[instrument(skip(self))]
    fn connect(&self) {
        let was_connected = self.connected.swap(true, Ordering::SeqCst);
        debug!(was_connected, "Connected to {}", self.resource_name());
    }

    #[instrument(skip(self))]
    fn disconnect(&self) {
        let was_connected = self.connected.swap(false, Ordering::SeqCst);
        debug!(was_connected, "Disconnected from {}", self.resource_name());
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn resource_name(&self) -> &'static str {
        "database"
    }
}
