pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

use std::sync::Arc;

pub use config::Config;
pub use database::{CharterStore, MemoryCharterStore, PgCharterStore};
pub use services::InterventionLogger;

use chrono::{DateTime, Utc};
use services::{Clock, SystemClock};

pub struct AppState {
    pub store: Arc<dyn CharterStore>,
    pub intervention_logger: InterventionLogger,
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<dyn CharterStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn CharterStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            intervention_logger: InterventionLogger::new(Arc::clone(&store)),
            store,
            clock,
        }
    }

    /// Server time. Status changes are always evaluated against this.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}
