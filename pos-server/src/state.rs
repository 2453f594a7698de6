//! Shared application state

use std::time::Instant;

use crate::db::DbService;

/// State handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Database service (MySQL in production)
    pub db: DbService,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    pub fn new(db: &DbService) -> Self {
        Self {
            db: db.clone(),
            started_at: Instant::now(),
        }
    }
}
