use std::sync::Arc;

use crate::db::Database;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL pool; `None` when the database was unreachable at startup
    pub pg_db: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(pg_db: Option<Arc<Database>>) -> Self {
        Self { pg_db }
    }
}
