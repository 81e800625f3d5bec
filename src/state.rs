use std::sync::Arc;

use crate::data::model::CallTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared request state. The table is loaded once in `main` and only read
/// afterwards, so handlers share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub table: Arc<CallTable>,
}

impl AppState {
    pub fn new(table: CallTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}
