use risk_core::RiskTable;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Immutable risk table, built once at startup and shared by every request.
    pub table: Arc<RiskTable>,
    /// Directory holding the static front-end (index.html).
    pub frontend_dir: PathBuf,
}
