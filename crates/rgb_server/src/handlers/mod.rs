pub mod form_handlers;

pub use form_handlers::*;

use crate::config::FormLimits;
use crate::db::DbConn;

/// Shared state of every request
#[derive(Clone)]
pub struct AppState {
    pub db: DbConn,
    pub limits: FormLimits,
}
