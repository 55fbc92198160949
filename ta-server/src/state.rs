use crate::notifications::EmailSender;

use ta_auth::{JwtIssuer, JwtValidator};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state handed to every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub issuer: Arc<JwtIssuer>,
    pub validator: Arc<JwtValidator>,
    pub mailer: Arc<dyn EmailSender>,
}
