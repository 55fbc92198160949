pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod notifications;
pub mod routes;
pub mod state;

pub use api::error::{ApiError, Result as ApiResult};
pub use notifications::{EmailSender, LogMailer};
pub use routes::build_router;
pub use state::AppState;
