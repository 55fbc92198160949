pub mod auth_config;
pub mod config;
pub mod database_config;
pub mod error;
pub mod log_level;
pub mod logging_config;
pub mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

use log::LevelFilter;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DATABASE_PATH: &str = "ta.db";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// 15 minutes.
pub const DEFAULT_ACCESS_TTL_SECS: i64 = 15 * 60;
/// 7 days.
pub const DEFAULT_REFRESH_TTL_SECS: i64 = 7 * 24 * 3600;
