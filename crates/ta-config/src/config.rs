use crate::{AuthConfig, ConfigErrorResult, DatabaseConfig, LoggingConfig, ServerConfig};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first when present,
    /// then `TA_*` variables override the defaults.
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        // Absence of a .env file is not an error.
        dotenvy::dotenv().ok();

        let mut config = Config::default();
        config.apply_env_overrides();

        Ok(config)
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup, not at first request.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256, access ttl {}s, refresh ttl {}s",
            self.auth.access_ttl_secs, self.auth.refresh_ttl_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TA_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TA_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("TA_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "TA_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("TA_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("TA_ACCESS_TTL_SECS", &mut self.auth.access_ttl_secs);
        Self::apply_env_parse("TA_REFRESH_TTL_SECS", &mut self.auth.refresh_ttl_secs);

        // Logging
        Self::apply_env_parse("TA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TA_LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
