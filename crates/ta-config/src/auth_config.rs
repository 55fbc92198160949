use crate::{ConfigError, ConfigErrorResult, DEFAULT_ACCESS_TTL_SECS, DEFAULT_REFRESH_TTL_SECS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; absence is a fatal startup error.
    pub jwt_secret: Option<String>,
    pub access_ttl_secs: i64,
    pub refresh_ttl_secs: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_ttl_secs: DEFAULT_ACCESS_TTL_SECS,
            refresh_ttl_secs: DEFAULT_REFRESH_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret {
            Some(ref secret) if !secret.is_empty() => {}
            _ => {
                return Err(ConfigError::auth(
                    "TA_JWT_SECRET is required but not set",
                ));
            }
        }

        if self.access_ttl_secs <= 0 {
            return Err(ConfigError::auth(format!(
                "auth.access_ttl_secs must be positive, got {}",
                self.access_ttl_secs
            )));
        }
        if self.refresh_ttl_secs <= self.access_ttl_secs {
            return Err(ConfigError::auth(format!(
                "auth.refresh_ttl_secs ({}) must exceed access_ttl_secs ({})",
                self.refresh_ttl_secs, self.access_ttl_secs
            )));
        }

        Ok(())
    }

    /// The validated signing secret. Panics if called before `validate()`.
    pub fn secret(&self) -> &str {
        self.jwt_secret
            .as_deref()
            .expect("auth config validated at startup")
    }
}
