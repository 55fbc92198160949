use crate::{AuthError, Claims, Result as AuthErrorResult, TOKEN_ISSUER, TokenKind};

use ta_core::{ErrorLocation, Role};

use std::panic::Location;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

/// Issues paired access/refresh credentials for an authenticated identity.
///
/// Holds the HS256 encoding key derived from the process-wide signing
/// secret; constructed once at startup and shared read-only. TTLs are
/// injected so tests can shrink or negate them.
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
}

impl JwtIssuer {
    pub fn new(secret: &[u8], access_ttl_secs: i64, refresh_ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            access_ttl_secs,
            refresh_ttl_secs,
        }
    }

    /// Issue a short-lived access credential.
    #[track_caller]
    pub fn issue_access(&self, sub: Uuid, tenant_id: Uuid, role: Role) -> AuthErrorResult<String> {
        self.issue(sub, tenant_id, role, TokenKind::Access, self.access_ttl_secs)
    }

    /// Issue a long-lived refresh credential.
    #[track_caller]
    pub fn issue_refresh(&self, sub: Uuid, tenant_id: Uuid, role: Role) -> AuthErrorResult<String> {
        self.issue(sub, tenant_id, role, TokenKind::Refresh, self.refresh_ttl_secs)
    }

    pub fn access_ttl_secs(&self) -> i64 {
        self.access_ttl_secs
    }

    pub fn refresh_ttl_secs(&self) -> i64 {
        self.refresh_ttl_secs
    }

    #[track_caller]
    fn issue(
        &self,
        sub: Uuid,
        tenant_id: Uuid,
        role: Role,
        kind: TokenKind,
        ttl_secs: i64,
    ) -> AuthErrorResult<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub,
            tenant_id,
            role,
            token_type: kind,
            exp: now + ttl_secs,
            iat: now,
            iss: TOKEN_ISSUER.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::Signing {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
