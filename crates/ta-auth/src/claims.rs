use crate::TokenKind;

use ta_core::Role;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity claims carried inside a signed credential.
///
/// Immutable once issued; never persisted server-side. Reconstructed from
/// the token on every request and discarded when the request completes.
/// None of these fields may be trusted before the signature has been
/// verified by [`crate::JwtValidator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: Uuid,
    /// Tenant the credential is scoped to
    pub tenant_id: Uuid,
    /// Role granted within the tenant
    pub role: Role,
    /// Access or refresh
    pub token_type: TokenKind,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
    /// Issued-at timestamp (Unix seconds)
    pub iat: i64,
    /// Fixed issuer name
    pub iss: String,
}
