use crate::{AuthError, Claims, Result as AuthErrorResult, TokenKind};

use ta_core::ErrorLocation;

use std::panic::Location;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Validates credentials and extracts claims.
///
/// Stateless: validation is a pure function of (token, secret, clock).
/// Signature verification always runs before any claim is inspected.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create a validator sharing the issuer's HS256 secret.
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is deterministic: now > exp always rejects.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate a credential of either kind and return its claims.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::Expired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    ErrorKind::InvalidSignature => AuthError::BadSignature {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::Malformed {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        Ok(token_data.claims)
    }

    /// Validate, then require an access credential.
    ///
    /// Protected routes go through this so a long-lived refresh token can
    /// never stand in for an access token.
    #[track_caller]
    pub fn validate_access(&self, token: &str) -> AuthErrorResult<Claims> {
        let claims = self.validate(token)?;
        if claims.token_type != TokenKind::Access {
            return Err(AuthError::WrongTokenKind {
                expected: TokenKind::Access,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(claims)
    }

    /// Validate, then require a refresh credential.
    ///
    /// The refresh endpoint goes through this so a short-lived access token
    /// cannot be replayed to mint new access tokens indefinitely.
    #[track_caller]
    pub fn validate_refresh(&self, token: &str) -> AuthErrorResult<Claims> {
        let claims = self.validate(token)?;
        if claims.token_type != TokenKind::Refresh {
            return Err(AuthError::WrongTokenKind {
                expected: TokenKind::Refresh,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(claims)
    }
}
