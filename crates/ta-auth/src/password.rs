//! Password hashing via bcrypt.

use crate::{AuthError, Result as AuthErrorResult};

use ta_core::ErrorLocation;

use std::panic::Location;

/// Hash a password with bcrypt at the default cost.
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| AuthError::PasswordHash {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Verify a password against a stored bcrypt hash.
#[track_caller]
pub fn verify_password(password: &str, hash: &str) -> AuthErrorResult<bool> {
    bcrypt::verify(password, hash).map_err(|e| AuthError::PasswordHash {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}
