use crate::TokenKind;

use ta_core::Role;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// Credential error taxonomy.
///
/// Every decode failure from the underlying JWT library is normalized into
/// one of these variants; no library error shape crosses this boundary.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Malformed credential: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential signature verification failed {location}")]
    BadSignature { location: ErrorLocation },

    #[error("Credential expired {location}")]
    Expired { location: ErrorLocation },

    #[error("Wrong credential kind: expected {expected} {location}")]
    WrongTokenKind {
        expected: TokenKind,
        location: ErrorLocation,
    },

    #[error("Insufficient role: {role} {location}")]
    InsufficientRole {
        role: Role,
        location: ErrorLocation,
    },

    #[error("Unknown identity: {user_id} {location}")]
    UnknownUser {
        user_id: Uuid,
        location: ErrorLocation,
    },

    /// Signing failure: misconfigured secret. Startup-class, never per-request.
    #[error("Credential signing failed: {source} {location}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {source} {location}")]
    PasswordHash {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-stable reason string surfaced to clients.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingHeader { .. } => "MISSING_CREDENTIAL",
            Self::InvalidScheme { .. } => "MALFORMED_CREDENTIAL",
            Self::Malformed { .. } => "MALFORMED_CREDENTIAL",
            Self::BadSignature { .. } => "BAD_SIGNATURE",
            Self::Expired { .. } => "EXPIRED_CREDENTIAL",
            Self::WrongTokenKind { .. } => "WRONG_CREDENTIAL_KIND",
            Self::InsufficientRole { .. } => "INSUFFICIENT_ROLE",
            Self::UnknownUser { .. } => "UNKNOWN_IDENTITY",
            Self::Signing { .. } => "SIGNING_ERROR",
            Self::PasswordHash { .. } => "PASSWORD_HASH_ERROR",
        }
    }

    /// True for errors answered with 403 rather than 401.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::InsufficientRole { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
