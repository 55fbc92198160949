pub mod claims;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod password;
pub mod token_kind;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_issuer::JwtIssuer;
pub use jwt_validator::JwtValidator;
pub use password::{hash_password, verify_password};
pub use token_kind::TokenKind;

/// Issuer name stamped into every credential.
pub const TOKEN_ISSUER: &str = "ta-server";
