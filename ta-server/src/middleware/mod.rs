pub mod authenticate;
pub mod require_role;

pub use authenticate::authenticate;
pub use require_role::require_role;
