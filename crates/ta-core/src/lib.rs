pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::audit_log::AuditLog;
pub use models::booking::Booking;
pub use models::invoice::Invoice;
pub use models::itinerary::Itinerary;
pub use models::itinerary_item::ItineraryItem;
pub use models::lead::Lead;
pub use models::payment::Payment;
pub use models::role::Role;
pub use models::task::Task;
pub use models::tenant::Tenant;
pub use models::ticket::Ticket;
pub use models::user::User;
pub use models::vendor::Vendor;

// Re-exported so downstream crates share one ErrorLocation type.
pub use error_location::ErrorLocation;
