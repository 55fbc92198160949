pub mod error;
pub mod repositories;
pub(crate) mod row;

pub use error::{DbError, Result};
pub use repositories::audit_log_repository::AuditLogRepository;
pub use repositories::booking_repository::BookingRepository;
pub use repositories::invoice_repository::InvoiceRepository;
pub use repositories::itinerary_repository::ItineraryRepository;
pub use repositories::lead_repository::LeadRepository;
pub use repositories::payment_repository::PaymentRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::ticket_repository::TicketRepository;
pub use repositories::user_repository::UserRepository;
pub use repositories::vendor_repository::VendorRepository;
