pub mod audit_log_repository;
pub mod booking_repository;
pub mod invoice_repository;
pub mod itinerary_repository;
pub mod lead_repository;
pub mod payment_repository;
pub mod task_repository;
pub mod ticket_repository;
pub mod user_repository;
pub mod vendor_repository;
