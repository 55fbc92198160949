pub mod audit_log;
pub mod booking;
pub mod invoice;
pub mod itinerary;
pub mod itinerary_item;
pub mod lead;
pub mod payment;
pub mod role;
pub mod task;
pub mod tenant;
pub mod ticket;
pub mod user;
pub mod vendor;
