pub mod admin;
pub mod auth;
pub mod bookings;
pub mod delete_response;
pub mod error;
pub mod invoices;
pub mod itineraries;
pub mod leads;
pub mod payments;
pub mod tasks;
pub mod tickets;
pub mod users;
pub mod vendors;
