pub mod create_ticket_request;
pub mod ticket_dto;
pub mod ticket_list_response;
pub mod ticket_response;
pub mod tickets;
