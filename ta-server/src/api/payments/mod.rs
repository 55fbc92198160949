pub mod create_payment_request;
pub mod payment_dto;
pub mod payment_list_response;
pub mod payment_response;
pub mod payments;
pub mod update_payment_request;
