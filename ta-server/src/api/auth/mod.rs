pub mod auth;
pub mod auth_response;
pub mod login_request;
pub mod refresh_request;
pub mod refresh_response;
pub mod register_request;
pub mod register_response;
pub mod user_dto;
