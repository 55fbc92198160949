pub mod reset_password_request;
pub mod update_profile_request;
pub mod user_response;
pub mod users;
