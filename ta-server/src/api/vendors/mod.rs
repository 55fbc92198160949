pub mod create_vendor_request;
pub mod update_vendor_request;
pub mod vendor_dto;
pub mod vendor_list_response;
pub mod vendor_response;
pub mod vendors;
