pub mod create_lead_request;
pub mod lead_dto;
pub mod lead_list_response;
pub mod lead_response;
pub mod leads;
pub mod update_lead_request;
