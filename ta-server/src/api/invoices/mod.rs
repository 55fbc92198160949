pub mod create_invoice_request;
pub mod invoice_dto;
pub mod invoice_list_response;
pub mod invoice_response;
pub mod invoices;
pub mod update_invoice_request;
