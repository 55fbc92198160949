use crate::api::invoices::invoice_dto::InvoiceDto;

use serde::Serialize;

/// List of invoices response
#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<InvoiceDto>,
}
