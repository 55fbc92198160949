use crate::api::invoices::invoice_dto::InvoiceDto;

use serde::Serialize;

/// Single invoice response
#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub invoice: InvoiceDto,
}
