use crate::api::payments::payment_dto::PaymentDto;

use serde::Serialize;

/// List of payments response
#[derive(Debug, Serialize)]
pub struct PaymentListResponse {
    pub payments: Vec<PaymentDto>,
}
