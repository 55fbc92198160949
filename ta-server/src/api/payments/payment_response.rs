use crate::api::payments::payment_dto::PaymentDto;

use serde::Serialize;

/// Single payment response
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub payment: PaymentDto,
}
