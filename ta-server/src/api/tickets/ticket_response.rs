use crate::api::tickets::ticket_dto::TicketDto;

use serde::Serialize;

/// Single ticket response
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub ticket: TicketDto,
}
