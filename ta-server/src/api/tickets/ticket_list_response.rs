use crate::api::tickets::ticket_dto::TicketDto;

use serde::Serialize;

/// List of tickets response
#[derive(Debug, Serialize)]
pub struct TicketListResponse {
    pub tickets: Vec<TicketDto>,
}
