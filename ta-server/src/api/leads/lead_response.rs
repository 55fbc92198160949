use crate::api::leads::lead_dto::LeadDto;

use serde::Serialize;

/// Single lead response
#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub lead: LeadDto,
}
