use crate::api::leads::lead_dto::LeadDto;

use serde::Serialize;

/// List of leads response
#[derive(Debug, Serialize)]
pub struct LeadListResponse {
    pub leads: Vec<LeadDto>,
}
