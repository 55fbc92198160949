use crate::api::auth::user_dto::UserDto;

use serde::Serialize;

/// Single agent response
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub agent: UserDto,
}
