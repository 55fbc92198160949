use crate::api::auth::user_dto::UserDto;

use serde::Serialize;

/// List of agents response
#[derive(Debug, Serialize)]
pub struct AgentListResponse {
    pub agents: Vec<UserDto>,
}
