use crate::api::auth::user_dto::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserDto,
}
