use crate::api::vendors::vendor_dto::VendorDto;

use serde::Serialize;

/// Single vendor response
#[derive(Debug, Serialize)]
pub struct VendorResponse {
    pub vendor: VendorDto,
}
