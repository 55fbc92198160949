use crate::api::vendors::vendor_dto::VendorDto;

use serde::Serialize;

/// List of vendors response
#[derive(Debug, Serialize)]
pub struct VendorListResponse {
    pub vendors: Vec<VendorDto>,
}
