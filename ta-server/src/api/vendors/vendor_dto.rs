use ta_core::Vendor;

use serde::Serialize;

/// Vendor DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDto {
    pub id: String,
    pub name: String,
    pub vendor_type: Option<String>,
    pub contact_person: Option<String>,
    pub contact_info: Option<String>,
    pub payment_terms: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Vendor> for VendorDto {
    fn from(v: Vendor) -> Self {
        Self {
            id: v.id.to_string(),
            name: v.name,
            vendor_type: v.vendor_type,
            contact_person: v.contact_person,
            contact_info: v.contact_info,
            payment_terms: v.payment_terms,
            created_at: v.created_at.timestamp(),
            updated_at: v.updated_at.timestamp(),
        }
    }
}
