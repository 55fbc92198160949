use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendorRequest {
    pub name: String,

    /// "Airline", "Hotel", "Tour Operator" and the like
    #[serde(default)]
    pub vendor_type: Option<String>,

    #[serde(default)]
    pub contact_person: Option<String>,

    #[serde(default)]
    pub contact_info: Option<String>,

    #[serde(default)]
    pub payment_terms: Option<String>,
}
