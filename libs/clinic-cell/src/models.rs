// libs/clinic-cell/src/models.rs
use serde::{Deserialize, Serialize};

use shared_models::{BusinessHours, Service};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClinicRequest {
    pub name: String,
    pub photo_url: Option<String>,
    pub email: String,
    pub owner_name: String,
    pub owner_email: String,
    pub personal_phone: String,
    pub phone: String,
    pub address: String,
    pub pix_key: Option<String>,
}

/// Partial update; omitted fields keep their current value. Replacing the
/// service list wholesale mirrors how the tenant panel edits the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClinicRequest {
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub personal_phone: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub pix_key: Option<String>,
    pub services: Option<Vec<CreateServiceRequest>>,
    pub business_hours: Option<BusinessHours>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub price: f64,
}

impl CreateServiceRequest {
    pub fn into_service(self) -> Service {
        Service {
            id: shared_utils::new_id(),
            name: self.name,
            description: self.description,
            duration_minutes: self.duration_minutes,
            price: self.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClinicError {
    #[error("Clinic not found")]
    NotFound,

    /// Malformed tenant configuration. Fatal for the write that carried
    /// it; the booking flow never sees hours that failed this check.
    #[error("Invalid business hours: {0}")]
    InvalidBusinessHours(String),

    #[error("Invalid service: {0}")]
    InvalidService(String),
}
