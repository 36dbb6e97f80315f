use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::hhmm;

/// A tenant business. Owns its service catalog and business hours; the
/// booking core only ever reads this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clinic {
    pub id: Uuid,
    pub name: String,
    pub photo_url: Option<String>,
    pub email: String,
    pub owner_name: String,
    pub owner_email: String,
    pub personal_phone: String,
    pub phone: String,
    pub address: String,
    pub pix_key: Option<String>,
    /// Ordered by insertion; positions are meaningful to the tenant's UI.
    pub services: Vec<Service>,
    pub business_hours: BusinessHours,
    pub created_at: DateTime<Utc>,
}

impl Clinic {
    pub fn find_service(&self, service_id: Uuid) -> Option<&Service> {
        self.services.iter().find(|s| s.id == service_id)
    }
}

/// A bookable offering with a fixed duration and price. Immutable from the
/// booking core's perspective during a single booking decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub price: f64,
}

/// Weekly opening window. `days_enabled` holds weekday indices,
/// 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessHours {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    pub days_enabled: Vec<u8>,
}

impl BusinessHours {
    /// Mon-Fri 08:00-18:00, assigned to every newly created clinic.
    pub fn default_hours() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(8, 0, 0).expect("valid opening time"),
            end: NaiveTime::from_hms_opt(18, 0, 0).expect("valid closing time"),
            days_enabled: vec![1, 2, 3, 4, 5],
        }
    }
}
