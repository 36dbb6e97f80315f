// libs/clinic-cell/src/services/clinic.rs
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use shared_models::{BusinessHours, Clinic, Service};
use shared_store::ClinicStore;
use shared_utils::new_id;

use crate::models::{ClinicError, CreateClinicRequest, UpdateClinicRequest};

pub struct ClinicService {
    clinics: Arc<ClinicStore>,
}

impl ClinicService {
    pub fn new(clinics: Arc<ClinicStore>) -> Self {
        Self { clinics }
    }

    /// Register a new clinic with an empty catalog and the default weekday
    /// hours. Tenants adjust both afterwards via update.
    pub async fn create_clinic(&self, request: CreateClinicRequest) -> Clinic {
        let clinic = Clinic {
            id: new_id(),
            name: request.name,
            photo_url: request.photo_url,
            email: request.email,
            owner_name: request.owner_name,
            owner_email: request.owner_email,
            personal_phone: request.personal_phone,
            phone: request.phone,
            address: request.address,
            pix_key: request.pix_key,
            services: Vec::new(),
            business_hours: BusinessHours::default_hours(),
            created_at: Utc::now(),
        };

        info!("Created clinic {} ({})", clinic.id, clinic.name);
        self.clinics.put(clinic.clone()).await;
        clinic
    }

    pub async fn update_clinic(
        &self,
        clinic_id: Uuid,
        request: UpdateClinicRequest,
    ) -> Result<Clinic, ClinicError> {
        let mut clinic = self
            .clinics
            .get(clinic_id)
            .await
            .ok_or(ClinicError::NotFound)?;

        if let Some(hours) = request.business_hours {
            validate_business_hours(&hours)?;
            clinic.business_hours = hours;
        }
        if let Some(services) = request.services {
            let services: Vec<Service> = services
                .into_iter()
                .map(|s| s.into_service())
                .collect();
            validate_services(&services)?;
            clinic.services = services;
        }

        if let Some(name) = request.name {
            clinic.name = name;
        }
        if let Some(photo_url) = request.photo_url {
            clinic.photo_url = Some(photo_url);
        }
        if let Some(email) = request.email {
            clinic.email = email;
        }
        if let Some(owner_name) = request.owner_name {
            clinic.owner_name = owner_name;
        }
        if let Some(owner_email) = request.owner_email {
            clinic.owner_email = owner_email;
        }
        if let Some(personal_phone) = request.personal_phone {
            clinic.personal_phone = personal_phone;
        }
        if let Some(phone) = request.phone {
            clinic.phone = phone;
        }
        if let Some(pix_key) = request.pix_key {
            clinic.pix_key = Some(pix_key);
        }
        if let Some(address) = request.address {
            clinic.address = address;
        }

        debug!("Updated clinic {}", clinic_id);
        self.clinics.put(clinic.clone()).await;
        Ok(clinic)
    }

    pub async fn delete_clinic(&self, clinic_id: Uuid) -> Result<(), ClinicError> {
        self.clinics
            .remove(clinic_id)
            .await
            .map(|_| ())
            .ok_or(ClinicError::NotFound)
    }

    pub async fn get_clinic(&self, clinic_id: Uuid) -> Result<Clinic, ClinicError> {
        self.clinics.get(clinic_id).await.ok_or(ClinicError::NotFound)
    }

    pub async fn list_clinics(&self) -> Vec<Clinic> {
        self.clinics.list().await
    }
}

fn validate_business_hours(hours: &BusinessHours) -> Result<(), ClinicError> {
    if hours.start >= hours.end {
        return Err(ClinicError::InvalidBusinessHours(
            "opening time must be before closing time".to_string(),
        ));
    }
    if hours.days_enabled.iter().any(|&d| d > 6) {
        return Err(ClinicError::InvalidBusinessHours(
            "weekday indices must be between 0 (Sunday) and 6 (Saturday)".to_string(),
        ));
    }
    Ok(())
}

fn validate_services(services: &[Service]) -> Result<(), ClinicError> {
    for service in services {
        if service.duration_minutes == 0 {
            return Err(ClinicError::InvalidService(format!(
                "service '{}' must have a positive duration",
                service.name
            )));
        }
        if service.price < 0.0 {
            return Err(ClinicError::InvalidService(format!(
                "service '{}' cannot have a negative price",
                service.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn rejects_inverted_hours() {
        let hours = BusinessHours {
            start: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            days_enabled: vec![1],
        };
        assert!(matches!(
            validate_business_hours(&hours),
            Err(ClinicError::InvalidBusinessHours(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_weekday() {
        let hours = BusinessHours {
            start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            days_enabled: vec![1, 7],
        };
        assert!(matches!(
            validate_business_hours(&hours),
            Err(ClinicError::InvalidBusinessHours(_))
        ));
    }

    #[test]
    fn default_hours_are_valid() {
        assert!(validate_business_hours(&BusinessHours::default_hours()).is_ok());
    }
}
