// libs/booking-cell/src/models.rs
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::time::hhmm;
use shared_models::{AppointmentStatus, PaymentType};
use shared_store::{AppointmentStore, ClinicStore};

/// Shared state handed to the booking router. Stores are owned by the
/// binary and shared with the clinic cell.
#[derive(Clone)]
pub struct BookingState {
    pub clinics: Arc<ClinicStore>,
    pub appointments: Arc<AppointmentStore>,
}

/// A candidate start time for one service on one date. Recomputed on every
/// availability query; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub available: bool,
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub clinic_id: Uuid,
    pub service_id: Uuid,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    pub client_name: String,
    pub client_phone: String,
    pub payment_type: PaymentType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub clinic_id: Uuid,
    pub service_id: Uuid,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
    pub is_paid: Option<bool>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Clinic not found")]
    ClinicNotFound,

    /// The service was removed from the clinic's catalog; the caller must
    /// re-fetch the catalog.
    #[error("Service not found")]
    ServiceNotFound,

    #[error("Appointment not found")]
    AppointmentNotFound,

    /// Normal outcome under contention: the requested start did not survive
    /// re-validation at commit time. The caller re-queries availability and
    /// lets the customer choose again; we never pick a different slot on
    /// their behalf.
    #[error("Requested slot is not available")]
    SlotUnavailable,
}
