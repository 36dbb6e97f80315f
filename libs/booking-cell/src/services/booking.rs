// libs/booking-cell/src/services/booking.rs
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_models::time::{from_minutes_of_day, minutes_of_day};
use shared_models::{Appointment, AppointmentStatus, Clinic, PaymentType, Service};
use shared_store::{AppointmentStore, ClinicStore};
use shared_utils::{confirmation_code, new_id};

use crate::models::{BookingError, BookingState, CreateAppointmentRequest, TimeSlot};
use crate::services::{conflict, slots};

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// The availability & booking engine. Availability queries are advisory
/// snapshots; only [`book`] and [`update_status`], which re-validate under
/// the per-(clinic, date) day lock, are authoritative.
///
/// [`book`]: BookingService::book
/// [`update_status`]: BookingService::update_status
pub struct BookingService {
    clinics: Arc<ClinicStore>,
    appointments: Arc<AppointmentStore>,
    now_fn: fn() -> NaiveDateTime,
}

impl BookingService {
    pub fn new(state: &BookingState) -> Self {
        Self {
            clinics: Arc::clone(&state.clinics),
            appointments: Arc::clone(&state.appointments),
            now_fn: local_now,
        }
    }

    /// Same service with a fixed clock, for deterministic tests.
    pub fn with_clock(state: &BookingState, now_fn: fn() -> NaiveDateTime) -> Self {
        Self {
            clinics: Arc::clone(&state.clinics),
            appointments: Arc::clone(&state.appointments),
            now_fn,
        }
    }

    /// Snapshot of bookable slots for one service on one date. Runs
    /// unsynchronized against the store; staleness is resolved at commit
    /// time by [`book`](BookingService::book).
    pub async fn get_availability(
        &self,
        clinic_id: Uuid,
        service_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, BookingError> {
        let (clinic, service) = self.resolve_service(clinic_id, service_id).await?;

        let active = self.appointments.list_active(clinic_id, date).await;
        let slots = slots::generate(
            &clinic.business_hours,
            service.duration_minutes,
            &active,
            date,
            (self.now_fn)(),
        );

        debug!(
            "Availability for clinic {} service {} on {}: {} slots",
            clinic_id,
            service_id,
            date,
            slots.len()
        );
        Ok(slots)
    }

    /// Commit a booking, or reject it.
    ///
    /// The requested start is re-validated against the current store state
    /// under the day lock; a slot list the caller fetched earlier is never
    /// trusted. On `SlotUnavailable` no retry is attempted and no record is
    /// written; the customer must pick again.
    pub async fn book(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, BookingError> {
        let lock = self
            .appointments
            .day_lock(request.clinic_id, request.date)
            .await;
        let _guard = lock.lock().await;

        // Resolve configuration under the lock so the end time always uses
        // the service duration current at commit time.
        let (clinic, service) = self
            .resolve_service(request.clinic_id, request.service_id)
            .await?;

        let active = self
            .appointments
            .list_active(request.clinic_id, request.date)
            .await;
        let current = slots::generate(
            &clinic.business_hours,
            service.duration_minutes,
            &active,
            request.date,
            (self.now_fn)(),
        );

        let requested_is_open = current
            .iter()
            .any(|slot| slot.time == request.start_time && slot.available);
        if !requested_is_open {
            warn!(
                "Slot {} on {} rejected at commit time for clinic {}",
                request.start_time, request.date, request.clinic_id
            );
            return Err(BookingError::SlotUnavailable);
        }

        // End time comes from the live service duration, never from caller
        // input; durations can change between query and commit.
        let end_minutes = minutes_of_day(request.start_time) + service.duration_minutes;
        let end_time = from_minutes_of_day(end_minutes).ok_or(BookingError::SlotUnavailable)?;

        let appointment = Appointment {
            id: new_id(),
            clinic_id: request.clinic_id,
            service_id: request.service_id,
            client_name: request.client_name,
            client_phone: request.client_phone,
            date: request.date,
            start_time: request.start_time,
            end_time,
            status: AppointmentStatus::Confirmed,
            payment_type: request.payment_type,
            is_paid: request.payment_type == PaymentType::Prepaid,
            confirmation_code: confirmation_code(),
        };

        self.appointments.append(appointment.clone()).await;

        info!(
            "Appointment {} booked for clinic {} on {} at {}",
            appointment.id, appointment.clinic_id, appointment.date, appointment.start_time
        );
        Ok(appointment)
    }

    /// Staff status/payment toggle. Reapplying the current status is a
    /// no-op. Reactivating a cancelled appointment is itself a booking
    /// attempt: its interval is re-checked against the active set under the
    /// day lock and rejected with `SlotUnavailable` on overlap.
    pub async fn update_status(
        &self,
        appointment_id: Uuid,
        status: AppointmentStatus,
        is_paid: Option<bool>,
    ) -> Result<Appointment, BookingError> {
        let current = self
            .appointments
            .get(appointment_id)
            .await
            .ok_or(BookingError::AppointmentNotFound)?;

        let lock = self
            .appointments
            .day_lock(current.clinic_id, current.date)
            .await;
        let _guard = lock.lock().await;

        // Re-read under the lock; a concurrent update may have won.
        let current = self
            .appointments
            .get(appointment_id)
            .await
            .ok_or(BookingError::AppointmentNotFound)?;

        let reactivating =
            current.status == AppointmentStatus::Cancelled && status != AppointmentStatus::Cancelled;
        if reactivating {
            let active = self
                .appointments
                .list_active(current.clinic_id, current.date)
                .await;
            if conflict::conflicts(current.start_time, current.end_time, &active) {
                warn!(
                    "Reactivation of appointment {} rejected: interval re-booked",
                    appointment_id
                );
                return Err(BookingError::SlotUnavailable);
            }
        }

        let updated = self
            .appointments
            .update(appointment_id, |a| {
                a.status = status;
                if let Some(paid) = is_paid {
                    a.is_paid = paid;
                }
            })
            .await
            .ok_or(BookingError::AppointmentNotFound)?;

        info!(
            "Appointment {} status set to {} (paid: {})",
            updated.id, updated.status, updated.is_paid
        );
        Ok(updated)
    }

    /// Every appointment of a clinic for staff display, cancelled included.
    pub async fn list_clinic_appointments(
        &self,
        clinic_id: Uuid,
    ) -> Result<Vec<Appointment>, BookingError> {
        if self.clinics.get(clinic_id).await.is_none() {
            return Err(BookingError::ClinicNotFound);
        }
        Ok(self.appointments.list_for_clinic(clinic_id).await)
    }

    /// Latest tenant configuration for the booking decision. Services
    /// added or removed after earlier appointments are reflected here.
    async fn resolve_service(
        &self,
        clinic_id: Uuid,
        service_id: Uuid,
    ) -> Result<(Clinic, Service), BookingError> {
        let clinic = self
            .clinics
            .get(clinic_id)
            .await
            .ok_or(BookingError::ClinicNotFound)?;
        let service = clinic
            .find_service(service_id)
            .cloned()
            .ok_or(BookingError::ServiceNotFound)?;
        Ok((clinic, service))
    }
}
