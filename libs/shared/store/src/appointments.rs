use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

use shared_models::{Appointment, AppointmentStatus};

/// One calendar day of one clinic: the unit of contention for bookings.
pub type DayKey = (Uuid, NaiveDate);

/// Appointment storage keyed by (clinic, date), with a secondary index from
/// appointment id to its day bucket.
///
/// The store itself does not enforce the no-double-booking invariant; the
/// booking transaction does, by holding the day lock from [`day_lock`]
/// across its read-check-append sequence. Plain reads never take that lock,
/// so availability queries stay advisory snapshots.
///
/// [`day_lock`]: AppointmentStore::day_lock
#[derive(Default)]
pub struct AppointmentStore {
    days: RwLock<HashMap<DayKey, Vec<Appointment>>>,
    by_id: RwLock<HashMap<Uuid, DayKey>>,
    day_locks: Mutex<HashMap<DayKey, Arc<Mutex<()>>>>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The serialization point for one clinic-day. Guards are created on
    /// first use and retained for the life of the process; booking volume
    /// per day is small enough that the registry never needs eviction.
    pub async fn day_lock(&self, clinic_id: Uuid, date: NaiveDate) -> Arc<Mutex<()>> {
        let mut locks = self.day_locks.lock().await;
        locks
            .entry((clinic_id, date))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Append a freshly booked appointment. Caller is expected to hold the
    /// day lock for the appointment's (clinic, date).
    pub async fn append(&self, appointment: Appointment) {
        let key = (appointment.clinic_id, appointment.date);
        debug!(
            "Appending appointment {} for clinic {} on {}",
            appointment.id, appointment.clinic_id, appointment.date
        );
        self.by_id.write().await.insert(appointment.id, key);
        let mut days = self.days.write().await;
        let bucket = days.entry(key).or_default();
        bucket.push(appointment);
        bucket.sort_by_key(|a| a.start_time);
    }

    pub async fn get(&self, appointment_id: Uuid) -> Option<Appointment> {
        let key = *self.by_id.read().await.get(&appointment_id)?;
        self.days
            .read()
            .await
            .get(&key)?
            .iter()
            .find(|a| a.id == appointment_id)
            .cloned()
    }

    /// Active appointments (status != cancelled) for a clinic-day, in
    /// ascending start-time order. Only these occupy calendar space.
    pub async fn list_active(&self, clinic_id: Uuid, date: NaiveDate) -> Vec<Appointment> {
        self.days
            .read()
            .await
            .get(&(clinic_id, date))
            .map(|bucket| {
                bucket
                    .iter()
                    .filter(|a| a.status != AppointmentStatus::Cancelled)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every appointment of a clinic regardless of status, ordered by
    /// date then start time. Staff calendars show cancelled entries too.
    pub async fn list_for_clinic(&self, clinic_id: Uuid) -> Vec<Appointment> {
        let days = self.days.read().await;
        let mut appointments: Vec<Appointment> = days
            .iter()
            .filter(|((clinic, _), _)| *clinic == clinic_id)
            .flat_map(|(_, bucket)| bucket.iter().cloned())
            .collect();
        appointments.sort_by_key(|a| (a.date, a.start_time));
        appointments
    }

    /// Apply an in-place mutation to one appointment, returning the updated
    /// record. Caller is expected to hold the day lock when the mutation
    /// affects calendar occupancy (status changes).
    pub async fn update<F>(&self, appointment_id: Uuid, mutate: F) -> Option<Appointment>
    where
        F: FnOnce(&mut Appointment),
    {
        let key = *self.by_id.read().await.get(&appointment_id)?;
        let mut days = self.days.write().await;
        let appointment = days
            .get_mut(&key)?
            .iter_mut()
            .find(|a| a.id == appointment_id)?;
        mutate(appointment);
        Some(appointment.clone())
    }
}
