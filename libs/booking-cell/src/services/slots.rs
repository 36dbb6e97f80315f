// libs/booking-cell/src/services/slots.rs
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use shared_models::time::{from_minutes_of_day, minutes_of_day};
use shared_models::{Appointment, BusinessHours};

use crate::models::TimeSlot;
use crate::services::calendar::{is_operable, time_grid, SLOT_STEP_MINUTES};
use crate::services::conflict;

/// Produce the candidate slots for one service on one date.
///
/// Closed days yield an empty list. A grid start whose service end would
/// run past closing time is dropped entirely rather than offered as a
/// partial slot, so a service longer than the whole window yields nothing.
/// Retained starts are flagged unavailable when they collide with an
/// active appointment or, on the current day, have already passed.
pub fn generate(
    hours: &BusinessHours,
    duration_minutes: u32,
    active_appointments: &[Appointment],
    date: NaiveDate,
    now: NaiveDateTime,
) -> Vec<TimeSlot> {
    if !is_operable(hours, date) {
        debug!("Date {} falls outside enabled weekdays", date);
        return Vec::new();
    }

    let close = minutes_of_day(hours.end);
    let is_today = date == now.date();

    time_grid(hours, SLOT_STEP_MINUTES)
        .into_iter()
        .filter_map(|start| {
            let end_minutes = minutes_of_day(start) + duration_minutes;
            if end_minutes > close {
                // Service must fit wholly inside business hours.
                return None;
            }
            let end = from_minutes_of_day(end_minutes)?;

            let occupied = conflict::conflicts(start, end, active_appointments);
            let past = is_today && start < now.time();

            Some(TimeSlot {
                time: start,
                available: !occupied && !past,
            })
        })
        .collect()
}
