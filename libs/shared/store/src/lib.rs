//! In-memory keyed stores backing the cells.
//!
//! Appointments are partitioned by (clinic, date) so a booking commit can
//! serialize against exactly the day it touches while availability reads
//! stay lock-free snapshots.

pub mod appointments;
pub mod clinics;

pub use appointments::AppointmentStore;
pub use clinics::ClinicStore;
