pub mod appointment;
pub mod clinic;
pub mod error;
pub mod time;

pub use appointment::{Appointment, AppointmentStatus, PaymentType};
pub use clinic::{BusinessHours, Clinic, Service};
pub use error::AppError;
