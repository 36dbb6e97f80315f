//! Availability & booking engine.
//!
//! Turns a clinic's business hours and existing appointments into bookable
//! time slots, and commits new bookings without double-booking. Everything
//! else (tenant CRUD, auth, notifications) lives in other cells.

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{BookingError, BookingState, CreateAppointmentRequest, TimeSlot};
pub use router::booking_routes;
pub use services::booking::BookingService;
