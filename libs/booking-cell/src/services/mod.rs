pub mod booking;
pub mod calendar;
pub mod conflict;
pub mod slots;
