//! Tenant management cell: clinic and service catalog CRUD.
//!
//! The booking cell consumes this configuration read-only; nothing here
//! touches appointments.

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{ClinicError, CreateClinicRequest, CreateServiceRequest, UpdateClinicRequest};
pub use router::clinic_routes;
pub use services::clinic::ClinicService;
