// libs/booking-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers;
use crate::models::BookingState;

pub fn booking_routes(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/availability", get(handlers::get_availability))
        .route("/", post(handlers::create_appointment))
        .route("/clinic/{clinic_id}", get(handlers::get_clinic_appointments))
        .route(
            "/{appointment_id}/status",
            patch(handlers::update_appointment_status),
        )
        .with_state(state)
}
