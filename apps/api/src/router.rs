use std::sync::Arc;

use axum::{routing::get, Router};

use booking_cell::models::BookingState;
use booking_cell::router::booking_routes;
use clinic_cell::router::clinic_routes;
use shared_store::ClinicStore;

pub fn create_router(clinics: Arc<ClinicStore>, booking_state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/", get(|| async { "AgendaFlow API is running!" }))
        .nest("/clinics", clinic_routes(clinics))
        .nest("/appointments", booking_routes(booking_state))
}
