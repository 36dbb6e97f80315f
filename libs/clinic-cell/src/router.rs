// libs/clinic-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_store::ClinicStore;

use crate::handlers;

pub fn clinic_routes(clinics: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", post(handlers::create_clinic))
        .route("/", get(handlers::list_clinics))
        .route("/{clinic_id}", get(handlers::get_clinic))
        .route("/{clinic_id}", put(handlers::update_clinic))
        .route("/{clinic_id}", delete(handlers::delete_clinic))
        .with_state(clinics)
}
