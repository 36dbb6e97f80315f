// libs/booking-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{
    AvailabilityQuery, BookingError, BookingState, CreateAppointmentRequest, UpdateStatusRequest,
};
use crate::services::booking::BookingService;

fn map_booking_error(e: BookingError) -> AppError {
    match e {
        BookingError::ClinicNotFound => AppError::NotFound("Clinic not found".to_string()),
        BookingError::ServiceNotFound => AppError::NotFound("Service not found".to_string()),
        BookingError::AppointmentNotFound => {
            AppError::NotFound("Appointment not found".to_string())
        }
        BookingError::SlotUnavailable => {
            AppError::Conflict("Requested slot is no longer available".to_string())
        }
    }
}

/// GET /appointments/availability?clinic_id=&service_id=&date=YYYY-MM-DD
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Value>, AppError> {
    let service = BookingService::new(&state);

    let slots = service
        .get_availability(query.clinic_id, query.service_id, query.date)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(json!({
        "date": query.date,
        "slots": slots
    })))
}

/// POST /appointments
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = BookingService::new(&state);

    let appointment = service.book(request).await.map_err(map_booking_error)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "appointment": appointment,
            "message": "Appointment booked successfully"
        })),
    ))
}

/// GET /appointments/clinic/{clinic_id}
#[axum::debug_handler]
pub async fn get_clinic_appointments(
    State(state): State<Arc<BookingState>>,
    Path(clinic_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = BookingService::new(&state);

    let appointments = service
        .list_clinic_appointments(clinic_id)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(json!({ "appointments": appointments })))
}

/// PATCH /appointments/{appointment_id}/status
#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<Arc<BookingState>>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let service = BookingService::new(&state);

    let appointment = service
        .update_status(appointment_id, request.status, request.is_paid)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment
    })))
}
