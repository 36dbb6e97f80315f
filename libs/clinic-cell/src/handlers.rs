// libs/clinic-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::ClinicStore;

use crate::models::{ClinicError, CreateClinicRequest, UpdateClinicRequest};
use crate::services::clinic::ClinicService;

fn map_clinic_error(e: ClinicError) -> AppError {
    match e {
        ClinicError::NotFound => AppError::NotFound("Clinic not found".to_string()),
        ClinicError::InvalidBusinessHours(msg) => AppError::ValidationError(msg),
        ClinicError::InvalidService(msg) => AppError::ValidationError(msg),
    }
}

/// POST /clinics
#[axum::debug_handler]
pub async fn create_clinic(
    State(clinics): State<Arc<ClinicStore>>,
    Json(request): Json<CreateClinicRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = ClinicService::new(clinics);
    let clinic = service.create_clinic(request).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "clinic": clinic
        })),
    ))
}

/// GET /clinics
#[axum::debug_handler]
pub async fn list_clinics(
    State(clinics): State<Arc<ClinicStore>>,
) -> Result<Json<Value>, AppError> {
    let service = ClinicService::new(clinics);
    let clinics = service.list_clinics().await;

    Ok(Json(json!({ "clinics": clinics })))
}

/// GET /clinics/{clinic_id}
#[axum::debug_handler]
pub async fn get_clinic(
    State(clinics): State<Arc<ClinicStore>>,
    Path(clinic_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = ClinicService::new(clinics);
    let clinic = service
        .get_clinic(clinic_id)
        .await
        .map_err(map_clinic_error)?;

    Ok(Json(json!({ "clinic": clinic })))
}

/// PUT /clinics/{clinic_id}
#[axum::debug_handler]
pub async fn update_clinic(
    State(clinics): State<Arc<ClinicStore>>,
    Path(clinic_id): Path<Uuid>,
    Json(request): Json<UpdateClinicRequest>,
) -> Result<Json<Value>, AppError> {
    let service = ClinicService::new(clinics);
    let clinic = service
        .update_clinic(clinic_id, request)
        .await
        .map_err(map_clinic_error)?;

    Ok(Json(json!({
        "success": true,
        "clinic": clinic
    })))
}

/// DELETE /clinics/{clinic_id}
#[axum::debug_handler]
pub async fn delete_clinic(
    State(clinics): State<Arc<ClinicStore>>,
    Path(clinic_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = ClinicService::new(clinics);
    service
        .delete_clinic(clinic_id)
        .await
        .map_err(map_clinic_error)?;

    Ok(Json(json!({ "success": true })))
}
