use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::AppState;
use crate::database::models::InterventionAction;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct CreateInterventionRequest {
    pub action: InterventionAction,
    pub notes: String,
}

async fn ensure_booking_exists(state: &AppState, booking_id: i64) -> Result<(), AppError> {
    match state.store.get_booking(booking_id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound(format!("Booking {}", booking_id))),
    }
}

pub async fn create_intervention(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    input: web::Json<CreateInterventionRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let booking_id = path.into_inner();

    ensure_booking_exists(&state, booking_id).await?;

    let record = state
        .intervention_logger
        .log_intervention(booking_id, input.action, &input.notes, &req)
        .await?;

    Ok(ApiResponse::created(record))
}

pub async fn get_interventions(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let booking_id = path.into_inner();

    ensure_booking_exists(&state, booking_id).await?;

    let records = state.intervention_logger.history(booking_id).await?;

    Ok(ApiResponse::success(records))
}
