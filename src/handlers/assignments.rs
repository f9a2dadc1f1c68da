use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::AppState;
use crate::database::models::UpdateAssignmentStatusInput;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::{CrewCandidates, CrewSelection, unassigned_bookings};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    pub booking_id: i64,
    #[serde(flatten)]
    pub selection: CrewSelection,
}

pub async fn get_assignments(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let assignments = state.store.list_assignments().await?;

    Ok(ApiResponse::success(assignments))
}

/// Bookings that still need a crew.
pub async fn get_unassigned_bookings(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let bookings = state.store.list_bookings().await?;
    let assignments = state.store.list_assignments().await?;

    Ok(ApiResponse::success(unassigned_bookings(
        bookings,
        &assignments,
    )))
}

pub async fn create_assignment(
    state: web::Data<AppState>,
    input: web::Json<CreateAssignmentRequest>,
) -> Result<HttpResponse, AppError> {
    let CreateAssignmentRequest {
        booking_id,
        selection,
    } = input.into_inner();

    let booking = state
        .store
        .get_booking(booking_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {}", booking_id)))?;

    let staff = state.store.list_staff().await?;
    let candidates = CrewCandidates::from_roster(&staff);
    let new_assignment = selection.into_assignment(&booking, &candidates)?;

    let assignment = state
        .store
        .create_assignment(new_assignment)
        .await
        .map_err(|e| {
            log::error!("Failed to create crew assignment for booking {}: {}", booking_id, e);
            AppError::from(e)
        })?;

    log::info!(
        "Crew assignment {} created for booking {} (roster {:?})",
        assignment.id,
        booking_id,
        assignment.roster()
    );

    Ok(ApiResponse::created(assignment))
}

pub async fn update_assignment_status(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    input: web::Json<UpdateAssignmentStatusInput>,
) -> Result<HttpResponse, AppError> {
    let assignment_id = path.into_inner();
    let status = input.into_inner().status;

    let assignment = state
        .store
        .update_assignment_status(assignment_id, status)
        .await
        .map_err(|e| {
            log::error!("Failed to update crew assignment {}: {}", assignment_id, e);
            AppError::from(e)
        })?;

    log::info!("Crew assignment {} marked {}", assignment_id, status);

    Ok(ApiResponse::success(assignment))
}
