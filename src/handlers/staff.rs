use actix_web::{HttpResponse, web};

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::CrewCandidates;

pub async fn get_staff(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let staff = state.store.list_staff().await?;

    Ok(ApiResponse::success(staff))
}

// Available captains, first mates and crew members
pub async fn get_candidates(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let staff = state.store.list_staff().await?;

    Ok(ApiResponse::success(CrewCandidates::from_roster(&staff)))
}
