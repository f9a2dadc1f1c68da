use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::database::models::{Booking, BookingStatus, CrewAssignment, UpdateBookingStatusInput};
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, AtQuery};
use crate::services::phase_classifier::{self, Phase, PhaseBoard};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetail {
    pub booking: Booking,
    pub phase: Option<Phase>,
    pub next_status: Option<BookingStatus>,
    pub crew_assignment: Option<CrewAssignment>,
}

async fn find_booking(state: &AppState, booking_id: i64) -> Result<Booking, AppError> {
    state
        .store
        .get_booking(booking_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {}", booking_id)))
}

pub async fn get_bookings(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let bookings = state.store.list_bookings().await?;

    Ok(ApiResponse::success(bookings))
}

/// Before/during/after board evaluated at `?at=` or now.
pub async fn get_phase_board(
    state: web::Data<AppState>,
    query: web::Query<AtQuery>,
) -> Result<HttpResponse, AppError> {
    let now = query.instant_or(state.now());
    let bookings = state.store.list_bookings().await?;
    let total = bookings.len();

    let board = PhaseBoard::build(bookings, now);

    if board.is_empty() {
        log::debug!("No booking is in an actionable phase at {}", now);
    } else if board.len() < total {
        log::debug!(
            "{} of {} bookings are outside every phase at {}",
            total - board.len(),
            total,
            now
        );
    }

    Ok(ApiResponse::success(board))
}

pub async fn get_booking(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<AtQuery>,
) -> Result<HttpResponse, AppError> {
    let booking_id = path.into_inner();
    let now = query.instant_or(state.now());

    let booking = find_booking(&state, booking_id).await?;
    let crew_assignment = state
        .store
        .list_assignments()
        .await?
        .into_iter()
        .find(|a| a.booking_id == booking_id);
    let phase = phase_classifier::classify(&booking, now);

    Ok(ApiResponse::success(BookingDetail {
        booking,
        phase,
        next_status: phase.map(Phase::target_status),
        crew_assignment,
    }))
}

/// Sets any status. A status that disagrees with the booking's window is
/// accepted as an administrative override.
pub async fn update_booking_status(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    input: web::Json<UpdateBookingStatusInput>,
) -> Result<HttpResponse, AppError> {
    let booking_id = path.into_inner();
    let status = input.into_inner().status;

    let booking = state
        .store
        .update_booking_status(booking_id, status)
        .await
        .map_err(|e| {
            log::error!("Failed to update status of booking {}: {}", booking_id, e);
            AppError::from(e)
        })?;

    if phase_classifier::classify(&booking, state.now()).is_none() {
        log::warn!(
            "Booking {} set to {} outside its phase window (administrative override)",
            booking_id,
            status
        );
    } else {
        log::info!("Booking {} status updated to {}", booking_id, status);
    }

    Ok(ApiResponse::success(booking))
}

/// Applies the action of the booking's current phase. The phase is taken at
/// server time; `?at=` is not honoured here.
pub async fn advance_booking(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let booking_id = path.into_inner();
    let now = state.now();

    let booking = find_booking(&state, booking_id).await?;

    let phase = phase_classifier::classify(&booking, now).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Booking {} ({}) is not in an actionable phase",
            booking_id, booking.status
        ))
    })?;
    let target = phase.target_status();

    let updated = state
        .store
        .update_booking_status(booking_id, target)
        .await
        .map_err(|e| {
            log::error!("Failed to advance booking {}: {}", booking_id, e);
            AppError::from(e)
        })?;

    log::info!(
        "Booking {} advanced from {} to {} ({} phase)",
        booking_id,
        booking.status,
        target,
        phase
    );

    Ok(ApiResponse::success(updated))
}
