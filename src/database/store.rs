use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{
    AssignmentStatus, Booking, BookingStatus, CrewAssignment, InterventionRecord,
    NewCrewAssignment, NewIntervention, StaffMember,
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Backing store for the charter coordinator.
///
/// Implementations own the one-assignment-per-booking rule: a second
/// `create_assignment` for the same booking must fail with
/// [`StoreError::Conflict`], no matter how many callers race for it.
#[async_trait]
pub trait CharterStore: Send + Sync {
    async fn list_bookings(&self) -> Result<Vec<Booking>, StoreError>;

    async fn get_booking(&self, booking_id: i64) -> Result<Option<Booking>, StoreError>;

    async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<Booking, StoreError>;

    async fn list_staff(&self) -> Result<Vec<StaffMember>, StoreError>;

    async fn list_assignments(&self) -> Result<Vec<CrewAssignment>, StoreError>;

    async fn create_assignment(
        &self,
        input: NewCrewAssignment,
    ) -> Result<CrewAssignment, StoreError>;

    async fn update_assignment_status(
        &self,
        assignment_id: Uuid,
        status: AssignmentStatus,
    ) -> Result<CrewAssignment, StoreError>;

    async fn create_intervention(
        &self,
        input: NewIntervention,
    ) -> Result<InterventionRecord, StoreError>;

    /// Oldest first.
    async fn list_interventions(
        &self,
        booking_id: i64,
    ) -> Result<Vec<InterventionRecord>, StoreError>;
}
