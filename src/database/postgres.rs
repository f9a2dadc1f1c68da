use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{
    models::{
        AssignmentStatus, Booking, BookingStatus, CrewAssignment, InterventionRecord,
        NewCrewAssignment, NewIntervention, StaffMember,
    },
    repositories::{
        BookingRepository, CrewAssignmentRepository, InterventionRepository, StaffRepository,
    },
    store::{CharterStore, StoreError},
};

/// `CharterStore` over PostgreSQL. Assignment uniqueness comes from the
/// `crew_assignments.booking_id` unique constraint.
#[derive(Clone)]
pub struct PgCharterStore {
    bookings: BookingRepository,
    staff: StaffRepository,
    assignments: CrewAssignmentRepository,
    interventions: InterventionRepository,
}

impl PgCharterStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            bookings: BookingRepository::new(pool.clone()),
            staff: StaffRepository::new(pool.clone()),
            assignments: CrewAssignmentRepository::new(pool.clone()),
            interventions: InterventionRepository::new(pool),
        }
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

fn violated_constraint(error: &sqlx::Error) -> Option<&str> {
    match error {
        sqlx::Error::Database(db) => db.constraint(),
        _ => None,
    }
}

/// Names the row a crew assignment insert referenced but could not find.
fn missing_assignment_reference(constraint: Option<&str>, input: &NewCrewAssignment) -> String {
    match constraint {
        Some("crew_assignments_captain_fk") => format!("Captain {}", input.captain_id),
        Some("crew_assignments_first_mate_fk") => match input.first_mate_id {
            Some(id) => format!("First mate {}", id),
            None => "First mate".to_string(),
        },
        _ => format!("Booking {}", input.booking_id),
    }
}

#[async_trait]
impl CharterStore for PgCharterStore {
    async fn list_bookings(&self) -> Result<Vec<Booking>, StoreError> {
        Ok(self.bookings.find_all().await?)
    }

    async fn get_booking(&self, booking_id: i64) -> Result<Option<Booking>, StoreError> {
        Ok(self.bookings.find_by_id(booking_id).await?)
    }

    async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<Booking, StoreError> {
        self.bookings
            .update_status(booking_id, status)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Booking {}", booking_id)))
    }

    async fn list_staff(&self) -> Result<Vec<StaffMember>, StoreError> {
        Ok(self.staff.find_all().await?)
    }

    async fn list_assignments(&self) -> Result<Vec<CrewAssignment>, StoreError> {
        Ok(self.assignments.find_all().await?)
    }

    async fn create_assignment(
        &self,
        input: NewCrewAssignment,
    ) -> Result<CrewAssignment, StoreError> {
        self.assignments.create(input.clone()).await.map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::Conflict(format!(
                    "Booking {} already has a crew assignment",
                    input.booking_id
                ))
            } else if is_foreign_key_violation(&e) {
                StoreError::NotFound(missing_assignment_reference(
                    violated_constraint(&e),
                    &input,
                ))
            } else {
                StoreError::Database(e)
            }
        })
    }

    async fn update_assignment_status(
        &self,
        assignment_id: Uuid,
        status: AssignmentStatus,
    ) -> Result<CrewAssignment, StoreError> {
        self.assignments
            .update_status(assignment_id, status)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Crew assignment {}", assignment_id)))
    }

    async fn create_intervention(
        &self,
        input: NewIntervention,
    ) -> Result<InterventionRecord, StoreError> {
        let booking_id = input.booking_id;

        self.interventions.create(input).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                StoreError::NotFound(format!("Booking {}", booking_id))
            } else {
                StoreError::Database(e)
            }
        })
    }

    async fn list_interventions(
        &self,
        booking_id: i64,
    ) -> Result<Vec<InterventionRecord>, StoreError> {
        Ok(self.interventions.find_by_booking(booking_id).await?)
    }
}
