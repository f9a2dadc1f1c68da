use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{
    models::{AssignmentStatus, CrewAssignment, NewCrewAssignment},
    utils::sql,
};

#[derive(Clone)]
pub struct CrewAssignmentRepository {
    pool: PgPool,
}

impl CrewAssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<CrewAssignment>, sqlx::Error> {
        sqlx::query_as::<_, CrewAssignment>(&sql(r#"
            SELECT
                id,
                booking_id,
                captain_id,
                first_mate_id,
                crew_member_ids,
                briefing_time,
                special_instructions,
                status,
                created_at,
                updated_at
            FROM
                crew_assignments
            ORDER BY
                briefing_time
        "#))
        .fetch_all(&self.pool)
        .await
    }

    /// Relies on the `UNIQUE (booking_id)` constraint; a second insert for the
    /// same booking fails with a unique violation.
    pub async fn create(&self, input: NewCrewAssignment) -> Result<CrewAssignment, sqlx::Error> {
        sqlx::query_as::<_, CrewAssignment>(&sql(r#"
            INSERT INTO
                crew_assignments (
                    id,
                    booking_id,
                    captain_id,
                    first_mate_id,
                    crew_member_ids,
                    briefing_time,
                    special_instructions,
                    status
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                booking_id,
                captain_id,
                first_mate_id,
                crew_member_ids,
                briefing_time,
                special_instructions,
                status,
                created_at,
                updated_at
        "#))
        .bind(Uuid::new_v4())
        .bind(input.booking_id)
        .bind(input.captain_id)
        .bind(input.first_mate_id)
        .bind(input.crew_member_ids)
        .bind(input.briefing_time)
        .bind(input.assignment_notes)
        .bind(AssignmentStatus::Confirmed)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: AssignmentStatus,
    ) -> Result<Option<CrewAssignment>, sqlx::Error> {
        sqlx::query_as::<_, CrewAssignment>(&sql(r#"
            UPDATE
                crew_assignments
            SET
                status = ?,
                updated_at = NOW()
            WHERE
                id = ?
            RETURNING
                id,
                booking_id,
                captain_id,
                first_mate_id,
                crew_member_ids,
                briefing_time,
                special_instructions,
                status,
                created_at,
                updated_at
        "#))
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
