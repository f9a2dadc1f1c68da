use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{
    models::{InterventionRecord, NewIntervention},
    utils::sql,
};

#[derive(Clone)]
pub struct InterventionRepository {
    pool: PgPool,
}

impl InterventionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert only. Records are never updated or deleted.
    pub async fn create(&self, input: NewIntervention) -> Result<InterventionRecord, sqlx::Error> {
        sqlx::query_as::<_, InterventionRecord>(&sql(r#"
            INSERT INTO
                booking_interventions (
                    id,
                    booking_id,
                    action,
                    notes,
                    correlation_id,
                    user_agent
                )
            VALUES
                (?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                booking_id,
                action,
                notes,
                correlation_id,
                user_agent,
                created_at
        "#))
        .bind(Uuid::new_v4())
        .bind(input.booking_id)
        .bind(input.action)
        .bind(input.notes)
        .bind(input.correlation_id)
        .bind(input.user_agent)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn find_by_booking(
        &self,
        booking_id: i64,
    ) -> Result<Vec<InterventionRecord>, sqlx::Error> {
        sqlx::query_as::<_, InterventionRecord>(&sql(r#"
            SELECT
                id,
                booking_id,
                action,
                notes,
                correlation_id,
                user_agent,
                created_at
            FROM
                booking_interventions
            WHERE
                booking_id = ?
            ORDER BY
                created_at,
                id
        "#))
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await
    }
}
