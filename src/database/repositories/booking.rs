use sqlx::PgPool;

use crate::database::{
    models::{Booking, BookingStatus},
    utils::sql,
};

#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Booking>, sqlx::Error> {
        sqlx::query_as::<_, Booking>(&sql(r#"
            SELECT
                id,
                member_id,
                yacht_id,
                start_time,
                end_time,
                guest_count,
                experience_type,
                special_requests,
                status,
                booking_date
            FROM
                bookings
            ORDER BY
                start_time
        "#))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, sqlx::Error> {
        sqlx::query_as::<_, Booking>(&sql(r#"
            SELECT
                id,
                member_id,
                yacht_id,
                start_time,
                end_time,
                guest_count,
                experience_type,
                special_requests,
                status,
                booking_date
            FROM
                bookings
            WHERE
                id = ?
        "#))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<Option<Booking>, sqlx::Error> {
        sqlx::query_as::<_, Booking>(&sql(r#"
            UPDATE
                bookings
            SET
                status = ?,
                updated_at = NOW()
            WHERE
                id = ?
            RETURNING
                id,
                member_id,
                yacht_id,
                start_time,
                end_time,
                guest_count,
                experience_type,
                special_requests,
                status,
                booking_date
        "#))
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
