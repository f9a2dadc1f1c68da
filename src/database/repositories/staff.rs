use sqlx::PgPool;

use crate::database::{models::StaffMember, utils::sql};

#[derive(Clone)]
pub struct StaffRepository {
    pool: PgPool,
}

impl StaffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<StaffMember>, sqlx::Error> {
        sqlx::query_as::<_, StaffMember>(&sql(r#"
            SELECT
                id,
                username,
                role,
                status,
                rating
            FROM
                staff_members
            ORDER BY
                username
        "#))
        .fetch_all(&self.pool)
        .await
    }
}
