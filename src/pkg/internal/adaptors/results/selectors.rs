use sqlx::PgConnection;

use crate::pkg::internal::adaptors::results::spec::ResultEntry;
use crate::prelude::Result;

pub struct ResultSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ResultSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ResultSelector { pool }
    }

    pub async fn get_results_for_student(&mut self, student_id: &str) -> Result<Vec<ResultEntry>> {
        let rows = sqlx::query_as::<_, ResultEntry>(
            "SELECT id, student_id, total_marks, scored_marks, skill_score, placement_status, created_at
             FROM results WHERE student_id = $1 ORDER BY id",
        )
        .bind(student_id)
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}
