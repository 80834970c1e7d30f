use sqlx::PgConnection;

use crate::pkg::internal::{adaptors::results::spec::ResultEntry, evaluator::EvaluationResult};
use crate::prelude::Result;

pub struct ResultMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ResultMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ResultMutator { pool }
    }

    pub async fn create(&mut self, student_id: &str, result: &EvaluationResult) -> Result<ResultEntry> {
        let row = sqlx::query_as::<_, ResultEntry>(
            r#"
            INSERT INTO results (student_id, total_marks, scored_marks, skill_score, placement_status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, student_id, total_marks, scored_marks, skill_score, placement_status, created_at
            "#,
        )
        .bind(student_id)
        .bind(result.total)
        .bind(result.scored)
        .bind(result.skill_score)
        .bind(result.status.as_str())
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
