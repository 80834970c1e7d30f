use sqlx::PgConnection;

use crate::{
    pkg::internal::{
        adaptors::questions::spec::QuestionEntry,
        evaluator::Question,
    },
    prelude::Result,
};

pub struct QuestionSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> QuestionSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        QuestionSelector { pool }
    }

    pub async fn get_all(&mut self) -> Result<Vec<QuestionEntry>> {
        let rows = sqlx::query_as::<_, QuestionEntry>(
            "SELECT id, marks, category, correct_answer FROM questions ORDER BY id",
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    /// Fetches the whole bank and validates every row; a single bad row
    /// fails the lot.
    pub async fn get_question_bank(&mut self) -> Result<Vec<Question>> {
        self.get_all()
            .await?
            .into_iter()
            .map(Question::try_from)
            .collect()
    }
}
