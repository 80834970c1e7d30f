use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResultEntry {
    pub id: i32,
    pub student_id: String,
    pub total_marks: i64,
    pub scored_marks: i64,
    pub skill_score: f64,
    pub placement_status: String,
    pub created_at: DateTime<Utc>,
}
