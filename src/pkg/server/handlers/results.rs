use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    pkg::{
        internal::adaptors::results::{selectors::ResultSelector, spec::ResultEntry},
        server::state::AppState,
    },
    prelude::{Result, ServiceError},
};

pub async fn list(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<ResultEntry>>> {
    let student_id = student_id.trim();
    if student_id.is_empty() {
        return Err(ServiceError::malformed("studentId is required"));
    }
    let mut conn = state.acquire().await?;
    let rows = ResultSelector::new(&mut *conn)
        .get_results_for_student(student_id)
        .await?;
    tracing::debug!(student_id, count = rows.len(), "results listed");
    Ok(Json(rows))
}
