use std::collections::HashMap;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::{
    pkg::{
        internal::{
            adaptors::{
                questions::selectors::QuestionSelector,
                results::{mutators::ResultMutator, spec::ResultEntry},
            },
            evaluator::{EvaluationResult, evaluate},
        },
        server::state::AppState,
    },
    prelude::{Result, ServiceError},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInput {
    pub student_id: Option<String>,
    pub answers: Option<HashMap<i32, Option<String>>>,
}

#[derive(Debug)]
pub struct Submission {
    pub student_id: String,
    pub answers: HashMap<i32, String>,
}

impl SubmitInput {
    pub fn validate(self) -> Result<Submission> {
        let student_id = self
            .student_id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ServiceError::malformed("studentId is required"))?;
        // a null answer is treated like an omitted one
        let answers = self
            .answers
            .ok_or_else(|| ServiceError::malformed("answers is required"))?
            .into_iter()
            .filter_map(|(id, answer)| answer.map(|a| (id, a)))
            .collect();
        Ok(Submission {
            student_id,
            answers,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SubmissionOutcome {
    #[serde(flatten)]
    pub result: EvaluationResult,
    pub persisted: bool,
}

pub async fn submit(
    State(state): State<AppState>,
    payload: core::result::Result<Json<SubmitInput>, JsonRejection>,
) -> Result<Json<SubmissionOutcome>> {
    let Json(input) = payload.map_err(|e| ServiceError::malformed(e.body_text()))?;
    let submission = input.validate()?;

    let mut conn = state.acquire().await?;
    let questions = QuestionSelector::new(&mut *conn)
        .get_question_bank()
        .await?;
    let result = evaluate(&questions, &submission.answers);
    tracing::debug!(
        student_id = %submission.student_id,
        total = result.total,
        scored = result.scored,
        status = %result.status,
        "submission evaluated"
    );

    let stored = ResultMutator::new(&mut *conn)
        .create(&submission.student_id, &result)
        .await;
    let persisted = report_persistence(&submission.student_id, stored);
    Ok(Json(SubmissionOutcome { result, persisted }))
}

/// The score is returned whether or not it was stored, so a failed write is
/// only logged and flagged in the response.
fn report_persistence(student_id: &str, stored: Result<ResultEntry>) -> bool {
    match stored {
        Ok(entry) => {
            tracing::debug!(student_id, result_id = entry.id, "result persisted");
            true
        }
        Err(err) => {
            tracing::error!(student_id, code = err.code(), "result not persisted: {}", err);
            false
        }
    }
}
