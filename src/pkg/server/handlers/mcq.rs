use axum::{
    Json,
    extract::{Multipart, multipart::MultipartRejection},
};

use crate::{
    pkg::internal::mcq::{DEFAULT_QUESTION_COUNT, Mcq, generate_mcqs},
    prelude::{Result, ServiceError},
};

/// Accepts a `notes` text file and an optional `numQuestions` field.
pub async fn generate(
    multipart: core::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<Vec<Mcq>>> {
    let mut multipart = multipart.map_err(|e| ServiceError::malformed(e.body_text()))?;
    let mut notes: Option<String> = None;
    let mut num_questions = DEFAULT_QUESTION_COUNT;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::malformed(e.body_text()))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "notes" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ServiceError::malformed(e.body_text()))?;
                notes = Some(String::from_utf8_lossy(&data).into_owned());
            }
            "numQuestions" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| ServiceError::malformed(e.body_text()))?;
                num_questions = raw.trim().parse().map_err(|_| {
                    ServiceError::malformed("numQuestions must be a non-negative integer")
                })?;
            }
            _ => {
                let _ = field
                    .bytes()
                    .await
                    .map_err(|e| ServiceError::malformed(e.body_text()))?;
            }
        }
    }

    let notes = notes.ok_or_else(|| ServiceError::malformed("Please upload a text file."))?;
    if notes.trim().is_empty() {
        return Err(ServiceError::malformed("Uploaded file is empty."));
    }

    let mcqs = generate_mcqs(&notes, num_questions, &mut rand::rng());
    tracing::debug!(requested = num_questions, generated = mcqs.len(), "mcqs generated");
    Ok(Json(mcqs))
}
