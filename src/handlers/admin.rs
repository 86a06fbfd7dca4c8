// src/handlers/admin.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    extract::AppJson,
    models::question::{CreateQuestionRequest, DeleteQuestionsRequest, Question},
    store::{MarksLedger, QuestionBank},
};

/// Returns the whole question bank, answers included.
/// No server-side admin check is performed.
pub async fn list_questions(State(bank): State<QuestionBank>) -> Result<impl IntoResponse, AppError> {
    let questions = bank.all()?;

    Ok(Json(json!({
        "ok": true,
        "questions": questions,
    })))
}

/// Appends a question to the bank under the next free id.
pub async fn add_question(
    State(bank): State<QuestionBank>,
    AppJson(payload): AppJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let id = bank.add(Question::new(payload.q, payload.a))?;
    tracing::info!("Added question {}", id);

    Ok(Json(json!({ "ok": true, "id": id })))
}

/// Deletes the given ids, then renumbers the remaining questions to `1..=N`.
pub async fn delete_questions(
    State(bank): State<QuestionBank>,
    AppJson(payload): AppJson<DeleteQuestionsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = bank.delete(&payload.ids)?;
    tracing::info!("Deleted {} question(s), bank renumbered", deleted);

    Ok(Json(json!({ "ok": true, "deleted": deleted })))
}

/// Returns every recorded attempt keyed by registration number.
pub async fn list_marks(State(marks): State<MarksLedger>) -> Result<impl IntoResponse, AppError> {
    let marks = marks.all()?;

    Ok(Json(json!({
        "ok": true,
        "marks": marks,
    })))
}
