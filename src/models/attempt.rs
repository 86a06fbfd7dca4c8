// src/models/attempt.rs

use serde::{Deserialize, Serialize};

use crate::models::question::{QuestionId, deserialize_ids};

/// One scored quiz submission, as appended to the marks ledger.
///
/// The four per-question vectors always have `total_questions` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub name: String,
    /// Local submission time, `%Y-%m-%d %H:%M:%S`.
    pub datetime: String,
    pub score: usize,
    pub total_questions: usize,
    pub percentage: f64,
    pub questions: Vec<QuestionId>,
    pub question_texts: Vec<String>,
    pub student_answers: Vec<String>,
    pub correct_answers: Vec<String>,
}

/// DTO for `POST /api/check_reg`.
#[derive(Debug, Deserialize)]
pub struct CheckRegRequest {
    #[serde(default)]
    pub reg: String,
}

/// DTO for `POST /api/submit_attempt`.
#[derive(Debug, Deserialize)]
pub struct SubmitAttemptRequest {
    pub reg: String,
    #[serde(default)]
    pub name: String,
    pub answers: Vec<String>,
    #[serde(deserialize_with = "deserialize_ids")]
    pub qids: Vec<QuestionId>,
}
