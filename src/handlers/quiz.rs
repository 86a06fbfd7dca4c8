// src/handlers/quiz.rs

use std::sync::LazyLock;

use axum::{Json, extract::State, response::IntoResponse};
use regex::Regex;
use serde_json::json;

use crate::{
    config::Config,
    error::AppError,
    extract::AppJson,
    models::attempt::{Attempt, CheckRegRequest, SubmitAttemptRequest},
    store::{MarksLedger, QuestionBank, StudentRegistry},
};

static REG_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("registration pattern is valid"));

/// True iff `reg` is exactly eight ASCII digits.
pub fn is_valid_registration(reg: &str) -> bool {
    REG_NUMBER.is_match(reg)
}

fn require_registration(reg: &str) -> Result<(), AppError> {
    if is_valid_registration(reg) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid registration number".to_string()))
    }
}

/// Exact, case-sensitive comparison after trimming surrounding whitespace.
pub fn answers_match(given: &str, expected: &str) -> bool {
    given.trim() == expected.trim()
}

/// Returns (score, percentage) for answers paired positionally with the key.
fn grade(student_answers: &[String], correct_answers: &[String]) -> (usize, f64) {
    let total = correct_answers.len();
    if total == 0 {
        return (0, 0.0);
    }

    let score = student_answers
        .iter()
        .zip(correct_answers)
        .filter(|(given, expected)| answers_match(given, expected))
        .count();

    (score, score as f64 / total as f64 * 100.0)
}

/// Validates a registration number and reports whether it belongs to an admin.
pub async fn check_reg(
    State(config): State<Config>,
    AppJson(req): AppJson<CheckRegRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_registration(&req.reg)?;

    Ok(Json(json!({
        "ok": true,
        "admin": config.is_admin(&req.reg),
    })))
}

/// Samples a fresh question set. Answers are never included.
pub async fn get_questions(
    State(config): State<Config>,
    State(bank): State<QuestionBank>,
) -> Result<impl IntoResponse, AppError> {
    let questions = bank.sample(config.questions_per_test)?;

    Ok(Json(json!({
        "ok": true,
        "questions": questions,
    })))
}

/// Scores a submission and appends it to the marks ledger.
///
/// * All question ids are resolved before anything is written.
/// * The student's name is (re)registered, then the attempt is recorded. If the
///   ledger write fails, the previous name is restored before the 500 goes out.
/// * The full attempt, answer key included, is returned.
pub async fn submit_attempt(
    State(bank): State<QuestionBank>,
    State(students): State<StudentRegistry>,
    State(marks): State<MarksLedger>,
    AppJson(req): AppJson<SubmitAttemptRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_registration(&req.reg)?;

    if req.qids.is_empty() {
        return Err(AppError::BadRequest("No questions submitted".to_string()));
    }
    if req.answers.len() != req.qids.len() {
        return Err(AppError::BadRequest(format!(
            "Expected {} answers, got {}",
            req.qids.len(),
            req.answers.len()
        )));
    }

    let questions = bank.resolve(&req.qids)?;
    let (question_texts, correct_answers): (Vec<String>, Vec<String>) =
        questions.into_iter().map(|q| (q.q, q.a)).unzip();

    let (score, percentage) = grade(&req.answers, &correct_answers);

    let attempt = Attempt {
        name: req.name.clone(),
        datetime: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        score,
        total_questions: req.qids.len(),
        percentage,
        questions: req.qids,
        question_texts,
        student_answers: req.answers,
        correct_answers,
    };

    let previous_name = students.name_of(&req.reg)?;
    students.register(&req.reg, &req.name)?;

    if let Err(e) = marks.append(&req.reg, attempt.clone()) {
        if let Err(restore) = students.restore(&req.reg, previous_name) {
            tracing::error!("Failed to restore registry entry for {}: {}", req.reg, restore);
        }
        return Err(e);
    }

    tracing::info!(
        "Recorded attempt for {}: {}/{}",
        req.reg,
        attempt.score,
        attempt.total_questions
    );

    Ok(Json(json!({
        "ok": true,
        "attempt": attempt,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_registration_accepts_eight_digits() {
        assert!(is_valid_registration("12345678"));
        assert!(is_valid_registration("00000000"));
    }

    #[test]
    fn test_registration_rejects_everything_else() {
        for reg in ["", "1234567", "123456789", "1234567a", " 12345678", "１２３４５６７８"] {
            assert!(!is_valid_registration(reg), "{:?} should be rejected", reg);
        }
    }

    #[test]
    fn test_answers_trimmed_but_case_sensitive() {
        assert!(answers_match("4 ", "4"));
        assert!(answers_match("\t10\n", " 10"));
        assert!(!answers_match("Four", "4"));
        assert!(!answers_match("yes", "Yes"));
    }

    #[test]
    fn test_grade_perfect() {
        let (score, pct) = grade(&owned(&["4", "8"]), &owned(&["4", "8"]));
        assert_eq!(score, 2);
        assert_eq!(pct, 100.0);
    }

    #[test]
    fn test_grade_half() {
        let (score, pct) = grade(&owned(&["4", "9"]), &owned(&["4", "8"]));
        assert_eq!(score, 1);
        assert_eq!(pct, 50.0);
    }

    #[test]
    fn test_grade_zero() {
        let (score, pct) = grade(&owned(&[""]), &owned(&["3"]));
        assert_eq!(score, 0);
        assert_eq!(pct, 0.0);
    }
}
