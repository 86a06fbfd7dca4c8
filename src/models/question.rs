// src/models/question.rs

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Numeric question id. Serialised as a string key (`"1".."N"`) inside the bank file.
pub type QuestionId = u32;

/// One entry of the question bank, stored under its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to students.
    pub q: String,

    /// The expected answer.
    pub a: String,
}

impl Question {
    pub fn new(q: impl Into<String>, a: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            a: a.into(),
        }
    }
}

/// DTO for sending a question to students (answer withheld).
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuestion {
    pub id: QuestionId,
    pub q: String,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(
        length(min = 1, max = 1000, message = "Question text must be 1 to 1000 characters."),
        custom(function = not_blank)
    )]
    pub q: String,
    #[validate(
        length(min = 1, max = 500, message = "Answer must be 1 to 500 characters."),
        custom(function = not_blank)
    )]
    pub a: String,
}

/// Answers are compared after trimming, so whitespace-only text would match an empty answer.
fn not_blank(text: &str) -> Result<(), validator::ValidationError> {
    if text.trim().is_empty() {
        return Err(validator::ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// DTO for deleting questions. A missing `ids` list deletes nothing.
#[derive(Debug, Deserialize)]
pub struct DeleteQuestionsRequest {
    #[serde(default, deserialize_with = "deserialize_ids")]
    pub ids: Vec<QuestionId>,
}

/// Clients send ids either as JSON numbers or as numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(QuestionId),
    Text(String),
}

pub fn deserialize_ids<'de, D>(deserializer: D) -> Result<Vec<QuestionId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<IdRepr>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|id| match id {
            IdRepr::Number(n) => Ok(n),
            IdRepr::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid question id '{}'", s))),
        })
        .collect()
}
