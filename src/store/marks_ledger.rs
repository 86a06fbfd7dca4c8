// src/store/marks_ledger.rs

use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use crate::{error::AppError, models::attempt::Attempt, store::json::JsonStore};

pub type Marks = BTreeMap<String, Vec<Attempt>>;

/// Registration number -> attempts in submission order, backed by `marks.json`.
#[derive(Debug, Clone)]
pub struct MarksLedger {
    store: Arc<JsonStore<Marks>>,
}

impl MarksLedger {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        Ok(Self {
            store: Arc::new(JsonStore::open(path, Marks::new())?),
        })
    }

    pub fn append(&self, reg: &str, attempt: Attempt) -> Result<(), AppError> {
        self.store.update(|marks| {
            marks.entry(reg.to_string()).or_default().push(attempt);
            Ok(())
        })
    }

    pub fn all(&self) -> Result<Marks, AppError> {
        self.store.read(|marks| marks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(name: &str, score: usize) -> Attempt {
        Attempt {
            name: name.to_string(),
            datetime: "2024-01-01 10:00:00".to_string(),
            score,
            total_questions: 1,
            percentage: score as f64 * 100.0,
            questions: vec![1],
            question_texts: vec!["What is 2*2 ?".to_string()],
            student_answers: vec!["4".to_string()],
            correct_answers: vec!["4".to_string()],
        }
    }

    #[test]
    fn attempts_keep_submission_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marks.json");
        let ledger = MarksLedger::open(&path).unwrap();

        ledger.append("12345678", attempt("first", 0)).unwrap();
        ledger.append("12345678", attempt("second", 1)).unwrap();
        ledger.append("87654321", attempt("other", 1)).unwrap();

        let reopened = MarksLedger::open(&path).unwrap();
        let marks = reopened.all().unwrap();
        let names: Vec<_> = marks["12345678"].iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(marks.len(), 2);
        assert!(!marks.contains_key("00000001"));
    }
}
