// src/store/question_bank.rs

use std::{
    collections::{BTreeMap, HashSet},
    path::PathBuf,
    sync::Arc,
};

use rand::seq::SliceRandom;

use crate::{
    error::AppError,
    models::question::{PublicQuestion, Question, QuestionId},
    store::json::JsonStore,
};

pub type Questions = BTreeMap<QuestionId, Question>;

/// The bank a fresh data directory starts with.
pub fn default_questions() -> Questions {
    [
        ("What is 2*2 ?", "4"),
        ("What is 5+5 ?", "10"),
        ("What is 52-44 ?", "8"),
        ("What is 10//3 ?", "3"),
        ("What is 3**2 ?", "9"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((q, a), id)| (id, Question::new(q, a)))
    .collect()
}

/// Renumbers the bank to `1..=N`, keeping ascending order of the old ids.
pub fn reindex(questions: Questions) -> Questions {
    questions.into_values().zip(1..).map(|(q, id)| (id, q)).collect()
}

fn is_contiguous(questions: &Questions) -> bool {
    questions.keys().copied().eq(1..=questions.len() as QuestionId)
}

/// Question bank backed by `questions.json`. Ids stay contiguous `1..=N`.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    store: Arc<JsonStore<Questions>>,
}

impl QuestionBank {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        Self::open_with_default(path, default_questions())
    }

    pub fn open_with_default(path: impl Into<PathBuf>, default: Questions) -> Result<Self, AppError> {
        let store = JsonStore::open(path, default)?;

        if !store.read(is_contiguous)? {
            tracing::warn!(
                "{} has non-contiguous ids, renumbering",
                store.path().display()
            );
            store.update(|questions| {
                *questions = reindex(std::mem::take(questions));
                Ok(())
            })?;
        }

        Ok(Self {
            store: Arc::new(store),
        })
    }

    pub fn all(&self) -> Result<Questions, AppError> {
        self.store.read(|questions| questions.clone())
    }

    pub fn len(&self) -> Result<usize, AppError> {
        self.store.read(|questions| questions.len())
    }

    /// Looks up every id, failing with `NotFound` on the first missing one.
    pub fn resolve(&self, ids: &[QuestionId]) -> Result<Vec<Question>, AppError> {
        self.store.read(|questions| {
            ids.iter()
                .map(|id| {
                    questions
                        .get(id)
                        .cloned()
                        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))
                })
                .collect()
        })?
    }

    /// Picks `min(n, len)` distinct questions uniformly at random, answers withheld.
    pub fn sample(&self, n: usize) -> Result<Vec<PublicQuestion>, AppError> {
        self.store.read(|questions| {
            let ids: Vec<QuestionId> = questions.keys().copied().collect();
            let mut rng = rand::thread_rng();
            ids.choose_multiple(&mut rng, n.min(ids.len()))
                .map(|id| PublicQuestion {
                    id: *id,
                    q: questions[id].q.clone(),
                })
                .collect()
        })
    }

    /// Appends a question as id `len + 1` and returns that id.
    pub fn add(&self, question: Question) -> Result<QuestionId, AppError> {
        self.store.update(|questions| {
            let id = questions.len() as QuestionId + 1;
            questions.insert(id, question);
            Ok(id)
        })
    }

    /// Removes every question in `ids`, renumbers the rest and returns how many went.
    /// The file is rewritten even when nothing matched.
    pub fn delete(&self, ids: &[QuestionId]) -> Result<usize, AppError> {
        let doomed: HashSet<QuestionId> = ids.iter().copied().collect();
        self.store.update(|questions| {
            let before = questions.len();
            questions.retain(|id, _| !doomed.contains(id));
            let removed = before - questions.len();
            *questions = reindex(std::mem::take(questions));
            Ok(removed)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank_of(n: u32) -> (tempfile::TempDir, QuestionBank) {
        let dir = tempfile::tempdir().unwrap();
        let questions = (1..=n)
            .map(|i| (i, Question::new(format!("Q{}", i), format!("A{}", i))))
            .collect();
        let bank = QuestionBank::open_with_default(dir.path().join("questions.json"), questions)
            .unwrap();
        (dir, bank)
    }

    #[test]
    fn default_bank_has_five_questions() {
        let questions = default_questions();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[&1], Question::new("What is 2*2 ?", "4"));
        assert_eq!(questions[&3].a, "8");
    }

    #[test]
    fn deleting_middle_question_renumbers_tail() {
        let (_dir, bank) = bank_of(3);

        let removed = bank.delete(&[2]).unwrap();

        assert_eq!(removed, 1);
        let questions = bank.all().unwrap();
        assert_eq!(questions.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(questions[&1].q, "Q1");
        assert_eq!(questions[&2], Question::new("Q3", "A3"));
    }

    #[test]
    fn unknown_ids_are_ignored_on_delete() {
        let (_dir, bank) = bank_of(2);
        assert_eq!(bank.delete(&[7, 2, 2]).unwrap(), 1);
        assert_eq!(bank.len().unwrap(), 1);
    }

    #[test]
    fn add_uses_next_contiguous_id() {
        let (_dir, bank) = bank_of(3);
        bank.delete(&[1]).unwrap();

        let id = bank.add(Question::new("new", "x")).unwrap();

        assert_eq!(id, 3);
        let questions = bank.all().unwrap();
        assert_eq!(questions[&3].q, "new");
        assert_eq!(questions[&2].q, "Q3");
    }

    #[test]
    fn sample_returns_distinct_ids_from_bank() {
        let (_dir, bank) = bank_of(8);

        for _ in 0..20 {
            let picked = bank.sample(5).unwrap();
            assert_eq!(picked.len(), 5);
            let ids: HashSet<_> = picked.iter().map(|p| p.id).collect();
            assert_eq!(ids.len(), 5);
            assert!(ids.iter().all(|id| (1..=8).contains(id)));
        }
    }

    #[test]
    fn sample_is_capped_by_bank_size() {
        let (_dir, bank) = bank_of(3);
        assert_eq!(bank.sample(5).unwrap().len(), 3);

        let (_dir, empty) = bank_of(0);
        assert!(empty.sample(5).unwrap().is_empty());
    }

    #[test]
    fn resolve_fails_on_missing_id() {
        let (_dir, bank) = bank_of(2);
        assert!(matches!(bank.resolve(&[1, 9]), Err(AppError::NotFound(_))));
        assert_eq!(bank.resolve(&[2, 1]).unwrap()[0].q, "Q2");
    }

    #[test]
    fn gaps_on_disk_are_renumbered_when_opened() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(
            &path,
            r#"{"2": {"q": "two", "a": "2"}, "10": {"q": "ten", "a": "10"}}"#,
        )
        .unwrap();

        let bank = QuestionBank::open(&path).unwrap();

        let questions = bank.all().unwrap();
        assert_eq!(questions[&1].q, "two");
        assert_eq!(questions[&2].q, "ten");
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("\"1\""));
        assert!(!on_disk.contains("\"10\""));
    }
}
