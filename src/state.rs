use crate::{
    config::Config,
    error::AppError,
    store::{MarksLedger, QuestionBank, StudentRegistry},
};
use axum::extract::FromRef;

pub const QUESTIONS_FILE: &str = "questions.json";
pub const MARKS_FILE: &str = "marks.json";
pub const STUDENTS_FILE: &str = "students.json";

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub questions: QuestionBank,
    pub students: StudentRegistry,
    pub marks: MarksLedger,
}

impl AppState {
    /// Opens the three data files under `config.data_dir`, creating defaults as needed.
    pub fn load(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.data_dir)?;

        Ok(Self {
            questions: QuestionBank::open(config.data_dir.join(QUESTIONS_FILE))?,
            students: StudentRegistry::open(config.data_dir.join(STUDENTS_FILE))?,
            marks: MarksLedger::open(config.data_dir.join(MARKS_FILE))?,
            config: config.clone(),
        })
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for QuestionBank {
    fn from_ref(state: &AppState) -> Self {
        state.questions.clone()
    }
}

impl FromRef<AppState> for StudentRegistry {
    fn from_ref(state: &AppState) -> Self {
        state.students.clone()
    }
}

impl FromRef<AppState> for MarksLedger {
    fn from_ref(state: &AppState) -> Self {
        state.marks.clone()
    }
}
